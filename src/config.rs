//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.
//!
//! Every field has a default, so an empty file (or no file at all) yields
//! the stock dashboard timings.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::MiraiResult;
use crate::session::Theme;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub ticker: TickerConfig,

    #[serde(default)]
    pub chat: ChatConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Startup state of the dashboard
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_section")]
    pub default_section: String,

    #[serde(default)]
    pub theme: Theme,

    /// Seed for sample data and canned replies; random when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_section() -> String {
    "dashboard".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_section: default_section(),
            theme: Theme::default(),
            seed: None,
        }
    }
}

/// Repeating timers and the startup counter animation
#[derive(Debug, Clone, Deserialize)]
pub struct TickerConfig {
    #[serde(default = "default_stats_interval")]
    pub stats_interval_ms: u64,

    #[serde(default = "default_log_interval")]
    pub log_interval_ms: u64,

    #[serde(default = "default_log_capacity")]
    pub log_capacity: usize,

    #[serde(default = "default_clock_interval")]
    pub clock_interval_ms: u64,

    #[serde(default = "default_counter_duration")]
    pub counter_duration_ms: u64,
}

fn default_stats_interval() -> u64 {
    30_000
}

fn default_log_interval() -> u64 {
    15_000
}

fn default_log_capacity() -> usize {
    20
}

fn default_clock_interval() -> u64 {
    1_000
}

fn default_counter_duration() -> u64 {
    1_000
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            stats_interval_ms: default_stats_interval(),
            log_interval_ms: default_log_interval(),
            log_capacity: default_log_capacity(),
            clock_interval_ms: default_clock_interval(),
            counter_duration_ms: default_counter_duration(),
        }
    }
}

/// Simulated assistant reply timings
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    #[serde(default = "default_typing_delay")]
    pub typing_delay_ms: u64,

    #[serde(default = "default_reply_delay")]
    pub reply_delay_ms: u64,
}

fn default_typing_delay() -> u64 {
    500
}

fn default_reply_delay() -> u64 {
    1_500
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            typing_delay_ms: default_typing_delay(),
            reply_delay_ms: default_reply_delay(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("mirai").join("config.toml")),
            Some(PathBuf::from("./mirai.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(theme) = std::env::var("MIRAI_THEME") {
            match theme.parse() {
                Ok(t) => self.dashboard.theme = t,
                Err(_) => tracing::warn!("Ignoring unknown MIRAI_THEME value {:?}", theme),
            }
        }
        if let Ok(seed) = std::env::var("MIRAI_SEED") {
            if let Ok(s) = seed.parse() {
                self.dashboard.seed = Some(s);
            }
        }

        if let Ok(level) = std::env::var("MIRAI_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("MIRAI_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Mirai Dashboard Configuration
#
# Environment variables override these settings:
# - MIRAI_THEME
# - MIRAI_SEED
# - MIRAI_LOG_LEVEL
# - MIRAI_LOG_FORMAT

[dashboard]
# Section shown at startup
default_section = "dashboard"

# Color theme: dark or light
theme = "dark"

# Fixed RNG seed for reproducible sample data (omit for random)
# seed = 42

[ticker]
# Token counter bump and mini chart redraw (ms)
stats_interval_ms = 30000

# Dashboard activity log entry (ms)
log_interval_ms = 15000

# Maximum number of log entries kept
log_capacity = 20

# Header date/time refresh (ms)
clock_interval_ms = 1000

# Startup counter animation length (ms)
counter_duration_ms = 1000

[chat]
# Delay before the typing indicator appears (ms)
typing_delay_ms = 500

# Delay between typing indicator and reply (ms)
reply_delay_ms = 1500

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

/// Write the annotated default config to `path`
pub fn write_default_config(path: &Path) -> MiraiResult<()> {
    std::fs::write(path, generate_default_config())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.dashboard.default_section, "dashboard");
        assert_eq!(config.dashboard.theme, Theme::Dark);
        assert_eq!(config.ticker.stats_interval_ms, 30_000);
        assert_eq!(config.ticker.log_interval_ms, 15_000);
        assert_eq!(config.ticker.log_capacity, 20);
        assert_eq!(config.chat.typing_delay_ms, 500);
        assert_eq!(config.chat.reply_delay_ms, 1_500);
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.ticker.counter_duration_ms, 1_000);
        assert_eq!(config.logging.format, "pretty");
        assert!(config.dashboard.seed.is_none());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[dashboard]\ntheme = \"light\"\nseed = 7\n\n[chat]\nreply_delay_ms = 10").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.dashboard.theme, Theme::Light);
        assert_eq!(config.dashboard.seed, Some(7));
        assert_eq!(config.chat.reply_delay_ms, 10);
        assert_eq!(config.chat.typing_delay_ms, 500);
    }

    #[test]
    fn test_write_default_config_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mirai.toml");
        write_default_config(&path).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.ticker.clock_interval_ms, 1_000);
        assert!(write_default_config(&dir.path().join("missing/mirai.toml")).is_err());
    }

    // Only test that touches MIRAI_* variables
    #[test]
    fn test_env_overrides() {
        const VARS: [&str; 4] = ["MIRAI_THEME", "MIRAI_SEED", "MIRAI_LOG_LEVEL", "MIRAI_LOG_FORMAT"];

        std::env::set_var("MIRAI_THEME", "light");
        std::env::set_var("MIRAI_SEED", "99");
        std::env::set_var("MIRAI_LOG_LEVEL", "debug");
        std::env::set_var("MIRAI_LOG_FORMAT", "json");
        let config = Config::from_env();
        assert_eq!(config.dashboard.theme, Theme::Light);
        assert_eq!(config.dashboard.seed, Some(99));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");

        // Env wins over the file
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[dashboard]\ntheme = \"dark\"\nseed = 7").unwrap();
        let config = Config::load_with_env(file.path()).unwrap();
        assert_eq!(config.dashboard.theme, Theme::Light);
        assert_eq!(config.dashboard.seed, Some(99));

        // Unparseable values leave the file's settings alone
        std::env::set_var("MIRAI_THEME", "sepia");
        std::env::set_var("MIRAI_SEED", "lots");
        let config = Config::load_with_env(file.path()).unwrap();
        assert_eq!(config.dashboard.theme, Theme::Dark);
        assert_eq!(config.dashboard.seed, Some(7));

        for var in VARS {
            std::env::remove_var(var);
        }
        let config = Config::from_env();
        assert_eq!(config.dashboard.theme, Theme::Dark);
        assert!(config.dashboard.seed.is_none());
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_errors() {
        let missing = Config::load(Path::new("/nonexistent/mirai.toml"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[dashboard\ntheme = ").unwrap();
        assert!(matches!(Config::load(file.path()), Err(ConfigError::Parse { .. })));
    }
}
