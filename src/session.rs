//! Session State
//!
//! The single process-wide record of the dashboard: which section is
//! visible, the active theme and the user statistics snapshot. It is created
//! once from fixed seed values and mutated in place; nothing is persisted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The other theme
    pub fn flipped(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Glyph shown on the theme toggle
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Dark => "🌙",
            Theme::Light => "☀️",
        }
    }

    /// Body class applied for this theme
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Dark => "dark-theme",
            Theme::Light => "light-theme",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Dark => write!(f, "dark"),
            Theme::Light => write!(f, "light"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("unknown theme: {}", other)),
        }
    }
}

/// User statistics shown on the dashboard cards
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserSnapshot {
    pub name: String,
    pub tokens_used: u64,
    pub tasks_completed: u64,
    pub active_time: String,
    pub memory_usage: String,
}

impl Default for UserSnapshot {
    fn default() -> Self {
        Self {
            name: "User".to_string(),
            tokens_used: 12_450,
            tasks_completed: 127,
            active_time: "18h 24m".to_string(),
            memory_usage: "256 MB".to_string(),
        }
    }
}

/// Process-wide dashboard state, owned by [`crate::app::Dashboard`]
#[derive(Debug, Clone, Serialize)]
pub struct SessionState {
    current_section: String,
    theme: Theme,
    user: UserSnapshot,
}

impl SessionState {
    pub fn new(current_section: impl Into<String>, theme: Theme) -> Self {
        Self {
            current_section: current_section.into(),
            theme,
            user: UserSnapshot::default(),
        }
    }

    pub fn current_section(&self) -> &str {
        &self.current_section
    }

    pub fn set_current_section(&mut self, section: impl Into<String>) {
        self.current_section = section.into();
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn user(&self) -> &UserSnapshot {
        &self.user
    }

    pub fn user_mut(&mut self) -> &mut UserSnapshot {
        &mut self.user
    }
}

/// Format a counter with thousands separators ("12,450")
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format an elapsed duration as "{d}d {h}h {m}m"
pub fn format_uptime(elapsed_ms: u64) -> String {
    let minutes = elapsed_ms / 60_000;
    format!("{}d {}h {}m", minutes / 1440, (minutes / 60) % 24, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_flip_and_icon() {
        assert_eq!(Theme::Dark.flipped(), Theme::Light);
        assert_eq!(Theme::Light.flipped(), Theme::Dark);
        assert_eq!(Theme::Dark.icon(), "🌙");
        assert_eq!(Theme::Light.icon(), "☀️");
        assert_eq!("LIGHT".parse::<Theme>(), Ok(Theme::Light));
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_seed_values() {
        let session = SessionState::new("dashboard", Theme::Dark);
        assert_eq!(session.current_section(), "dashboard");
        assert_eq!(session.user().tokens_used, 12_450);
        assert_eq!(session.user().tasks_completed, 127);
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(12_450), "12,450");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(0), "0d 0h 0m");
        assert_eq!(format_uptime(12 * 60_000), "0d 0h 12m");
        assert_eq!(format_uptime((26 * 60 + 5) * 60_000), "1d 2h 5m");
    }
}
