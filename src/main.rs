//! Mirai headless driver
//!
//! Runs the dashboard core without a browser:
//! - Run a live session and log its events
//! - Simulate one chat exchange
//! - Dump a chart's draw commands
//! - Generate the default config

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mirai::chart::{render_to_json, ChartId, RandomSource, RecordingSurface, SeriesSource};
use mirai::chat::Sender;
use mirai::clock::{Clock, ManualClock, SystemClock};
use mirai::config::{generate_default_config, write_default_config};
use mirai::{Config, Dashboard, DashboardEvent, Input, LoggingConfig, Theme};

/// Poll period of the live session
const TICK_INTERVAL_MS: u64 = 50;

#[derive(Parser)]
#[command(name = "mirai")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Headless driver for the Mirai AI dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: user config dir, then ./mirai.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the dashboard on the wall clock and log its events
    Run {
        /// Stop after this many seconds (default: until Ctrl-C)
        #[arg(short, long)]
        duration_secs: Option<u64>,
    },

    /// Send one chat message and print the transcript
    Chat {
        /// Message text
        text: String,
    },

    /// Print a chart's draw commands as JSON
    Render {
        /// Chart name (e.g. tasksChart or memory_growth)
        chart: ChartId,
        /// Surface width (default: the chart's canvas width)
        #[arg(long)]
        width: Option<f64>,
        /// Surface height (default: the chart's canvas height)
        #[arg(long)]
        height: Option<f64>,
        /// Theme (default: from config)
        #[arg(short, long)]
        theme: Option<Theme>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load_default(),
    };
    init_tracing(&config.logging);

    match cli.command {
        Commands::Run { duration_secs } => run(config, duration_secs).await,
        Commands::Chat { text } => chat(config, &text),
        Commands::Render {
            chart,
            width,
            height,
            theme,
        } => {
            let (default_width, default_height) = chart.default_size();
            let theme = theme.unwrap_or(config.dashboard.theme);
            let mut source = series_source(&config);
            let json = render_to_json(
                chart,
                width.unwrap_or(default_width),
                height.unwrap_or(default_height),
                theme,
                source.as_mut(),
            )?;
            println!("{}", json);
            Ok(())
        }
        Commands::Config { output } => {
            match output {
                Some(path) => {
                    write_default_config(&path)?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", generate_default_config()),
            }
            Ok(())
        }
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("mirai={}", logging.level).into());
    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn series_source(config: &Config) -> Box<dyn SeriesSource> {
    match config.dashboard.seed {
        Some(seed) => Box::new(RandomSource::seeded(seed)),
        None => Box::new(RandomSource::new()),
    }
}

async fn run(config: Config, duration_secs: Option<u64>) -> anyhow::Result<()> {
    tracing::info!("Mirai dashboard v{}", env!("CARGO_PKG_VERSION"));

    let source = series_source(&config);
    let mut dash = Dashboard::new(config, Box::new(SystemClock), source);
    for chart in ChartId::ALL {
        let (width, height) = chart.default_size();
        dash.bind_surface(chart, Box::new(RecordingSurface::new(width, height)));
    }
    dash.start();
    log_events(&mut dash);

    let deadline = duration_secs.map(|secs| tokio::time::Instant::now() + Duration::from_secs(secs));
    let mut interval = tokio::time::interval(Duration::from_millis(TICK_INTERVAL_MS));
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                dash.tick();
                log_events(&mut dash);
                if deadline.is_some_and(|d| tokio::time::Instant::now() >= d) {
                    break;
                }
            }
            _ = &mut shutdown => {
                tracing::info!("Shutting down...");
                break;
            }
        }
    }

    dash.stop();
    let user = dash.session().user();
    tracing::info!(
        tokens_used = user.tokens_used,
        log_entries = dash.log().len(),
        uptime = %dash.header().uptime,
        "Session finished"
    );
    Ok(())
}

fn log_events(dash: &mut Dashboard) {
    for event in dash.drain_events() {
        match &event {
            DashboardEvent::CounterUpdated { .. } => tracing::trace!(?event, "Dashboard event"),
            DashboardEvent::LogEntryAdded { entry } => tracing::info!(
                module = %entry.module,
                severity = entry.severity.css_class(),
                "{}",
                entry.message
            ),
            _ => tracing::debug!(?event, "Dashboard event"),
        }
    }
}

fn chat(config: Config, text: &str) -> anyhow::Result<()> {
    let clock = ManualClock::new(SystemClock.now_ms());
    let settle = config.chat.typing_delay_ms + config.chat.reply_delay_ms;
    let source = series_source(&config);

    let mut dash = Dashboard::new(config, Box::new(clock.clone()), source);
    dash.start();
    dash.handle(Input::ChatInput(text.to_string()));
    dash.handle(Input::ChatSend);

    clock.advance(settle);
    dash.tick();
    dash.stop();

    if dash.chat().messages().is_empty() {
        anyhow::bail!("Nothing to send: message is blank");
    }
    for message in dash.chat().messages() {
        let who = match message.sender {
            Sender::User => "you",
            Sender::Assistant => "mirai",
        };
        println!("[{}] {}: {}", message.time, who, message.text);
    }
    Ok(())
}
