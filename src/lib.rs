//! # Mirai
//!
//! Dashboard core for the Mirai AI single-page app: section navigation,
//! settings tabs, theme switching, six canvas charts fed by sample data, a
//! simulated chat assistant and timer-driven statistics.
//!
//! Nothing here touches a browser. Charts draw onto any [`chart::Surface`],
//! time comes from an injected [`clock::Clock`], and every timer lives in
//! one [`scheduler::Scheduler`] that the host drives through
//! [`Dashboard::tick`].
//!
//! ## Modules
//!
//! - [`app`]: the [`Dashboard`] controller tying everything together
//! - [`view`]: section and settings-tab selection
//! - [`chart`]: draw routines, surfaces and series sources
//! - [`chat`]: the canned-reply chat simulator
//! - [`ticker`]: headline counters and the activity log
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use mirai::chart::{ChartId, RandomSource, SharedSurface};
//! use mirai::clock::ManualClock;
//! use mirai::{Config, Dashboard, Input};
//!
//! let clock = ManualClock::default();
//! let mut dash = Dashboard::new(
//!     Config::default(),
//!     Box::new(clock.clone()),
//!     Box::new(RandomSource::seeded(7)),
//! );
//! dash.bind_surface(ChartId::Tasks, Box::new(SharedSurface::new(300.0, 300.0)));
//! dash.start();
//!
//! dash.handle(Input::ChatInput("status?".into()));
//! dash.handle(Input::ChatSend);
//!
//! clock.advance(2_000);
//! dash.tick();
//! assert_eq!(dash.chat().messages().len(), 2);
//! ```

pub mod animation;
pub mod app;
pub mod chart;
pub mod chat;
pub mod clock;
pub mod config;
pub mod error;
pub mod scheduler;
pub mod session;
pub mod ticker;
pub mod view;

// Re-export top-level types for convenience
pub use app::{Dashboard, DashboardEvent, Header, Input};
pub use config::{Config, ConfigError, LoggingConfig};
pub use error::{MiraiError, MiraiResult};
pub use session::{SessionState, Theme, UserSnapshot};
