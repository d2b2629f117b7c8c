//! Statistics and log ticker
//!
//! - **stats**: headline counters and their startup animation
//! - **log_feed**: bounded, newest-first activity log

pub mod log_feed;
pub mod stats;

pub use log_feed::{LogEntry, LogFeed, Severity, LOG_MESSAGES, LOG_MODULES};
pub use stats::{token_bump, Counter, CounterBoard};
