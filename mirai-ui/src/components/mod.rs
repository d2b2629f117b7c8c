//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod chat;
pub mod log_feed;
pub mod nav;
pub mod section;
pub mod stat_card;

pub use chart::ChartCanvas;
pub use chat::ChatPanel;
pub use log_feed::LogFeedView;
pub use nav::Nav;
pub use section::SectionView;
pub use stat_card::{CounterCard, StatCard};
