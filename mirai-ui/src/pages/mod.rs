//! Pages
//!
//! One component per top-level section. All four stay mounted; the
//! navigation controller decides which one is visible.

pub mod chat;
pub mod dashboard;
pub mod settings;
pub mod statistics;

pub use chat::ChatPage;
pub use dashboard::DashboardPage;
pub use settings::SettingsPage;
pub use statistics::StatisticsPage;
