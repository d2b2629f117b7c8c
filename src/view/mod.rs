//! Views
//!
//! - **registry**: exclusive group of named views
//! - **navigation**: top-level sections and nav-link highlighting
//! - **tabs**: settings panel selection

pub mod navigation;
pub mod registry;
pub mod tabs;

pub use navigation::{Navigation, NavigationController, Section, DASHBOARD, SECTIONS};
pub use registry::ViewRegistry;
pub use tabs::{SettingsTab, SettingsTabs, SETTINGS_TABS};
