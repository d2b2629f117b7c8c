//! Settings Tab Controller

use serde::Serialize;

use super::registry::ViewRegistry;

/// A settings tab and its panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SettingsTab {
    pub id: &'static str,
    pub label: &'static str,
}

pub const SETTINGS_TABS: [SettingsTab; 4] = [
    SettingsTab {
        id: "general",
        label: "General",
    },
    SettingsTab {
        id: "appearance",
        label: "Appearance",
    },
    SettingsTab {
        id: "notifications",
        label: "Notifications",
    },
    SettingsTab {
        id: "privacy",
        label: "Privacy",
    },
];

/// Exclusive tab/panel selection inside the settings section
#[derive(Debug, Clone)]
pub struct SettingsTabs {
    panels: ViewRegistry,
}

impl SettingsTabs {
    /// Tabs from [`SETTINGS_TABS`] with the first one selected
    pub fn new() -> Self {
        let mut panels = ViewRegistry::new(SETTINGS_TABS.iter().map(|t| t.id));
        panels.activate(SETTINGS_TABS[0].id);
        Self { panels }
    }

    /// Activate the tab and panel named `tab_id`
    ///
    /// An unknown id leaves every tab inactive.
    pub fn select_tab(&mut self, tab_id: &str) -> bool {
        let found = self.panels.activate(tab_id);
        tracing::debug!(tab = tab_id, found, "Settings tab selected");
        found
    }

    pub fn active_tab(&self) -> Option<&str> {
        self.panels.active()
    }

    pub fn is_active(&self, tab_id: &str) -> bool {
        self.panels.is_active(tab_id)
    }
}

impl Default for SettingsTabs {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tab() {
        let tabs = SettingsTabs::new();
        assert_eq!(tabs.active_tab(), Some("general"));
    }

    #[test]
    fn test_select_tab() {
        let mut tabs = SettingsTabs::new();
        assert!(tabs.select_tab("privacy"));
        assert_eq!(tabs.active_tab(), Some("privacy"));
        assert!(!tabs.is_active("general"));

        assert!(!tabs.select_tab("billing"));
        assert_eq!(tabs.active_tab(), None);
    }
}
