//! Navigation Controller
//!
//! Maps nav-link and action-button clicks onto the section registry and
//! keeps the nav highlight in step with the session's current section.

use serde::Serialize;

use super::registry::ViewRegistry;
use crate::animation::FadeIn;
use crate::clock::Millis;
use crate::session::SessionState;

/// Identifier of the dashboard section (the log ticker only runs there)
pub const DASHBOARD: &str = "dashboard";

/// A top-level section with its nav link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Sections in nav order
pub const SECTIONS: [Section; 4] = [
    Section {
        id: DASHBOARD,
        label: "Dashboard",
        icon: "📊",
    },
    Section {
        id: "chat",
        label: "Chat",
        icon: "💬",
    },
    Section {
        id: "statistics",
        label: "Statistics",
        icon: "📈",
    },
    Section {
        id: "settings",
        label: "Settings",
        icon: "⚙️",
    },
];

/// Result of a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// The target section is now the only active one
    Shown,
    /// No section matched; nothing is active
    Unknown,
}

/// Section switching and nav-link highlighting
#[derive(Debug, Clone)]
pub struct NavigationController {
    sections: ViewRegistry,
    links: Vec<&'static str>,
    highlighted: Option<&'static str>,
    fade: Option<FadeIn>,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::with_sections(&SECTIONS)
    }

    pub fn with_sections(sections: &[Section]) -> Self {
        Self {
            sections: ViewRegistry::new(sections.iter().map(|s| s.id)),
            links: sections.iter().map(|s| s.id).collect(),
            highlighted: None,
            fade: None,
        }
    }

    /// Show `section_id` and record it as current
    ///
    /// Every section is deactivated first. An unknown id leaves all sections
    /// hidden; the id is still recorded so the highlight clears with it.
    pub fn navigate(
        &mut self,
        session: &mut SessionState,
        section_id: &str,
        now: Millis,
    ) -> Navigation {
        let shown = self.sections.activate(section_id);
        session.set_current_section(section_id);
        self.sync_highlight(session);

        if shown {
            self.fade = Some(FadeIn::new(now));
            tracing::debug!(section = section_id, "Section shown");
            Navigation::Shown
        } else {
            self.fade = None;
            tracing::debug!(section = section_id, "Unknown section, all sections hidden");
            Navigation::Unknown
        }
    }

    /// Highlight the nav link matching the current section, if any
    pub fn sync_highlight(&mut self, session: &SessionState) {
        let current = session.current_section();
        self.highlighted = self.links.iter().copied().find(|link| *link == current);
    }

    pub fn highlighted(&self) -> Option<&str> {
        self.highlighted
    }

    pub fn active_section(&self) -> Option<&str> {
        self.sections.active()
    }

    pub fn is_active(&self, section_id: &str) -> bool {
        self.sections.is_active(section_id)
    }

    pub fn active_count(&self) -> usize {
        self.sections.active_count()
    }

    /// Opacity of a section at `now` (0.0 when hidden)
    pub fn opacity(&self, section_id: &str, now: Millis) -> f64 {
        if !self.sections.is_active(section_id) {
            return 0.0;
        }
        self.fade.map(|f| f.opacity_at(now)).unwrap_or(1.0)
    }

    /// Whether the shown section is still fading in
    pub fn is_fading(&self, now: Millis) -> bool {
        self.fade.is_some_and(|f| !f.is_finished(now))
    }
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new()
    }
}
