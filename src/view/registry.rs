//! Exclusive view group
//!
//! An ordered set of named views of which at most one is active. Both the
//! top-level sections and the settings panels are built on it.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct ViewSlot {
    id: String,
    active: bool,
}

/// Ordered views with at most one active
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewRegistry {
    views: Vec<ViewSlot>,
}

impl ViewRegistry {
    /// Build a registry with every view inactive; duplicate ids are dropped
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut views: Vec<ViewSlot> = Vec::new();
        for id in ids {
            let id = id.into();
            if !views.iter().any(|v| v.id == id) {
                views.push(ViewSlot { id, active: false });
            }
        }
        Self { views }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.views.iter().any(|v| v.id == id)
    }

    /// Deactivate everything, then activate `id` if it exists
    ///
    /// Returns whether a view was activated. An unknown id leaves the group
    /// with no active view.
    pub fn activate(&mut self, id: &str) -> bool {
        let mut found = false;
        for view in &mut self.views {
            view.active = view.id == id;
            found |= view.active;
        }
        found
    }

    pub fn active(&self) -> Option<&str> {
        self.views.iter().find(|v| v.active).map(|v| v.id.as_str())
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.views.iter().any(|v| v.active && v.id == id)
    }

    pub fn active_count(&self) -> usize {
        self.views.iter().filter(|v| v.active).count()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.views.iter().map(|v| v.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}
