//! Activity log feed
//!
//! Bounded list of synthetic log lines shown on the dashboard. Insertion is
//! always at the head; once the feed exceeds its capacity the oldest entries
//! fall off the tail.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::collections::VecDeque;

use crate::clock::{format_hms, Millis};

pub const LOG_MODULES: [&str; 5] = ["AI.Engine", "Trading.Bot", "API.Server", "System", "Memory"];

pub const LOG_MESSAGES: [&str; 5] = [
    "Request processed successfully",
    "Connection established",
    "Data updated",
    "Task completed",
    "System stable",
];

/// Severity pool; drawing uniformly from it biases 3:1 toward info
const SEVERITY_POOL: [Severity; 4] = [
    Severity::Info,
    Severity::Info,
    Severity::Info,
    Severity::Warning,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
}

impl Severity {
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    /// "HH:MM:SS" local time
    pub time: String,
    pub module: String,
    pub message: String,
    pub severity: Severity,
}

impl LogEntry {
    /// Random module, message and severity stamped at `now`
    pub fn random<R: Rng + ?Sized>(rng: &mut R, now: Millis) -> Self {
        Self {
            time: format_hms(now),
            module: pick(&LOG_MODULES, rng).to_string(),
            message: pick(&LOG_MESSAGES, rng).to_string(),
            severity: SEVERITY_POOL.choose(rng).copied().unwrap_or(Severity::Info),
        }
    }
}

fn pick<R: Rng + ?Sized>(pool: &[&'static str], rng: &mut R) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}

/// Newest-first feed capped at `capacity` entries
#[derive(Debug, Clone, Serialize)]
pub struct LogFeed {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl LogFeed {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Insert at the head and evict from the tail down to capacity
    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push_front(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_back();
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for LogFeed {
    fn default() -> Self {
        Self::new(20)
    }
}
