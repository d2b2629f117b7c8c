//! Time sources
//!
//! Everything time-dependent reads milliseconds since the Unix epoch from a
//! [`Clock`]. The wall clock drives real sessions; [`ManualClock`] lets tests
//! and the headless `chat`/`render` commands step time deterministically.

use chrono::{DateTime, Local, Utc};
use std::cell::Cell;
use std::rc::Rc;

/// Milliseconds since the Unix epoch
pub type Millis = u64;

/// A source of the current time
pub trait Clock {
    fn now_ms(&self) -> Millis;
}

/// Wall clock backed by `chrono::Utc::now`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> Millis {
        Utc::now().timestamp_millis().max(0) as Millis
    }
}

/// Clock that only moves when told to
///
/// Clones share the same underlying time, so a test can keep one handle and
/// give another to the dashboard.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Millis>>,
}

impl ManualClock {
    pub fn new(start_ms: Millis) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn advance(&self, delta_ms: Millis) {
        self.now.set(self.now.get() + delta_ms);
    }

    pub fn set(&self, now_ms: Millis) {
        self.now.set(now_ms);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        // 2025-01-01T00:00:00Z
        Self::new(1_735_689_600_000)
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> Millis {
        self.now.get()
    }
}

/// Convert an epoch timestamp to local time
pub fn local_time(ms: Millis) -> DateTime<Local> {
    DateTime::<Utc>::from_timestamp_millis(ms as i64)
        .unwrap_or_default()
        .with_timezone(&Local)
}

/// "HH:MM" as shown on chat messages and the header
pub fn format_hm(ms: Millis) -> String {
    local_time(ms).format("%H:%M").to_string()
}

/// "HH:MM:SS" as shown on log entries
pub fn format_hms(ms: Millis) -> String {
    local_time(ms).format("%H:%M:%S").to_string()
}

/// Long header date, e.g. "16 October 2026"
pub fn format_date(ms: Millis) -> String {
    local_time(ms).format("%-d %B %Y").to_string()
}
