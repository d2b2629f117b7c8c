//! Time-based tweens
//!
//! Linear interpolation over a fixed window, used for the startup counter
//! animation and the section fade-in.

use serde::Serialize;

use crate::clock::Millis;

/// Section fade-in delay after navigation (ms)
pub const FADE_DELAY_MS: Millis = 10;

/// Section fade-in duration (ms)
pub const FADE_DURATION_MS: Millis = 300;

/// Linear progress in [0.0, 1.0] of a window starting at `start`
#[inline]
pub fn progress(start: Millis, duration: Millis, now: Millis) -> f64 {
    if duration == 0 {
        return 1.0;
    }
    let elapsed = now.saturating_sub(start) as f64;
    (elapsed / duration as f64).clamp(0.0, 1.0)
}

/// Counter that climbs linearly from 0 to `target`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CounterAnimation {
    target: u64,
    started_at: Millis,
    duration: Millis,
}

impl CounterAnimation {
    pub fn new(target: u64, started_at: Millis, duration: Millis) -> Self {
        Self {
            target,
            started_at,
            duration,
        }
    }

    /// Displayed value: `floor(target * progress)`
    pub fn value_at(&self, now: Millis) -> u64 {
        let p = progress(self.started_at, self.duration, now);
        if p >= 1.0 {
            self.target
        } else {
            (self.target as f64 * p).floor() as u64
        }
    }

    pub fn is_finished(&self, now: Millis) -> bool {
        now.saturating_sub(self.started_at) >= self.duration
    }
}

/// Opacity ramp applied to a freshly activated section
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FadeIn {
    started_at: Millis,
}

impl FadeIn {
    pub fn new(started_at: Millis) -> Self {
        Self { started_at }
    }

    pub fn opacity_at(&self, now: Millis) -> f64 {
        progress(self.started_at + FADE_DELAY_MS, FADE_DURATION_MS, now)
    }

    pub fn is_finished(&self, now: Millis) -> bool {
        self.opacity_at(now) >= 1.0
    }
}
