//! Sample data sources
//!
//! Every chart asks a [`SeriesSource`] for fresh samples on each draw. The
//! request describes the shape of the sample data (`base + step * i +
//! U[0, spread)`); the random source honors it, the fixed source ignores it
//! and replays whatever a test queued.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Shape of a requested series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesRequest {
    pub len: usize,
    pub base: f64,
    pub step: f64,
    pub spread: f64,
}

impl SeriesRequest {
    /// `len` samples uniform in `[base, base + spread)`
    pub const fn uniform(len: usize, base: f64, spread: f64) -> Self {
        Self {
            len,
            base,
            step: 0.0,
            spread,
        }
    }

    /// `len` samples climbing by `step`, with `spread` of noise
    pub const fn trend(len: usize, base: f64, step: f64, spread: f64) -> Self {
        Self {
            len,
            base,
            step,
            spread,
        }
    }
}

/// Provider of chart series
pub trait SeriesSource {
    fn next_series(&mut self, request: &SeriesRequest) -> Vec<f64>;
}

/// Pseudo-random sample data
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SeriesSource for RandomSource {
    fn next_series(&mut self, request: &SeriesRequest) -> Vec<f64> {
        (0..request.len)
            .map(|i| {
                let noise = if request.spread > 0.0 {
                    self.rng.gen_range(0.0..request.spread)
                } else {
                    0.0
                };
                request.base + request.step * i as f64 + noise
            })
            .collect()
    }
}

/// Deterministic source for tests
///
/// Queued series are handed out in order; once the queue is empty every
/// request gets `fallback` repeated to the requested length.
#[derive(Debug, Clone, Default)]
pub struct FixedSource {
    queue: VecDeque<Vec<f64>>,
    fallback: f64,
}

impl FixedSource {
    pub fn constant(value: f64) -> Self {
        Self {
            queue: VecDeque::new(),
            fallback: value,
        }
    }

    pub fn push(mut self, series: Vec<f64>) -> Self {
        self.queue.push_back(series);
        self
    }
}

impl SeriesSource for FixedSource {
    fn next_series(&mut self, request: &SeriesRequest) -> Vec<f64> {
        self.queue
            .pop_front()
            .unwrap_or_else(|| vec![self.fallback; request.len])
    }
}
