//! Dashboard counters
//!
//! The two headline counters climb from zero at startup, then hold whatever
//! value the stats ticker last wrote.

use rand::Rng;
use serde::Serialize;

use crate::animation::CounterAnimation;
use crate::clock::Millis;

/// Upper bound (exclusive) of the periodic token bump
const TOKEN_BUMP_MAX: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Counter {
    TokensUsed,
    TasksCompleted,
}

impl Counter {
    pub const ALL: [Counter; 2] = [Counter::TokensUsed, Counter::TasksCompleted];

    pub fn element_id(self) -> &'static str {
        match self {
            Counter::TokensUsed => "tokensUsed",
            Counter::TasksCompleted => "tasksCompleted",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Counter::TokensUsed => "Tokens Used",
            Counter::TasksCompleted => "Tasks Completed",
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct CounterDisplay {
    shown: u64,
    animation: Option<CounterAnimation>,
}

/// Displayed values of the headline counters
#[derive(Debug, Clone, Default)]
pub struct CounterBoard {
    tokens: CounterDisplay,
    tasks: CounterDisplay,
}

impl CounterBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting `counter` up from zero to `target`
    pub fn animate(&mut self, counter: Counter, target: u64, now: Millis, duration: Millis) {
        let display = self.display_mut(counter);
        display.shown = 0;
        display.animation = Some(CounterAnimation::new(target, now, duration));
    }

    /// Show `value` immediately, ending any animation
    pub fn set(&mut self, counter: Counter, value: u64) {
        let display = self.display_mut(counter);
        display.shown = value;
        display.animation = None;
    }

    /// Step running animations to `now`; returns counters whose value changed
    pub fn advance(&mut self, now: Millis) -> Vec<(Counter, u64)> {
        let mut changed = Vec::new();
        for counter in Counter::ALL {
            let display = self.display_mut(counter);
            let Some(animation) = display.animation else {
                continue;
            };
            let value = animation.value_at(now);
            if value != display.shown {
                display.shown = value;
                changed.push((counter, value));
            }
            if animation.is_finished(now) {
                display.animation = None;
            }
        }
        changed
    }

    pub fn displayed(&self, counter: Counter) -> u64 {
        match counter {
            Counter::TokensUsed => self.tokens.shown,
            Counter::TasksCompleted => self.tasks.shown,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.tokens.animation.is_some() || self.tasks.animation.is_some()
    }

    fn display_mut(&mut self, counter: Counter) -> &mut CounterDisplay {
        match counter {
            Counter::TokensUsed => &mut self.tokens,
            Counter::TasksCompleted => &mut self.tasks,
        }
    }
}

/// Random token usage added on each stats tick, in `0..10`
pub fn token_bump<R: Rng + ?Sized>(rng: &mut R) -> u64 {
    rng.gen_range(0..TOKEN_BUMP_MAX)
}
