//! Task Scheduler
//!
//! Single-threaded timer queue. Tasks are plain values (the dashboard
//! dispatches on them), scheduled either once or on a fixed period, and
//! released in due-time order by [`Scheduler::pop_due`]. Tasks due at the
//! same instant come out in the order they were scheduled.
//!
//! Nothing here sleeps: the owner polls with the current time, so the same
//! queue works under a tokio interval, a browser timer or a manual clock.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::clock::Millis;

#[derive(Debug)]
struct Entry<T> {
    due: Millis,
    seq: u64,
    period: Option<Millis>,
    task: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.due, self.seq).cmp(&(other.due, other.seq))
    }
}

/// A task released by the scheduler, with the instant it was due
#[derive(Debug, Clone, PartialEq)]
pub struct DueTask<T> {
    pub due: Millis,
    pub task: T,
}

/// Timer queue of one-shot and repeating tasks
#[derive(Debug)]
pub struct Scheduler<T> {
    queue: BinaryHeap<Reverse<Entry<T>>>,
    next_seq: u64,
}

impl<T: Clone> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            queue: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Run `task` once at `due`
    pub fn schedule_at(&mut self, due: Millis, task: T) {
        self.push(due, None, task);
    }

    /// Run `task` every `period` ms, first at `start + period`
    pub fn schedule_every(&mut self, start: Millis, period: Millis, task: T) {
        let period = period.max(1);
        self.push(start + period, Some(period), task);
    }

    /// Drop every pending task
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Due time of the earliest pending task
    pub fn next_due(&self) -> Option<Millis> {
        self.queue.peek().map(|Reverse(entry)| entry.due)
    }

    /// Release the earliest task due at or before `now`
    ///
    /// Repeating tasks are re-armed one period after their due time, so a
    /// caller that falls behind receives every missed occurrence in turn.
    pub fn pop_due(&mut self, now: Millis) -> Option<DueTask<T>> {
        if self.next_due()? > now {
            return None;
        }
        let Reverse(entry) = self.queue.pop()?;

        if let Some(period) = entry.period {
            self.push(entry.due + period, Some(period), entry.task.clone());
        }

        Some(DueTask {
            due: entry.due,
            task: entry.task,
        })
    }

    fn push(&mut self, due: Millis, period: Option<Millis>, task: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse(Entry {
            due,
            seq,
            period,
            task,
        }));
    }
}

impl<T: Clone> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(scheduler: &mut Scheduler<&'static str>, now: Millis) -> Vec<(Millis, &'static str)> {
        std::iter::from_fn(|| scheduler.pop_due(now))
            .map(|t| (t.due, t.task))
            .collect()
    }

    #[test]
    fn test_one_shot_ordering() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_at(300, "c");
        scheduler.schedule_at(100, "a");
        scheduler.schedule_at(200, "b");

        assert!(scheduler.pop_due(99).is_none());
        assert_eq!(drain(&mut scheduler, 1_000), vec![(100, "a"), (200, "b"), (300, "c")]);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_ties_keep_schedule_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_at(50, "first");
        scheduler.schedule_at(50, "second");
        scheduler.schedule_at(50, "third");

        let order: Vec<_> = drain(&mut scheduler, 50).into_iter().map(|(_, t)| t).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_repeating_catches_up() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_every(0, 30, "tick");

        let fired = drain(&mut scheduler, 95);
        assert_eq!(fired, vec![(30, "tick"), (60, "tick"), (90, "tick")]);
        assert_eq!(scheduler.next_due(), Some(120));
    }

    #[test]
    fn test_interleaved_periods() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_every(0, 30, "stats");
        scheduler.schedule_every(0, 15, "log");

        let fired = drain(&mut scheduler, 30);
        assert_eq!(fired, vec![(15, "log"), (30, "stats"), (30, "log")]);
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_at(10, "once");
        scheduler.schedule_every(0, 5, "again");
        assert_eq!(scheduler.len(), 2);

        scheduler.clear();
        assert!(scheduler.is_empty());
        assert!(scheduler.pop_due(u64::MAX).is_none());
    }

    #[test]
    fn test_zero_period_clamped() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_every(100, 0, "spin");
        assert_eq!(drain(&mut scheduler, 102), vec![(101, "spin"), (102, "spin")]);
    }
}
