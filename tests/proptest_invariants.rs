//! Property-based invariant tests for the dashboard core.
//!
//! 1. At most one section is active after any navigation sequence.
//! 2. The log feed never exceeds its capacity and keeps newest first.
//! 3. Pie sectors cover the full circle when any value is positive.
//! 4. The counter animation never decreases and lands on its target.
//! 5. Chat submissions append a user message iff the trimmed text is non-empty.

use mirai::animation::CounterAnimation;
use mirai::chart::pie::sectors;
use mirai::chart::{Color, PieEntry};
use mirai::chat::ChatSimulator;
use mirai::session::SessionState;
use mirai::ticker::{LogEntry, LogFeed, Severity};
use mirai::view::{NavigationController, SECTIONS};
use mirai::Theme;
use proptest::prelude::*;
use std::f64::consts::TAU;

// ── Helpers ─────────────────────────────────────────────────────────────

fn section_id_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => prop::sample::select(SECTIONS.iter().map(|s| s.id.to_string()).collect::<Vec<_>>()),
        1 => "[a-z]{1,10}",
    ]
}

fn entry(n: usize) -> LogEntry {
    LogEntry {
        time: "12:00:00".into(),
        module: "System".into(),
        message: n.to_string(),
        severity: Severity::Info,
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Section exclusivity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn at_most_one_section_active(ids in prop::collection::vec(section_id_strategy(), 1..30)) {
        let mut nav = NavigationController::new();
        let mut session = SessionState::new("dashboard", Theme::Dark);

        for (step, id) in ids.iter().enumerate() {
            nav.navigate(&mut session, id, step as u64);
            prop_assert!(nav.active_count() <= 1);
        }

        let last = ids.last().unwrap();
        let known = SECTIONS.iter().any(|s| s.id == last.as_str());
        prop_assert_eq!(nav.active_count(), usize::from(known));
        prop_assert_eq!(session.current_section(), last.as_str());
        prop_assert_eq!(nav.highlighted().is_some(), known);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Log feed bound
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn log_feed_bounded_newest_first(capacity in 1usize..40, pushes in 0usize..100) {
        let mut feed = LogFeed::new(capacity);
        for n in 0..pushes {
            feed.push(entry(n));
            prop_assert!(feed.len() <= capacity);
        }
        prop_assert_eq!(feed.len(), pushes.min(capacity));
        if pushes > 0 {
            let newest = (pushes - 1).to_string();
            prop_assert_eq!(&feed.latest().unwrap().message, &newest);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Pie sectors sum to 2π
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn pie_sweeps_cover_circle(values in prop::collection::vec(0.0f64..1e6, 1..12)) {
        let entries: Vec<_> = values
            .iter()
            .map(|v| PieEntry::new("slice", *v, Color::hex(0x426ff6)))
            .collect();
        let spans = sectors(&entries);

        if values.iter().any(|v| *v > 0.0) {
            let total: f64 = spans.iter().map(|s| s.sweep).sum();
            prop_assert!((total - TAU).abs() < 1e-6, "sweeps sum to {}", total);
            for pair in spans.windows(2) {
                prop_assert!((pair[0].end() - pair[1].start).abs() < 1e-9);
            }
        } else {
            prop_assert!(spans.is_empty());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Counter monotonicity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn counter_monotone_and_lands(target in 0u64..1_000_000, mut times in prop::collection::vec(0u64..2_000, 1..50)) {
        times.sort_unstable();
        let anim = CounterAnimation::new(target, 0, 1_000);

        let mut last = 0;
        for t in times {
            let value = anim.value_at(t);
            prop_assert!(value >= last);
            prop_assert!(value <= target);
            if t >= 1_000 {
                prop_assert_eq!(value, target);
            }
            last = value;
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Chat submission
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn chat_submit_appends_iff_nonblank(text in "[ \t\na-z]{0,16}") {
        let mut chat = ChatSimulator::new();
        chat.set_input(text.clone());
        let ticket = chat.submit(0);

        let trimmed = text.trim();
        prop_assert_eq!(ticket.is_some(), !trimmed.is_empty());
        prop_assert_eq!(chat.messages().len(), usize::from(!trimmed.is_empty()));
        if let Some(message) = chat.messages().first() {
            prop_assert_eq!(message.text.as_str(), trimmed);
        }
    }
}
