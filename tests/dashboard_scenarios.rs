//! End-to-end dashboard scenarios on a virtual clock

use mirai::chart::{ChartId, FixedSource, SharedSurface};
use mirai::chat::{Sender, CANNED_REPLIES};
use mirai::clock::ManualClock;
use mirai::ticker::Counter;
use mirai::view::{DASHBOARD, SECTIONS};
use mirai::{Config, Dashboard, DashboardEvent, Input, Theme};

fn seeded_config() -> Config {
    let mut config = Config::default();
    config.dashboard.seed = Some(2024);
    config
}

fn dashboard() -> (Dashboard, ManualClock) {
    let clock = ManualClock::default();
    let dash = Dashboard::new(
        seeded_config(),
        Box::new(clock.clone()),
        Box::new(FixedSource::constant(25.0)),
    );
    (dash, clock)
}

fn bind_all(dash: &mut Dashboard) -> Vec<(ChartId, SharedSurface)> {
    ChartId::ALL
        .into_iter()
        .map(|chart| {
            let (width, height) = chart.default_size();
            let surface = SharedSurface::new(width, height);
            dash.bind_surface(chart, Box::new(surface.clone()));
            (chart, surface)
        })
        .collect()
}

#[test]
fn navigate_to_settings() {
    let (mut dash, clock) = dashboard();
    dash.start();

    assert!(dash.handle(Input::NavClick("settings".into())));
    assert_eq!(dash.session().current_section(), "settings");
    for section in SECTIONS {
        assert_eq!(dash.navigation().is_active(section.id), section.id == "settings");
    }
    assert_eq!(dash.navigation().highlighted(), Some("settings"));

    // Fade starts 10 ms after navigation and lasts 300 ms
    assert_eq!(dash.opacity("settings"), 0.0);
    clock.advance(160);
    assert!((dash.opacity("settings") - 0.5).abs() < 1e-9);
    clock.advance(200);
    assert_eq!(dash.opacity("settings"), 1.0);
    assert_eq!(dash.opacity(DASHBOARD), 0.0);
}

#[test]
fn action_button_navigates_like_a_link() {
    let (mut dash, _clock) = dashboard();
    dash.start();
    dash.handle(Input::ActionClick("chat".into()));
    assert!(dash.navigation().is_active("chat"));
    assert_eq!(dash.navigation().highlighted(), Some("chat"));
}

#[test]
fn unknown_section_hides_everything() {
    let (mut dash, _clock) = dashboard();
    dash.start();
    dash.drain_events();

    dash.handle(Input::NavClick("reports".into()));
    assert_eq!(dash.navigation().active_count(), 0);
    assert_eq!(dash.navigation().highlighted(), None);
    assert_eq!(dash.session().current_section(), "reports");
    assert_eq!(
        dash.drain_events(),
        vec![DashboardEvent::SectionChanged {
            section: "reports".into(),
            shown: false
        }]
    );
}

#[test]
fn chat_exchange_trims_and_replies_once() {
    let (mut dash, clock) = dashboard();
    dash.start();

    dash.handle(Input::ChatInput("  hello  ".into()));
    dash.handle(Input::ChatSend);
    assert_eq!(dash.chat().input(), "");
    assert_eq!(dash.chat().messages().len(), 1);
    assert_eq!(dash.chat().messages()[0].text, "hello");

    clock.advance(499);
    dash.tick();
    assert_eq!(dash.chat().typing_count(), 0);

    clock.advance(1);
    dash.tick();
    assert_eq!(dash.chat().typing_count(), 1);

    clock.advance(1_500);
    dash.tick();
    let messages = dash.chat().messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].sender, Sender::Assistant);
    assert!(CANNED_REPLIES.contains(&messages[1].text.as_str()));
    assert_eq!(dash.chat().typing_count(), 0);
}

#[test]
fn blank_chat_is_discarded() {
    let (mut dash, clock) = dashboard();
    dash.start();
    dash.drain_events();

    dash.handle(Input::ChatInput(" \n ".into()));
    dash.handle(Input::ChatSend);
    clock.advance(5_000);
    dash.tick();

    assert!(dash.chat().messages().is_empty());
    assert!(!dash
        .drain_events()
        .iter()
        .any(|e| matches!(e, DashboardEvent::MessageAppended { .. })));
}

#[test]
fn overlapping_chats_each_get_a_reply() {
    let (mut dash, clock) = dashboard();
    dash.start();

    dash.handle(Input::ChatInput("first".into()));
    dash.handle(Input::ChatSend);
    clock.advance(300);
    dash.handle(Input::ChatInput("second".into()));
    dash.handle(Input::ChatSend);

    clock.advance(300);
    dash.tick();
    assert_eq!(dash.chat().typing_count(), 1);
    clock.advance(300);
    dash.tick();
    assert_eq!(dash.chat().typing_count(), 2);

    clock.advance(2_000);
    dash.tick();
    let replies = dash
        .chat()
        .messages()
        .iter()
        .filter(|m| m.sender == Sender::Assistant)
        .count();
    assert_eq!(replies, 2);
}

#[test]
fn log_ticker_only_runs_on_dashboard() {
    let (mut dash, clock) = dashboard();
    dash.start();

    clock.advance(15_000);
    dash.tick();
    assert_eq!(dash.log().len(), 1);

    dash.handle(Input::NavClick("statistics".into()));
    clock.advance(60_000);
    dash.tick();
    assert_eq!(dash.log().len(), 1);

    dash.handle(Input::NavClick(DASHBOARD.into()));
    clock.advance(15_000 * 25);
    dash.tick();
    assert_eq!(dash.log().len(), 20);
}

#[test]
fn theme_flip_redraws_every_chart_once() {
    let (mut dash, clock) = dashboard();
    let surfaces = bind_all(&mut dash);
    dash.start();
    assert!(surfaces.iter().all(|(_, s)| s.clear_count() == 1));
    dash.drain_events();

    dash.handle(Input::ToggleTheme);
    assert_eq!(dash.theme(), Theme::Light);
    assert_eq!(dash.theme().icon(), "☀️");

    clock.advance(99);
    dash.tick();
    assert!(surfaces.iter().all(|(_, s)| s.clear_count() == 1));

    clock.advance(1);
    dash.tick();
    assert!(surfaces.iter().all(|(_, s)| s.clear_count() == 2));

    let redraws: Vec<_> = dash
        .drain_events()
        .into_iter()
        .filter_map(|e| match e {
            DashboardEvent::ChartsRedrawn { charts } => Some(charts),
            _ => None,
        })
        .collect();
    assert_eq!(redraws, vec![ChartId::ALL.to_vec()]);
}

#[test]
fn counters_climb_then_follow_stats() {
    let (mut dash, clock) = dashboard();
    dash.start();

    let mut last = 0;
    for _ in 0..10 {
        clock.advance(100);
        dash.tick();
        let shown = dash.counters().displayed(Counter::TokensUsed);
        assert!(shown >= last);
        last = shown;
    }
    assert_eq!(last, 12_450);

    clock.advance(30_000);
    dash.tick();
    let tokens = dash.session().user().tokens_used;
    assert!(tokens >= 12_450 && tokens < 12_460);
    assert_eq!(dash.counters().displayed(Counter::TokensUsed), tokens);
    assert_eq!(dash.counters().displayed(Counter::TasksCompleted), 127);
}

#[test]
fn header_clock_tracks_uptime() {
    let (mut dash, clock) = dashboard();
    dash.start();

    clock.advance(90 * 60_000);
    dash.tick();
    assert_eq!(dash.header().uptime, "0d 1h 30m");
    assert_eq!(dash.header().time.len(), 5);
}
