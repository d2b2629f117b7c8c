//! App Root Component
//!
//! Layout, global state and the frame timer that drives the dashboard core.

use gloo_timers::callback::{Interval, Timeout};
use leptos::*;

use mirai::Input;

use crate::components::Nav;
use crate::pages::{ChatPage, DashboardPage, SettingsPage, StatisticsPage};
use crate::state::global::{provide_global_state, GlobalState};

/// Frame interval for timers and animations (ms)
const TICK_INTERVAL_MS: u32 = 16;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Start once the canvases below have mounted
    let state_for_start = state.clone();
    Timeout::new(0, move || state_for_start.start()).forget();

    let state_for_tick = state.clone();
    Interval::new(TICK_INTERVAL_MS, move || state_for_tick.tick()).forget();

    // Mirror the theme onto <body>
    create_effect(move |_| {
        let theme = state.with(|d| d.theme());
        if let Some(body) = document().body() {
            body.set_class_name(theme.css_class());
        }
    });

    view! {
        <div class="app-container">
            <Nav />

            <main class="main-content">
                <Header />

                <DashboardPage />
                <ChatPage />
                <StatisticsPage />
                <SettingsPage />
            </main>
        </div>
    }
}

/// Header with date, time and the theme toggle
#[component]
fn Header() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_date = state.clone();
    let date = move || state_for_date.with(|d| d.header().date.clone());
    let state_for_time = state.clone();
    let time = move || state_for_time.with(|d| d.header().time.clone());
    let state_for_icon = state.clone();
    let icon = move || state_for_icon.with(|d| d.theme().icon());

    view! {
        <header class="header">
            <div class="header-info">
                <span class="current-date" id="currentDate">{date}</span>
                <span class="current-time" id="currentTime">{time}</span>
            </div>

            <button
                class="theme-toggle"
                id="themeToggle"
                on:click=move |_| {
                    state.dispatch(Input::ToggleTheme);
                }
            >
                {icon}
            </button>
        </header>
    }
}
