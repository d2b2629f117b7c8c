//! Dashboard Page
//!
//! Headline counters, the two mini charts, quick actions and the live log.

use leptos::*;

use mirai::chart::ChartId;
use mirai::ticker::Counter;
use mirai::view::DASHBOARD;
use mirai::Input;

use crate::components::{ChartCanvas, CounterCard, LogFeedView, SectionView, StatCard};
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_time = state.clone();
    let active_time = Signal::derive(move || {
        state_for_time.with(|d| d.session().user().active_time.clone())
    });
    let state_for_memory = state.clone();
    let memory = Signal::derive(move || {
        state_for_memory.with(|d| d.session().user().memory_usage.clone())
    });
    let uptime = Signal::derive(move || state.with(|d| d.header().uptime.clone()));

    view! {
        <SectionView id=DASHBOARD>
            <h1 class="section-title">"Dashboard"</h1>

            // Headline statistics
            <div class="stats-grid">
                <CounterCard counter=Counter::TokensUsed icon="🔤" />
                <CounterCard counter=Counter::TasksCompleted icon="✅" />
                <StatCard label="Active Time" icon="⏱️" value_id="activeTime" value=active_time />
                <StatCard label="Memory Usage" icon="💾" value_id="memoryUsage" value=memory />
                <StatCard label="Uptime" icon="🟢" value_id="uptime" value=uptime />
            </div>

            // Mini charts
            <div class="charts-row">
                <ChartCanvas chart=ChartId::AgentActivity class="mini-chart" />
                <ChartCanvas chart=ChartId::MemoryGrowth class="mini-chart" />
            </div>

            <div class="dashboard-bottom">
                <QuickActions />

                <div class="log-panel">
                    <h3>"System Log"</h3>
                    <LogFeedView />
                </div>
            </div>
        </SectionView>
    }
}

/// Shortcut buttons that jump to another section
#[component]
fn QuickActions() -> impl IntoView {
    let actions = [
        ("chat", "💬", "Start Chat"),
        ("statistics", "📈", "View Statistics"),
        ("settings", "⚙️", "Settings"),
    ];

    view! {
        <div class="quick-actions">
            <h3>"Quick Actions"</h3>
            {actions.into_iter().map(|(target, icon, label)| view! {
                <ActionButton target=target icon=icon label=label />
            }).collect_view()}
        </div>
    }
}

#[component]
fn ActionButton(target: &'static str, icon: &'static str, label: &'static str) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <button
            class="action-btn"
            data-section=target
            on:click=move |_| {
                state.dispatch(Input::ActionClick(target.to_string()));
            }
        >
            <span class="action-icon">{icon}</span>
            <span>{label}</span>
        </button>
    }
}
