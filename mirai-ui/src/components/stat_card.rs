//! Stat Card Component
//!
//! Displays one headline statistic.

use leptos::*;

use mirai::session::format_count;
use mirai::ticker::Counter;

use crate::state::global::GlobalState;

/// Stat card component
#[component]
pub fn StatCard(
    /// Caption under the value
    #[prop(into)]
    label: String,
    icon: &'static str,
    /// DOM id of the value element
    #[prop(optional)]
    value_id: &'static str,
    /// Displayed value
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-icon">{icon}</div>
            <div class="stat-info">
                <div class="stat-value" id=value_id>{move || value.get()}</div>
                <div class="stat-label">{label}</div>
            </div>
        </div>
    }
}

/// Card for one of the animated counters
#[component]
pub fn CounterCard(counter: Counter, icon: &'static str) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let value = Signal::derive(move || {
        state.with(|d| format_count(d.counters().displayed(counter)))
    });

    view! {
        <StatCard
            label=counter.label()
            icon=icon
            value_id=counter.element_id()
            value=value
        />
    }
}
