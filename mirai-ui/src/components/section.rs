//! Section Component
//!
//! Wrapper for one top-level section. Visibility and the fade-in opacity both
//! come from the navigation controller.

use leptos::*;

use crate::state::global::GlobalState;

#[component]
pub fn SectionView(id: &'static str, children: Children) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_active = state.clone();
    let active = move || state_for_active.with(|d| d.navigation().is_active(id));
    let style = move || format!("opacity: {:.3}", state.with(|d| d.opacity(id)));

    view! {
        <section id=id class="section" class:active=active style=style>
            {children()}
        </section>
    }
}
