//! Navigation Component
//!
//! Sidebar with the brand and one link per section.

use leptos::*;

use mirai::view::{Section, SECTIONS};
use mirai::Input;

use crate::state::global::GlobalState;

/// Sidebar navigation component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="sidebar">
            // Logo and brand
            <div class="logo">
                <span class="logo-icon">"🤖"</span>
                <span class="logo-text">"Mirai AI"</span>
            </div>

            // Navigation links
            <ul class="nav-menu">
                {SECTIONS.into_iter().map(|section| view! { <NavLink section=section /> }).collect_view()}
            </ul>
        </nav>
    }
}

/// Individual navigation link, highlighted while its section is current
#[component]
fn NavLink(section: Section) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_class = state.clone();
    let highlighted = move || {
        state_for_class.with(|d| d.navigation().highlighted() == Some(section.id))
    };

    let on_click = move |ev: ev::MouseEvent| {
        if state.dispatch(Input::NavClick(section.id.to_string())) {
            ev.prevent_default();
        }
    };

    view! {
        <li>
            <a
                href="#"
                class="nav-link"
                class:active=highlighted
                data-section=section.id
                on:click=on_click
            >
                <span class="nav-icon">{section.icon}</span>
                <span>{section.label}</span>
            </a>
        </li>
    }
}
