//! Mirai AI Dashboard
//!
//! Browser frontend for the Mirai dashboard core, built with Leptos (WASM).
//!
//! # Features
//!
//! - Sidebar navigation with fade-in sections
//! - Six canvas charts redrawn on theme changes and stats ticks
//! - Simulated chat assistant
//! - Live activity log and animated counters
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All behavior lives in the `mirai` core; this crate mounts it,
//! forwards DOM events as inputs and replays chart commands on canvases.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
