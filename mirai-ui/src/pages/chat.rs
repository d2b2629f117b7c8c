//! Chat Page

use leptos::*;

use crate::components::{ChatPanel, SectionView};

#[component]
pub fn ChatPage() -> impl IntoView {
    view! {
        <SectionView id="chat">
            <h1 class="section-title">"Chat with Mirai"</h1>
            <ChatPanel />
        </SectionView>
    }
}
