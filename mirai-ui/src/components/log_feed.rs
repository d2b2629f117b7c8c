//! Activity Log Component

use leptos::*;

use crate::state::global::GlobalState;

/// Newest-first list of log entries
#[component]
pub fn LogFeedView() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="log-container" id="logContainer">
            {move || {
                state.with(|d| {
                    if d.log().is_empty() {
                        return view! {
                            <p class="log-empty">"Waiting for activity..."</p>
                        }.into_view();
                    }

                    d.log().entries().map(|entry| {
                        let class = format!("log-entry {}", entry.severity.css_class());
                        view! {
                            <div class=class>
                                <span class="log-time">{entry.time.clone()}</span>
                                <span class="log-module">{format!("[{}]", entry.module)}</span>
                                <span class="log-message">{entry.message.clone()}</span>
                            </div>
                        }
                    }).collect_view()
                })
            }}
        </div>
    }
}
