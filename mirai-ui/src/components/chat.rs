//! Chat Component
//!
//! Message list, typing indicators and the composer.

use leptos::*;

use mirai::chat::{Sender, TYPING_TEXT};
use mirai::Input;

use crate::state::global::GlobalState;

/// Chat panel component
#[component]
pub fn ChatPanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_messages = state.clone();
    let messages = move || {
        state_for_messages.with(|d| {
            d.chat()
                .messages()
                .iter()
                .map(|message| {
                    let (class, avatar) = match message.sender {
                        Sender::User => ("message user", "👤"),
                        Sender::Assistant => ("message assistant", "🤖"),
                    };
                    view! {
                        <div class=class>
                            <div class="message-avatar">{avatar}</div>
                            <div class="message-content">
                                <p>{message.text.clone()}</p>
                                <span class="message-time">{message.time.clone()}</span>
                            </div>
                        </div>
                    }
                })
                .collect_view()
        })
    };

    let state_for_typing = state.clone();
    let typing = move || {
        let count = state_for_typing.with(|d| d.chat().typing_count());
        (0..count)
            .map(|_| {
                view! {
                    <div class="message assistant typing-indicator">
                        <div class="message-avatar">"🤖"</div>
                        <div class="message-content">
                            <p>{TYPING_TEXT}</p>
                        </div>
                    </div>
                }
            })
            .collect_view()
    };

    let state_for_value = state.clone();
    let composer_value = move || state_for_value.with(|d| d.chat().input().to_string());

    let state_for_input = state.clone();
    let on_input = move |ev: ev::Event| {
        state_for_input.dispatch(Input::ChatInput(event_target_value(&ev)));
    };

    let state_for_key = state.clone();
    let on_keydown = move |ev: ev::KeyboardEvent| {
        let input = Input::ChatKey {
            key: ev.key(),
            shift: ev.shift_key(),
        };
        if state_for_key.dispatch(input) {
            ev.prevent_default();
        }
    };

    let on_send = move |_| {
        state.dispatch(Input::ChatSend);
    };

    view! {
        <div class="chat-container">
            <div class="chat-messages" id="chatMessages">
                {messages}
                {typing}
            </div>

            <div class="chat-input-container">
                <textarea
                    id="chatInput"
                    class="chat-input"
                    placeholder="Type a message..."
                    rows="1"
                    prop:value=composer_value
                    on:input=on_input
                    on:keydown=on_keydown
                />
                <button class="send-btn" id="sendBtn" on:click=on_send>
                    "Send"
                </button>
            </div>
        </div>
    }
}
