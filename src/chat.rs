//! Chat Simulator
//!
//! The assistant is a lookup table: every accepted user line is answered,
//! after a typing pause, with one of [`CANNED_REPLIES`] picked uniformly at
//! random. The simulator only tracks messages and per-submission reply
//! progress; the dashboard owns the timers that move a reply along.
//!
//! ```text
//! Idle --submit--> Sent --typing delay--> AwaitingReply --reply delay--> Idle
//! ```
//!
//! Submissions are not serialized. A second line sent while a reply is in
//! flight gets its own ticket, placeholder and reply.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::clock::{format_hm, Millis};

pub const CANNED_REPLIES: [&str; 5] = [
    "Analyzing your request...",
    "Data processed successfully!",
    "Running the task. Progress: 45%",
    "All systems operating normally.",
    "Interesting question! Give me a moment to analyze.",
];

/// Text of the typing placeholder
pub const TYPING_TEXT: &str = "Mirai is typing...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    /// "HH:MM" local time
    pub time: String,
}

/// Identifies one submission awaiting its reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ReplyTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatState {
    Idle,
    /// User line appended, typing delay running
    Sent,
    /// Typing placeholder visible
    AwaitingReply,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReplyPhase {
    Sent,
    Typing,
}

/// Message log plus in-flight replies
#[derive(Debug, Clone, Default)]
pub struct ChatSimulator {
    messages: Vec<ChatMessage>,
    pending: BTreeMap<ReplyTicket, ReplyPhase>,
    input: String,
    next_message_id: u64,
    next_ticket: u64,
}

impl ChatSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the composer contents
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Submit the composer contents
    ///
    /// Whitespace-only input is discarded without touching the composer.
    /// Otherwise the trimmed line is appended as a user message, the
    /// composer is cleared and a ticket for the pending reply is returned.
    pub fn submit(&mut self, now: Millis) -> Option<ReplyTicket> {
        let text = self.input.trim();
        if text.is_empty() {
            return None;
        }
        let text = text.to_string();
        self.input.clear();

        self.push_message(Sender::User, text, now);

        let ticket = ReplyTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending.insert(ticket, ReplyPhase::Sent);
        tracing::info!(?ticket, "Chat message sent");
        Some(ticket)
    }

    /// Show the typing placeholder for `ticket`
    pub fn start_typing(&mut self, ticket: ReplyTicket) -> bool {
        match self.pending.get_mut(&ticket) {
            Some(phase) if *phase == ReplyPhase::Sent => {
                *phase = ReplyPhase::Typing;
                true
            }
            _ => false,
        }
    }

    /// Drop the placeholder for `ticket` and append the assistant's reply
    pub fn deliver_reply(
        &mut self,
        ticket: ReplyTicket,
        reply: &str,
        now: Millis,
    ) -> Option<&ChatMessage> {
        self.pending.remove(&ticket)?;
        self.push_message(Sender::Assistant, reply.to_string(), now);
        tracing::info!(?ticket, "Chat reply delivered");
        self.messages.last()
    }

    /// Abandon every in-flight reply
    ///
    /// Returns the tickets whose typing placeholder was showing.
    pub fn cancel_pending(&mut self) -> Vec<ReplyTicket> {
        let typing = self
            .pending
            .iter()
            .filter(|(_, phase)| **phase == ReplyPhase::Typing)
            .map(|(ticket, _)| *ticket)
            .collect();
        self.pending.clear();
        typing
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Number of typing placeholders currently shown
    pub fn typing_count(&self) -> usize {
        self.pending
            .values()
            .filter(|p| **p == ReplyPhase::Typing)
            .count()
    }

    pub fn state(&self) -> ChatState {
        if self.typing_count() > 0 {
            ChatState::AwaitingReply
        } else if !self.pending.is_empty() {
            ChatState::Sent
        } else {
            ChatState::Idle
        }
    }

    fn push_message(&mut self, sender: Sender, text: String, now: Millis) {
        self.messages.push(ChatMessage {
            id: self.next_message_id,
            sender,
            text,
            time: format_hm(now),
        });
        self.next_message_id += 1;
    }
}

/// Pick a canned reply uniformly at random
pub fn choose_reply<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    CANNED_REPLIES.choose(rng).copied().unwrap_or(CANNED_REPLIES[0])
}
