//! Transcript message types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Sender id reserved for the candidate.
pub const USER_SENDER_ID: u32 = 0;

/// A single line of the interview transcript.
///
/// Messages are immutable once created. `sender_id` is `0` for the
/// candidate and the persona id otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Per-session sequence number, starting at 1
    pub id: u64,
    /// The text of the message
    pub content: String,
    /// `0` for the candidate, persona id otherwise
    pub sender_id: u32,
    /// When the message was appended
    pub timestamp: DateTime<Utc>,
    /// True when the candidate sent this message
    pub is_from_user: bool,
}

impl Message {
    /// Creates a candidate message.
    pub fn from_user(id: u64, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            sender_id: USER_SENDER_ID,
            timestamp: Utc::now(),
            is_from_user: true,
        }
    }

    /// Creates a message spoken by the persona with `persona_id`.
    pub fn from_persona(id: u64, persona_id: u32, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            sender_id: persona_id,
            timestamp: Utc::now(),
            is_from_user: false,
        }
    }
}

/// Append-only, insertion-ordered list of messages.
///
/// The only way to shrink a transcript is to discard the whole session
/// (`Session::reset`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript(Vec<Message>);

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message at the end of the transcript.
    pub fn push(&mut self, message: Message) {
        self.0.push(message);
    }

    /// Messages sent by `sender_id`, in order.
    pub fn from_sender(&self, sender_id: u32) -> impl Iterator<Item = &Message> {
        self.0.iter().filter(move |m| m.sender_id == sender_id)
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}

impl Deref for Transcript {
    type Target = [Message];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
