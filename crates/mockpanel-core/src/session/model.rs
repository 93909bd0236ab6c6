//! Session domain model.
//!
//! This module contains the Session entity: the state of a single interview
//! attempt. The panel engine is its only writer; front ends read it through
//! a shared reference or a cloned `SessionSnapshot`.

use super::message::{Message, Transcript};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strum::{Display, EnumString};

/// Lifecycle phase of an interview session.
///
/// ```text
/// NotStarted -> Introducing -> AwaitingAnswer <-> AdvancingTurn -> Complete
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SessionPhase {
    /// No interview running yet.
    NotStarted,
    /// Welcome and persona introductions are being delivered.
    Introducing,
    /// A question is on the table; the candidate may reply.
    AwaitingAnswer,
    /// The reply was recorded; the panel is preparing the next turn.
    AdvancingTurn,
    /// Terminal. Only `reset` leaves this phase.
    Complete,
}

impl SessionPhase {
    /// True for every phase except `Complete`.
    pub fn is_active(self) -> bool {
        !matches!(self, SessionPhase::Complete)
    }
}

/// State of one interview attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Current lifecycle phase
    pub phase: SessionPhase,
    /// Append-only message history
    pub transcript: Transcript,
    /// Index into the persona registry of the interviewer whose turn it is
    pub active_persona_index: usize,
    /// Seconds left on the countdown
    pub remaining_seconds: u32,
    /// Whether the countdown is ticking
    pub timer_running: bool,
    /// Personas that have already introduced themselves
    pub introduced_persona_ids: BTreeSet<u32>,
    /// Id given to the next appended message
    next_message_id: u64,
}

impl Session {
    /// Creates a fresh `NotStarted` session with `budget_seconds` on the clock.
    pub fn new(budget_seconds: u32) -> Self {
        Self {
            phase: SessionPhase::NotStarted,
            transcript: Transcript::new(),
            active_persona_index: 0,
            remaining_seconds: budget_seconds,
            timer_running: false,
            introduced_persona_ids: BTreeSet::new(),
            next_message_id: 1,
        }
    }

    /// Discards everything recorded and returns to `NotStarted`.
    pub fn reset(&mut self, budget_seconds: u32) {
        self.phase = SessionPhase::NotStarted;
        self.transcript.clear();
        self.active_persona_index = 0;
        self.remaining_seconds = budget_seconds;
        self.timer_running = false;
        self.introduced_persona_ids.clear();
        self.next_message_id = 1;
    }

    /// Appends a persona message and returns a copy of it.
    pub fn append_persona_message(&mut self, persona_id: u32, content: impl Into<String>) -> Message {
        let message = Message::from_persona(self.take_message_id(), persona_id, content);
        self.transcript.push(message.clone());
        message
    }

    /// Appends a candidate message and returns a copy of it.
    pub fn append_user_message(&mut self, content: impl Into<String>) -> Message {
        let message = Message::from_user(self.take_message_id(), content);
        self.transcript.push(message.clone());
        message
    }

    /// Moves the turn to the next persona, wrapping around the panel.
    pub fn rotate_persona(&mut self, persona_count: usize) {
        if persona_count > 0 {
            self.active_persona_index = (self.active_persona_index + 1) % persona_count;
        }
    }

    /// Number of candidate replies recorded so far.
    pub fn reply_count(&self) -> usize {
        self.transcript.iter().filter(|m| m.is_from_user).count()
    }

    /// Cloned, read-only view for front ends.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            transcript: self.transcript.to_vec(),
            active_persona_index: self.active_persona_index,
            remaining_seconds: self.remaining_seconds,
            timer_running: self.timer_running,
        }
    }

    fn take_message_id(&mut self) -> u64 {
        let id = self.next_message_id;
        self.next_message_id += 1;
        id
    }
}

/// Owned copy of the observable session state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub transcript: Vec<Message>,
    pub active_persona_index: usize,
    pub remaining_seconds: u32,
    pub timer_running: bool,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Session::new(0).snapshot()
    }
}
