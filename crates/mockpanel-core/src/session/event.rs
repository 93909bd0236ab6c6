use serde::{Deserialize, Serialize};

use super::{Message, SessionPhase};

/// Observable changes published while a session runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EngineEvent {
    /// A message was appended to the transcript.
    MessageAppended { message: Message },
    /// The session moved to a new phase.
    PhaseChanged {
        from: SessionPhase,
        to: SessionPhase,
    },
    /// The countdown decreased.
    TimerTick { remaining_seconds: u32 },
}
