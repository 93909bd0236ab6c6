//! Persona domain model.
//!
//! Represents the interviewers that sit on a simulated panel. Each persona
//! has a fixed identity, a role label, a speaking style and its own bank of
//! questions.

use crate::error::{PanelError, Result};
use crate::session::USER_SENDER_ID;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An interviewer on the panel.
///
/// Personas are immutable once the engine is constructed. The `id` doubles as
/// the sender id of every message the persona emits, so it must never be `0`
/// (reserved for the candidate).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    /// Sender identity (never 0)
    pub id: u32,
    /// Display name of the persona
    pub name: String,
    /// Role or title shown next to the name
    pub role_label: String,
    /// Interviewing style, shown in panel listings
    pub style: String,
    /// Fixed self-introduction sent once per session
    pub introduction: String,
    /// Ordered question bank
    pub question_bank: Vec<String>,
}

impl Persona {
    /// Returns true if `content` is one of this persona's bank questions.
    ///
    /// The introduction text is excluded even if an identical string was
    /// also placed in the bank.
    pub fn owns_question(&self, content: &str) -> bool {
        content != self.introduction && self.question_bank.iter().any(|q| q == content)
    }

    /// Short label used by front ends, e.g. `"Priya (Engineering Manager)"`.
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.role_label)
    }
}

/// Checks that `personas` can seat a panel.
///
/// The roster must be non-empty, ids must be unique and never `0`, and every
/// question bank needs at least one entry.
pub fn validate_roster(personas: &[Persona]) -> Result<()> {
    if personas.is_empty() {
        return Err(PanelError::config("panel must contain at least one persona"));
    }

    let mut seen = HashSet::new();
    for persona in personas {
        if persona.id == USER_SENDER_ID {
            return Err(PanelError::config(format!(
                "persona '{}' uses id 0, which is reserved for the candidate",
                persona.name
            )));
        }
        if !seen.insert(persona.id) {
            return Err(PanelError::config(format!(
                "duplicate persona id {}",
                persona.id
            )));
        }
        if persona.question_bank.is_empty() {
            return Err(PanelError::config(format!(
                "persona '{}' has an empty question bank",
                persona.name
            )));
        }
    }

    Ok(())
}
