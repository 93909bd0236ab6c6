//! Question selection.
//!
//! A persona never repeats itself while it still has unused questions. Once
//! its bank is exhausted it picks from the full bank again.

use crate::random::RandomSource;
use mockpanel_core::persona::Persona;
use mockpanel_core::session::Message;
use std::collections::HashSet;

/// Picks the next question `persona` should ask, given the transcript so far.
///
/// Pure with respect to the session: the caller records the chosen question.
pub fn select_next_question<'p>(
    persona: &'p Persona,
    transcript: &[Message],
    random: &mut dyn RandomSource,
) -> &'p str {
    let asked: HashSet<&str> = transcript
        .iter()
        .filter(|m| m.sender_id == persona.id && persona.owns_question(&m.content))
        .map(|m| m.content.as_str())
        .collect();

    let available: Vec<&String> = persona
        .question_bank
        .iter()
        .filter(|q| !asked.contains(q.as_str()))
        .collect();

    if available.is_empty() {
        let index = random.next_index(persona.question_bank.len());
        persona.question_bank[index].as_str()
    } else {
        available[random.next_index(available.len())].as_str()
    }
}
