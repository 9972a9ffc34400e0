//! Navigation guard and completion payload
//!
//! Leaving mid-quiz is the shell's decision; the machine only answers
//! whether unsaved progress exists. Session state is ephemeral, so a
//! confirmed leave is simply dropping the `Session` value.

use super::machine::{AnswerSlot, Session};
use crate::summary::{summarize, ResultSummary};
use serde::Serialize;

/// True when leaving would discard progress
///
/// Any recorded slot counts, including explicit skips; a session where every
/// position is still untouched can be abandoned silently.
pub fn requires_confirmation(session: &Session) -> bool {
    !session.is_completed()
        && session.answers().iter().any(AnswerSlot::is_recorded)
}

/// Final payload surfaced once the session completes
#[derive(Debug, Clone, Serialize)]
pub struct QuizOutcome {
    pub tier: String,
    pub summary: ResultSummary,
    /// Recorded selection per position; `None` for skipped questions
    pub answers: Vec<Option<usize>>,
}

/// Build the outcome for a completed session; `None` while still active
pub fn completion_payload(session: &Session) -> Option<QuizOutcome> {
    if !session.is_completed() {
        return None;
    }
    Some(QuizOutcome {
        tier: session.tier().to_string(),
        summary: summarize(session.score(), session.total() as u32),
        answers: session.answers().iter().map(AnswerSlot::selected).collect(),
    })
}
