//! Read-only projection of a session for the presentation layer
//!
//! The view is derived on demand from the machine; nothing in it is stored
//! separately, so it can never drift from the session state.

use super::machine::{AnswerSlot, QuestionPhase, Session};
use serde::Serialize;
use smallvec::SmallVec;

/// Render state of a single answer option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionState {
    /// Selectable, no feedback
    Idle,
    Correct,
    Incorrect,
}

/// One question as the presentation layer should draw it
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub text: String,
    pub options: SmallVec<[String; 4]>,
    pub option_states: SmallVec<[OptionState; 4]>,
    /// Whether selection input is currently accepted at this position
    pub selectable: bool,
}

/// Full snapshot handed across the boundary on every state change
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub tier: String,
    /// 1-based
    pub position: usize,
    pub total: usize,
    pub score: u32,
    pub auto_advance: bool,
    pub transitioning: bool,
    pub completed: bool,
    pub question: QuestionView,
}

impl SessionView {
    pub fn of(session: &Session) -> Self {
        let (position, total) = session.progress();
        Self {
            tier: session.tier().to_string(),
            position,
            total,
            score: session.score(),
            auto_advance: session.auto_advance_enabled(),
            transitioning: session.is_transitioning(),
            completed: session.is_completed(),
            question: question_view(session),
        }
    }
}

fn question_view(session: &Session) -> QuestionView {
    let question = session.current_question();
    let phase = session.question_phase();

    // Feedback is revealed once a selection is committed; a bare revisit of
    // a skipped or re-opened position shows idle options again.
    let revealed = match phase {
        QuestionPhase::Locked { selected } => Some(selected),
        QuestionPhase::Revisit { selected: Some(selected) } => Some(selected),
        _ => None,
    };

    let option_states = question
        .options
        .iter()
        .enumerate()
        .map(|(index, _)| match revealed {
            Some(selected) => {
                if index == question.correct_index {
                    OptionState::Correct
                } else if index == selected {
                    OptionState::Incorrect
                } else {
                    OptionState::Idle
                }
            }
            None => OptionState::Idle,
        })
        .collect();

    let selectable = !session.is_transitioning()
        && !session.is_completed()
        && !matches!(phase, QuestionPhase::Locked { .. });

    QuestionView {
        text: question.text.clone(),
        options: question.options.clone(),
        option_states,
        selectable,
    }
}
