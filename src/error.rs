//! Error types for the quiz core engine

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::PyErr;
use thiserror::Error;

/// Main error type for the quiz core engine
///
/// Nothing here is fatal to the host process: every variant is recoverable
/// by returning control to tier selection.
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("No questions available for tier: {0}")]
    EmptyQuestionSet(String),

    #[error("Unrecognized difficulty tier: {0}")]
    InvalidTier(String),

    #[error("Invalid question {id}: {reason}")]
    InvalidQuestion { id: i32, reason: String },

    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}

impl From<QuizError> for PyErr {
    fn from(err: QuizError) -> PyErr {
        match err {
            QuizError::EmptyQuestionSet(tier) => {
                PyValueError::new_err(format!("No questions available for tier: {}", tier))
            }
            QuizError::InvalidTier(tier) => {
                PyValueError::new_err(format!("Unrecognized difficulty tier: {}", tier))
            }
            QuizError::InvalidQuestion { id, reason } => {
                PyValueError::new_err(format!("Invalid question {}: {}", id, reason))
            }
            QuizError::DeserializationError(msg) => {
                PyRuntimeError::new_err(format!("Deserialization error: {}", msg))
            }
        }
    }
}

/// Result type alias for the quiz core engine
pub type Result<T> = std::result::Result<T, QuizError>;
