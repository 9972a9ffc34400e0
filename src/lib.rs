//! Trivia Quiz Core - Quiz session engine with Python bindings
//!
//! This crate provides a Rust implementation of a multiple-choice quiz
//! session state machine with Python bindings via PyO3. Question selection,
//! scoring, navigation, and transition timing all live here; the Python
//! side only renders snapshots and schedules the timers the engine asks for.

use pyo3::prelude::*;

pub mod bank;
pub mod config;
pub mod error;
pub mod session;
pub mod shuffle;
pub mod summary;

use crate::bank::{default_bank, QuestionBank};
use crate::config::DifficultyTier;
use crate::session::{QuizSession, Session};
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use pyo3::types::PyDict;
use std::sync::Arc;
use std::time::Duration;

// ============================================================================
// Cached Question Bank
// ============================================================================

/// Global cached question bank; absent means the builtin catalog is used
static CACHED_BANK: OnceCell<Arc<RwLock<QuestionBank>>> = OnceCell::new();

// ============================================================================
// Python Functions
// ============================================================================

/// Initialize the question bank (call once at startup)
///
/// Caches the parsed bank in Rust memory so session starts never touch
/// Python data again. Without a config, or when it is omitted, sessions
/// draw from the builtin catalog.
///
/// # Arguments
/// * `config` - Optional dict with a "questions" list; each entry needs
///   `id`, `text`, `options`, `correct_index` and may carry `difficulty`
#[pyfunction]
#[pyo3(signature = (config=None))]
fn init_bank(config: Option<&Bound<'_, PyDict>>) -> PyResult<()> {
    let bank = match config {
        Some(dict) => {
            let questions = config::deserialize_questions(dict)?;
            QuestionBank::from_questions(questions).map_err(PyErr::from)?
        }
        None => default_bank().clone(),
    };

    // If already initialized, update in place
    if let Some(existing) = CACHED_BANK.get() {
        let mut guard = existing.write();
        *guard = bank;
    } else {
        let _ = CACHED_BANK.set(Arc::new(RwLock::new(bank)));
    }

    Ok(())
}

/// Check if a custom bank has been initialized
#[pyfunction]
fn is_bank_initialized() -> bool {
    CACHED_BANK.get().is_some()
}

/// Start a quiz session for a difficulty tier
///
/// Unknown tier names fall back to "easy" rather than failing; the fixed
/// tiers keep the bank's authoring order and "mixed" shuffles the pooled
/// catalog fresh for each session.
///
/// # Arguments
/// * `tier` - "easy", "medium", "hard" or "mixed" (case-insensitive)
/// * `auto_advance` - Whether correct-answer feedback auto-advances
///   (default: true)
///
/// # Returns
/// A QuizSession object holding the live state machine
#[pyfunction]
#[pyo3(signature = (tier, auto_advance=None))]
fn start_session(tier: &str, auto_advance: Option<bool>) -> PyResult<QuizSession> {
    let tier = DifficultyTier::parse_lenient(tier);

    let questions = match CACHED_BANK.get() {
        Some(bank) => bank.read().select(tier, &mut rand::thread_rng()),
        None => default_bank().select(tier, &mut rand::thread_rng()),
    }
    .map_err(PyErr::from)?;

    let inner =
        Session::start(tier, questions, auto_advance.unwrap_or(true)).map_err(PyErr::from)?;
    Ok(QuizSession::new(inner))
}

/// Await a scheduled timer, then deliver it to the session
///
/// Python calls this with the `generation` and `delay_ms` from a "timer"
/// effect dict. The sleep runs on the Tokio runtime with the GIL released;
/// delivery reacquires it only long enough to call `fire`. A wakeup whose
/// generation has been superseded resolves to an "ignored" effect dict.
///
/// # Example (Python)
/// ```python
/// effect = session.select_option(2)
/// if effect["status"] == "timer":
///     effect = await fire_later(session, effect["generation"], effect["delay_ms"])
/// ```
#[pyfunction]
fn fire_later<'py>(
    py: Python<'py>,
    session: Py<QuizSession>,
    generation: u64,
    delay_ms: u64,
) -> PyResult<Bound<'py, PyAny>> {
    pyo3_async_runtimes::tokio::future_into_py(py, async move {
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        Python::attach(|py| {
            let mut guard = session.bind(py).borrow_mut();
            guard.deliver(py, generation)
        })
    })
}

// ============================================================================
// Python Module Definition
// ============================================================================

/// Python module definition
#[pymodule]
fn trivia_quiz_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(init_bank, m)?)?;
    m.add_function(wrap_pyfunction!(is_bank_initialized, m)?)?;
    m.add_function(wrap_pyfunction!(start_session, m)?)?;
    m.add_function(wrap_pyfunction!(fire_later, m)?)?;
    m.add_class::<QuizSession>()?;
    Ok(())
}
