//! QuizSession - Stateful session for Python-Rust boundary
//!
//! This module provides the QuizSession PyClass that holds the live state
//! machine in Rust heap memory. Python drives it with discrete calls and
//! receives plain dicts back; every mutating call returns an effect dict
//! telling the caller whether a timer must be scheduled (via `fire_later`)
//! and with which generation token.

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use super::guard::{completion_payload, requires_confirmation};
use super::machine::{Effect, Session, UserIntent};
use super::view::{OptionState, SessionView};

/// Python-visible handle over one quiz attempt
///
/// pyo3's borrow checking serializes access from Python threads; the inner
/// machine itself stays free of locking.
#[pyclass]
pub struct QuizSession {
    pub(crate) inner: Session,
}

impl QuizSession {
    pub fn new(inner: Session) -> Self {
        Self { inner }
    }

    /// Deliver a timer wakeup from the Rust side (used by `fire_later`)
    pub fn deliver(&mut self, py: Python<'_>, generation: u64) -> PyResult<Py<PyAny>> {
        effect_to_dict(py, self.inner.fire(generation))
    }
}

#[pymethods]
impl QuizSession {
    // ------------------------------------------------------------------
    // Mutations - each returns an effect dict
    // ------------------------------------------------------------------

    /// Record a selection for the current question (0-based index)
    fn select_option(&mut self, py: Python<'_>, index: usize) -> PyResult<Py<PyAny>> {
        let effect = self.inner.select_option(index);
        effect_to_dict(py, effect)
    }

    /// Manual advance to the next question
    fn advance(&mut self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let effect = self.inner.advance();
        effect_to_dict(py, effect)
    }

    /// Skip the current question
    fn skip(&mut self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let effect = self.inner.skip();
        effect_to_dict(py, effect)
    }

    /// Return to the previous question
    fn go_back(&mut self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let effect = self.inner.go_back();
        effect_to_dict(py, effect)
    }

    /// Flip auto-advance; returns the new setting
    fn toggle_auto_advance(&mut self) -> bool {
        self.inner.toggle_auto_advance()
    }

    /// Map a keyboard key to its intent and apply it
    ///
    /// Unmapped keys return an ignored effect. A leave request comes back
    /// with status "leave_requested" so the caller can run its confirm flow.
    fn handle_key(&mut self, py: Python<'_>, key: &str) -> PyResult<Py<PyAny>> {
        match UserIntent::from_key(key) {
            Some(UserIntent::RequestLeave) => {
                let dict = PyDict::new(py);
                dict.set_item("status", "leave_requested")?;
                dict.set_item("requires_confirmation", requires_confirmation(&self.inner))?;
                Ok(dict.into())
            }
            Some(intent) => effect_to_dict(py, self.inner.dispatch(intent)),
            None => effect_to_dict(py, Effect::Ignored),
        }
    }

    /// Deliver a scheduled timer wakeup
    ///
    /// Safe to call with a stale generation; the machine drops it.
    fn fire(&mut self, py: Python<'_>, generation: u64) -> PyResult<Py<PyAny>> {
        let effect = self.inner.fire(generation);
        effect_to_dict(py, effect)
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    fn score(&self) -> u32 {
        self.inner.score()
    }

    /// 1-based position within the run
    fn position(&self) -> usize {
        self.inner.current_index() + 1
    }

    fn total(&self) -> usize {
        self.inner.total()
    }

    fn is_transitioning(&self) -> bool {
        self.inner.is_transitioning()
    }

    fn is_completed(&self) -> bool {
        self.inner.is_completed()
    }

    fn auto_advance_enabled(&self) -> bool {
        self.inner.auto_advance_enabled()
    }

    /// Whether leaving now would discard progress
    fn requires_confirmation(&self) -> bool {
        requires_confirmation(&self.inner)
    }

    /// Full render snapshot as a dict
    fn get_view(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let view = SessionView::of(&self.inner);
        let dict = PyDict::new(py);
        dict.set_item("tier", &view.tier)?;
        dict.set_item("position", view.position)?;
        dict.set_item("total", view.total)?;
        dict.set_item("score", view.score)?;
        dict.set_item("auto_advance", view.auto_advance)?;
        dict.set_item("transitioning", view.transitioning)?;
        dict.set_item("completed", view.completed)?;

        let question = PyDict::new(py);
        question.set_item("text", &view.question.text)?;
        let options = PyList::new(py, view.question.options.iter())?;
        question.set_item("options", options)?;
        let states: Vec<&str> = view
            .question
            .option_states
            .iter()
            .map(|state| match state {
                OptionState::Idle => "idle",
                OptionState::Correct => "correct",
                OptionState::Incorrect => "incorrect",
            })
            .collect();
        question.set_item("option_states", states)?;
        question.set_item("selectable", view.question.selectable)?;
        dict.set_item("question", question)?;

        Ok(dict.into())
    }

    /// Final results once completed; None while the run is still active
    fn get_outcome(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let outcome = match completion_payload(&self.inner) {
            Some(outcome) => outcome,
            None => return Ok(py.None()),
        };

        let dict = PyDict::new(py);
        dict.set_item("tier", &outcome.tier)?;
        dict.set_item("answers", outcome.answers)?;

        let summary = PyDict::new(py);
        summary.set_item("score", outcome.summary.score)?;
        summary.set_item("total", outcome.summary.total)?;
        summary.set_item("percentage", outcome.summary.percentage)?;
        summary.set_item("band", outcome.summary.band.as_str())?;
        summary.set_item("message", outcome.summary.band.message())?;
        dict.set_item("summary", summary)?;

        Ok(dict.into())
    }

    fn __repr__(&self) -> String {
        format!(
            "QuizSession(tier={}, position={}/{}, score={}, completed={})",
            self.inner.tier(),
            self.inner.current_index() + 1,
            self.inner.total(),
            self.inner.score(),
            self.inner.is_completed(),
        )
    }
}

/// Render an effect as the dict Python schedules from
fn effect_to_dict(py: Python<'_>, effect: Effect) -> PyResult<Py<PyAny>> {
    let dict = PyDict::new(py);
    match effect {
        Effect::Ignored => {
            dict.set_item("status", "ignored")?;
        }
        Effect::Handled => {
            dict.set_item("status", "handled")?;
        }
        Effect::Completed => {
            dict.set_item("status", "completed")?;
        }
        Effect::Timer(timer) => {
            dict.set_item("status", "timer")?;
            dict.set_item("generation", timer.generation)?;
            dict.set_item("delay_ms", timer.delay.as_millis() as u64)?;
        }
    }
    Ok(dict.into())
}
