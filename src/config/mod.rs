//! Configuration module for question bank data
//!
//! This module handles deserialization of custom question banks from Python
//! dicts and from JSON strings.

mod question;

pub use question::*;

use crate::error::QuizError;
use pyo3::types::{PyAnyMethods, PyDict, PyDictMethods, PyList, PyListMethods};
use pyo3::Bound;
use smallvec::SmallVec;

/// Helper to get attribute from either dict or object
fn get_attr<'py>(
    obj: &Bound<'py, pyo3::PyAny>,
    name: &str,
) -> pyo3::PyResult<Bound<'py, pyo3::PyAny>> {
    if let Ok(dict) = obj.downcast::<PyDict>() {
        dict.get_item(name)?
            .ok_or_else(|| pyo3::exceptions::PyKeyError::new_err(name.to_string()))
    } else {
        obj.getattr(name)
    }
}

/// Helper to get optional attribute from either dict or object
fn get_attr_opt<'py>(obj: &Bound<'py, pyo3::PyAny>, name: &str) -> Option<Bound<'py, pyo3::PyAny>> {
    if let Ok(dict) = obj.downcast::<PyDict>() {
        dict.get_item(name).ok().flatten()
    } else {
        obj.getattr(name).ok()
    }
}

/// Deserialize questions from a Python config dict
/// Expected format: {"questions": [Question, ...]}
pub fn deserialize_questions(config: &Bound<'_, PyDict>) -> pyo3::PyResult<Vec<Question>> {
    let questions_list = config
        .get_item("questions")?
        .ok_or_else(|| QuizError::DeserializationError("questions not found".to_string()))?;

    let questions_list: Bound<'_, PyList> = questions_list.extract()?;
    let mut questions = Vec::with_capacity(questions_list.len());

    for item in questions_list.iter() {
        questions.push(extract_question(&item)?);
    }

    Ok(questions)
}

fn extract_question(obj: &Bound<'_, pyo3::PyAny>) -> pyo3::PyResult<Question> {
    let id: i32 = get_attr(obj, "id")?.extract()?;

    // Support both "text" and "question" field names
    let text: String = get_attr(obj, "text")
        .or_else(|_| get_attr(obj, "question"))?
        .extract()?;

    let options: Vec<String> = get_attr(obj, "options")?.extract()?;
    let options: SmallVec<[String; 4]> = SmallVec::from_vec(options);

    // Support both "correct_index" and "correctAnswer" field names
    let correct_index: usize = get_attr(obj, "correct_index")
        .or_else(|_| get_attr(obj, "correctAnswer"))?
        .extract()?;

    // Difficulty defaults to easy when absent, as the original data source
    // left the field optional
    let difficulty = match get_attr_opt(obj, "difficulty") {
        Some(value) if !value.is_none() => {
            let difficulty_str: String = value.extract()?;
            difficulty_str.parse().map_err(|_| {
                pyo3::exceptions::PyValueError::new_err(format!(
                    "Invalid difficulty for question {}: {}",
                    id, difficulty_str
                ))
            })?
        }
        _ => Difficulty::Easy,
    };

    Ok(Question {
        id,
        text,
        options,
        correct_index,
        difficulty,
    })
}

/// Deserialize questions from a JSON array string
///
/// Accepts the same alternate field spellings as the dict path via serde
/// aliases (`question`, `correctAnswer`).
pub fn questions_from_json(json: &str) -> crate::error::Result<Vec<Question>> {
    serde_json::from_str(json).map_err(|e| QuizError::DeserializationError(e.to_string()))
}
