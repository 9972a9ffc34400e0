//! Question and difficulty tier structures

use crate::error::{QuizError, Result};
use serde::Deserialize;
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Authoring-time difficulty of a single question. Fixed once written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(QuizError::InvalidTier(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Difficulty tier requested when a session starts
///
/// `Mixed` is not a stored tier: it is materialized at selection time as a
/// shuffled concatenation of the three authored tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyTier {
    Easy,
    Medium,
    Hard,
    Mixed,
}

impl DifficultyTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyTier::Easy => "easy",
            DifficultyTier::Medium => "medium",
            DifficultyTier::Hard => "hard",
            DifficultyTier::Mixed => "mixed",
        }
    }

    /// Parse a tier string, falling back to `Easy` on unrecognized input.
    ///
    /// This is the graceful-degradation policy at the presentation boundary;
    /// strict callers use `FromStr` and get `InvalidTier` instead.
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or(DifficultyTier::Easy)
    }
}

impl FromStr for DifficultyTier {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(DifficultyTier::Easy),
            "medium" => Ok(DifficultyTier::Medium),
            "hard" => Ok(DifficultyTier::Hard),
            "mixed" => Ok(DifficultyTier::Mixed),
            _ => Err(QuizError::InvalidTier(s.to_string())),
        }
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single multiple-choice question
///
/// Option position is significant: it is the canonical index for scoring and
/// for the 1-4 keyboard shortcuts. The reference catalog always uses 4
/// options; anything with at least 2 is accepted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Question {
    pub id: i32,
    #[serde(alias = "question")]
    pub text: String,
    pub options: SmallVec<[String; 4]>,
    #[serde(alias = "correctAnswer")]
    pub correct_index: usize,
    #[serde(default = "default_difficulty")]
    pub difficulty: Difficulty,
}

fn default_difficulty() -> Difficulty {
    Difficulty::Easy
}

impl Question {
    /// Check the structural invariants: at least two options and an
    /// in-bounds correct index.
    pub fn validate(&self) -> Result<()> {
        if self.options.len() < 2 {
            return Err(QuizError::InvalidQuestion {
                id: self.id,
                reason: format!("needs at least 2 options, got {}", self.options.len()),
            });
        }
        if self.correct_index >= self.options.len() {
            return Err(QuizError::InvalidQuestion {
                id: self.id,
                reason: format!(
                    "correct_index {} out of range for {} options",
                    self.correct_index,
                    self.options.len()
                ),
            });
        }
        Ok(())
    }
}
