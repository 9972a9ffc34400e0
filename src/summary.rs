//! Result summary calculator
//!
//! Pure derivation of the final score payload: percentage (round half-up)
//! and the qualitative message band shown on the results view.

use serde::Serialize;

/// Qualitative band derived from the percentage score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    Excellent,
    Good,
    NeedsImprovement,
}

impl Band {
    /// Band boundaries are inclusive at their lower bound:
    /// excellent >= 80, good >= 50, needs_improvement otherwise.
    pub fn from_percentage(percentage: u32) -> Self {
        if percentage >= 80 {
            Band::Excellent
        } else if percentage >= 50 {
            Band::Good
        } else {
            Band::NeedsImprovement
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Band::Excellent => "excellent",
            Band::Good => "good",
            Band::NeedsImprovement => "needs_improvement",
        }
    }

    /// Message shown on the results view for this band
    pub fn message(&self) -> &'static str {
        match self {
            Band::Excellent => "Excellent work!",
            Band::Good => "Good job!",
            Band::NeedsImprovement => "You can do better!",
        }
    }
}

/// Final score payload handed to the results view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResultSummary {
    pub score: u32,
    pub total: u32,
    pub percentage: u32,
    pub band: Band,
}

/// Derive the summary from a final score
///
/// Deterministic; a zero total yields 0% rather than dividing by zero.
pub fn summarize(score: u32, total: u32) -> ResultSummary {
    let percentage = if total == 0 {
        0
    } else {
        // Round half-up, kept in integer arithmetic
        (200 * score + total) / (2 * total)
    };

    ResultSummary {
        score,
        total,
        percentage,
        band: Band::from_percentage(percentage),
    }
}
