//! Question catalog keyed by difficulty tier

use crate::config::{Difficulty, DifficultyTier, Question};
use crate::error::{QuizError, Result};
use crate::shuffle::shuffle;
use ahash::AHashMap;
use rand::Rng;

/// Immutable catalog of questions grouped by authoring difficulty
///
/// Selection for the fixed tiers is pure and idempotent; only `Mixed`
/// involves randomness.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    by_difficulty: AHashMap<Difficulty, Vec<Question>>,
}

impl QuestionBank {
    /// Build a bank from a flat question list, validating every entry
    pub fn from_questions(questions: Vec<Question>) -> Result<Self> {
        let mut by_difficulty: AHashMap<Difficulty, Vec<Question>> = AHashMap::new();
        for question in questions {
            question.validate()?;
            by_difficulty
                .entry(question.difficulty)
                .or_default()
                .push(question);
        }
        Ok(Self { by_difficulty })
    }

    /// Build a bank from pre-grouped, known-valid data (builtin catalog)
    pub(crate) fn from_grouped(by_difficulty: AHashMap<Difficulty, Vec<Question>>) -> Self {
        Self { by_difficulty }
    }

    /// Questions authored at one fixed difficulty, in authoring order
    pub fn fixed_tier(&self, difficulty: Difficulty) -> &[Question] {
        self.by_difficulty
            .get(&difficulty)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of questions across all difficulties
    pub fn len(&self) -> usize {
        self.by_difficulty.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Produce the ordered question sequence for a session
    ///
    /// Fixed tiers return their stored order on every call; `Mixed` returns
    /// a fresh uniform shuffle of all three tiers concatenated. An empty
    /// result is an `EmptyQuestionSet` error, recoverable by returning the
    /// user to tier selection.
    pub fn select<R: Rng + ?Sized>(
        &self,
        tier: DifficultyTier,
        rng: &mut R,
    ) -> Result<Vec<Question>> {
        let questions = match tier {
            DifficultyTier::Easy => self.fixed_tier(Difficulty::Easy).to_vec(),
            DifficultyTier::Medium => self.fixed_tier(Difficulty::Medium).to_vec(),
            DifficultyTier::Hard => self.fixed_tier(Difficulty::Hard).to_vec(),
            DifficultyTier::Mixed => {
                let mut all = Vec::with_capacity(self.len());
                all.extend_from_slice(self.fixed_tier(Difficulty::Easy));
                all.extend_from_slice(self.fixed_tier(Difficulty::Medium));
                all.extend_from_slice(self.fixed_tier(Difficulty::Hard));
                shuffle(rng, &all)
            }
        };

        if questions.is_empty() {
            return Err(QuizError::EmptyQuestionSet(tier.to_string()));
        }

        Ok(questions)
    }
}
