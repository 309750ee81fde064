//! Generated problems.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::answer::Answer;
use crate::difficulty::Difficulty;
use crate::skill::Skill;

/// A single generated math problem. Immutable once generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    /// Unique identifier for this problem instance.
    pub id: Uuid,
    /// The skill this problem exercises.
    pub skill: Skill,
    /// The tier the problem was generated at.
    pub difficulty: Difficulty,
    /// The question text shown to the learner.
    pub question: String,
    /// The correct answer, computed from the operands.
    pub answer: Answer,
    /// Multiple-choice options (correct one included, order randomized),
    /// or `None` for free-response problems.
    pub choices: Option<Vec<String>>,
    /// Ordered hints, general strategy first, tier-specific last.
    pub hints: Vec<String>,
    /// Worked explanation shown after the answer is submitted.
    pub explanation: String,
}

impl Problem {
    /// Whether this is a multiple-choice problem.
    pub fn is_multiple_choice(&self) -> bool {
        self.choices.is_some()
    }

    /// Content equality, ignoring the instance id.
    ///
    /// Two generation runs with the same seed produce identical content
    /// but fresh ids; tests compare with this.
    pub fn same_content(&self, other: &Self) -> bool {
        self.skill == other.skill
            && self.difficulty == other.difficulty
            && self.question == other.question
            && self.answer == other.answer
            && self.choices == other.choices
            && self.hints == other.hints
            && self.explanation == other.explanation
    }
}
