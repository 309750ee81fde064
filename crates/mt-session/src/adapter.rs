//! Adaptive difficulty state machine.
//!
//! The adapter promotes after three consecutive correct answers and
//! demotes after two consecutive mistakes. The rule is deliberately
//! asymmetric and each tier change resets only its own counter; the
//! other counter is reset by the opposite outcome. This is the defining
//! adaptive behavior of the engine and is a fixed contract.

use serde::{Deserialize, Serialize};

use mt_core::Difficulty;

/// Consecutive correct answers required to promote a tier.
pub const PROMOTE_STREAK: u32 = 3;
/// Consecutive incorrect answers required to demote a tier.
pub const DEMOTE_MISTAKES: u32 = 2;

/// What a recorded attempt did to the difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Adjustment {
    /// The tier went up by one.
    Promoted,
    /// The tier went down by one.
    Demoted,
    /// The tier did not change.
    Unchanged,
}

/// Per-session difficulty state: the active tier plus the streak and
/// mistake counters that drive tier transitions. Reset at session start.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DifficultyState {
    difficulty: Difficulty,
    streak: u32,
    mistakes: u32,
}

impl DifficultyState {
    /// Create a fresh state at the given starting tier.
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            streak: 0,
            mistakes: 0,
        }
    }

    /// The active difficulty tier.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Consecutive correct answers since the last mistake or promotion.
    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// Consecutive incorrect answers since the last correct answer or
    /// demotion.
    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    /// Record one attempt outcome and apply the transition rule.
    ///
    /// Correct: streak += 1, mistakes = 0; when streak reaches
    /// [`PROMOTE_STREAK`] and the tier is below 5, the tier goes up and
    /// the streak resets to 0. Incorrect: streak = 0, mistakes += 1; when
    /// mistakes reach [`DEMOTE_MISTAKES`] and the tier is above 1, the
    /// tier goes down and the mistake counter resets to 0. At the tier
    /// bounds the firing counter keeps growing instead of resetting;
    /// the reset is tied to the tier actually moving.
    pub fn record(&mut self, correct: bool) -> Adjustment {
        if correct {
            self.streak += 1;
            self.mistakes = 0;
            if self.streak >= PROMOTE_STREAK && !self.difficulty.is_max() {
                self.difficulty.promote();
                self.streak = 0;
                tracing::debug!(tier = self.difficulty.value(), "difficulty promoted");
                return Adjustment::Promoted;
            }
        } else {
            self.streak = 0;
            self.mistakes += 1;
            if self.mistakes >= DEMOTE_MISTAKES && !self.difficulty.is_min() {
                self.difficulty.demote();
                self.mistakes = 0;
                tracing::debug!(tier = self.difficulty.value(), "difficulty demoted");
                return Adjustment::Demoted;
            }
        }
        Adjustment::Unchanged
    }
}
