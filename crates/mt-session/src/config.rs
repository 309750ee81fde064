//! Configuration for a quiz session.

use serde::{Deserialize, Serialize};

use mt_core::{Difficulty, Skill};
use mt_problems::SkillMix;

/// How problems are produced over the course of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionMode {
    /// All problems are generated upfront at the starting tier.
    Batch,
    /// Each next problem is generated at the adapter's current tier.
    Adaptive,
}

/// Configuration for a quiz session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Which skills the session draws from.
    pub mix: SkillMix,
    /// Starting difficulty tier.
    pub difficulty: Difficulty,
    /// Batch or adaptive problem production.
    pub mode: SessionMode,
    /// Total number of problems in the session.
    pub problem_count: usize,
    /// RNG seed for reproducible problem generation.
    pub seed: u64,
    /// How long the presentation layer should display feedback before
    /// advancing, in milliseconds. A hint for the caller only; the
    /// engine never waits on it.
    pub feedback_timeout_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mix: SkillMix::Single(Skill::Addition),
            difficulty: Difficulty::MIN,
            mode: SessionMode::Batch,
            problem_count: 10,
            seed: 42,
            feedback_timeout_ms: 2500,
        }
    }
}

impl SessionConfig {
    /// Draw every problem from a single skill.
    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.mix = SkillMix::Single(skill);
        self
    }

    /// Set the skill mix directly.
    pub fn with_mix(mut self, mix: SkillMix) -> Self {
        self.mix = mix;
        self
    }

    /// Set the starting difficulty tier (clamped to 1-5).
    pub fn with_difficulty(mut self, tier: u8) -> Self {
        self.difficulty = Difficulty::new(tier);
        self
    }

    /// Derive the starting tier from a K-12 grade level: kindergarten
    /// (grade 0) through grade 2 start at tier 1, and every two grades
    /// after that start one tier higher.
    pub fn with_grade_level(mut self, grade: u8) -> Self {
        let tier = match grade {
            0..=2 => 1,
            3..=4 => 2,
            5..=6 => 3,
            7..=8 => 4,
            _ => 5,
        };
        self.difficulty = Difficulty::new(tier);
        self
    }

    /// Set batch or adaptive mode.
    pub fn with_mode(mut self, mode: SessionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the number of problems in the session.
    pub fn with_problem_count(mut self, count: usize) -> Self {
        self.problem_count = count;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the feedback display hint for the presentation layer.
    pub fn with_feedback_timeout_ms(mut self, ms: u64) -> Self {
        self.feedback_timeout_ms = ms;
        self
    }
}
