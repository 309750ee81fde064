//! Skill dispatch and batch generation.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use mt_core::{Difficulty, Problem, Skill, SkillParseError};

use crate::{arithmetic, decimals, fractions, word};

/// Generate `count` problems for one skill at one tier.
pub fn generate(
    skill: Skill,
    difficulty: Difficulty,
    count: usize,
    rng: &mut StdRng,
) -> Vec<Problem> {
    (0..count)
        .map(|_| generate_one(skill, difficulty, rng))
        .collect()
}

/// Generate a single problem.
///
/// Dispatch is exhaustive over the closed [`Skill`] enumeration; a skill
/// without a rule for the requested tier falls back to its tier-1 rule
/// inside the skill module (only reachable through [`Difficulty`]
/// clamping, since every skill defines all five tiers).
pub fn generate_one(skill: Skill, difficulty: Difficulty, rng: &mut StdRng) -> Problem {
    match skill {
        Skill::Addition => arithmetic::addition(difficulty, rng),
        Skill::Subtraction => arithmetic::subtraction(difficulty, rng),
        Skill::Multiplication => arithmetic::multiplication(difficulty, rng),
        Skill::Division => arithmetic::division(difficulty, rng),
        Skill::Fractions => fractions::generate(difficulty, rng),
        Skill::Decimals => decimals::generate(difficulty, rng),
        Skill::WordProblem => word::generate(difficulty, rng),
    }
}

/// Which skills a session draws problems from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillMix {
    /// Every problem exercises the same skill.
    Single(Skill),
    /// Each problem draws a uniformly random skill.
    Mixed,
}

impl SkillMix {
    /// Parse from an external identifier: `"mixed"` or a skill name.
    pub fn parse(s: &str) -> Result<Self, SkillParseError> {
        if s.trim().eq_ignore_ascii_case("mixed") {
            Ok(Self::Mixed)
        } else {
            Skill::parse(s).map(Self::Single)
        }
    }

    /// Pick the skill for the next problem.
    pub fn pick(&self, rng: &mut StdRng) -> Skill {
        match self {
            Self::Single(skill) => *skill,
            Self::Mixed => {
                use rand::Rng;
                let all = Skill::all();
                all[rng.random_range(0..all.len())]
            }
        }
    }
}

impl std::fmt::Display for SkillMix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single(skill) => write!(f, "{skill}"),
            Self::Mixed => write!(f, "mixed"),
        }
    }
}
