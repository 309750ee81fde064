//! Math skill categories.

use serde::{Deserialize, Serialize};

/// A math topic category the engine can generate problems for.
///
/// The enumeration is closed: generator dispatch is an exhaustive match,
/// so a new skill cannot be added without the compiler pointing at every
/// place that must handle it. Unknown skill *strings* fail loudly at the
/// parse boundary with [`SkillParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Skill {
    /// Whole-number addition.
    Addition,
    /// Whole-number subtraction (results never negative).
    Subtraction,
    /// Whole-number multiplication.
    Multiplication,
    /// Whole-number division (results always exact integers).
    Division,
    /// Fraction equivalence and fraction arithmetic.
    Fractions,
    /// Decimal arithmetic to one or two places.
    Decimals,
    /// Narrative word problems over addition and subtraction.
    WordProblem,
}

impl Skill {
    /// Parse a skill from a user-supplied identifier.
    ///
    /// Accepts the canonical kebab-case names plus common spelling
    /// variants (`word_problem`, `word problem`). Anything else is a
    /// caller programming error and is rejected, never defaulted.
    pub fn parse(s: &str) -> Result<Self, SkillParseError> {
        match s.to_lowercase().replace(['-', '_'], " ").trim() {
            "addition" => Ok(Self::Addition),
            "subtraction" => Ok(Self::Subtraction),
            "multiplication" => Ok(Self::Multiplication),
            "division" => Ok(Self::Division),
            "fractions" | "fraction" => Ok(Self::Fractions),
            "decimals" | "decimal" => Ok(Self::Decimals),
            "word problem" | "word problems" | "wordproblem" => Ok(Self::WordProblem),
            _ => Err(SkillParseError(s.to_string())),
        }
    }

    /// All skills in a fixed order, for mixed-skill sessions and tests.
    pub fn all() -> &'static [Self] {
        &[
            Self::Addition,
            Self::Subtraction,
            Self::Multiplication,
            Self::Division,
            Self::Fractions,
            Self::Decimals,
            Self::WordProblem,
        ]
    }
}

impl std::str::FromStr for Skill {
    type Err = SkillParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Addition => write!(f, "addition"),
            Self::Subtraction => write!(f, "subtraction"),
            Self::Multiplication => write!(f, "multiplication"),
            Self::Division => write!(f, "division"),
            Self::Fractions => write!(f, "fractions"),
            Self::Decimals => write!(f, "decimals"),
            Self::WordProblem => write!(f, "word-problem"),
        }
    }
}

/// A skill identifier that does not name any known skill.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown skill: \"{0}\"")]
pub struct SkillParseError(pub String);
