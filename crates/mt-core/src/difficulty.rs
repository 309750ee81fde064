//! Difficulty tier tracking.
//!
//! The difficulty tier (1-5) controls operand magnitude and complexity
//! within a skill's generation rules. Higher tiers produce larger operands,
//! carrying/borrowing, and multi-step items.

use serde::{Deserialize, Serialize};

/// A difficulty tier, ranging from 1 (easiest) to 5 (hardest).
///
/// Always in range: construction clamps, deserialization goes through the
/// same clamp, and [`promote`](Self::promote) / [`demote`](Self::demote)
/// are no-ops at the bounds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "u8", into = "u8")]
pub struct Difficulty {
    value: u8,
}

impl Difficulty {
    /// The easiest tier.
    pub const MIN: Self = Self { value: 1 };
    /// The hardest tier.
    pub const MAX: Self = Self { value: 5 };

    /// Create a new tier, clamped to 1-5.
    pub fn new(value: u8) -> Self {
        Self {
            value: value.clamp(1, 5),
        }
    }

    /// Get the current tier value (1-5).
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Raise the tier by 1 (max 5). Called after a sustained streak.
    pub fn promote(&mut self) {
        self.value = (self.value + 1).min(5);
    }

    /// Lower the tier by 1 (min 1). Called after repeated mistakes.
    pub fn demote(&mut self) {
        self.value = self.value.saturating_sub(1).max(1);
    }

    /// Whether the tier is at the top of the range.
    pub fn is_max(&self) -> bool {
        self.value == 5
    }

    /// Whether the tier is at the bottom of the range.
    pub fn is_min(&self) -> bool {
        self.value == 1
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::MIN
    }
}

impl From<u8> for Difficulty {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<Difficulty> for u8 {
    fn from(d: Difficulty) -> u8 {
        d.value
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
