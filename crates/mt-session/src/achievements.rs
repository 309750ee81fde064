//! Achievement catalog and unlock evaluation.
//!
//! Achievements are predicate-gated milestones over cumulative
//! statistics, never over a single session. Evaluation is idempotent: an unlocked
//! achievement stays unlocked and is never re-awarded or revoked.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::stats::CumulativeStats;

/// What kind of accomplishment an achievement celebrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AchievementCategory {
    /// Volume of problems solved.
    Mastery,
    /// Consecutive-correct runs.
    Streak,
    /// Fast session completion.
    Speed,
    /// Lifetime accuracy.
    Accuracy,
    /// Sessions completed over time.
    Consistency,
    /// Breadth of skills practiced.
    Exploration,
}

/// How rare an achievement is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rarity {
    /// Unlocked by most learners early on.
    Common,
    /// Takes sustained play.
    Rare,
    /// A serious milestone.
    Epic,
    /// The long haul.
    Legendary,
}

/// The unlock predicate, as closed data over [`CumulativeStats`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnlockCondition {
    /// Total problems answered reaches the threshold.
    TotalProblems(u64),
    /// Total correct answers reaches the threshold.
    TotalCorrect(u64),
    /// Best consecutive-correct run reaches the threshold.
    BestStreak(u32),
    /// Lifetime accuracy reaches the percentage, with a minimum volume
    /// so a single lucky session does not qualify.
    AccuracyAtLeast {
        /// Required accuracy percentage.
        percent: u32,
        /// Minimum problems answered before accuracy counts.
        min_problems: u64,
    },
    /// Distinct skills practiced reaches the threshold.
    SkillsPracticed(usize),
    /// Completed sessions reaches the threshold.
    SessionsCompleted(u32),
    /// Total XP reaches the threshold.
    TotalXp(u64),
    /// Fastest qualifying session is at or under the given duration.
    FastestSessionUnder {
        /// Maximum duration in seconds.
        seconds: u64,
    },
}

impl UnlockCondition {
    /// Whether the statistics satisfy this condition.
    pub fn met(&self, stats: &CumulativeStats) -> bool {
        match *self {
            Self::TotalProblems(n) => stats.total_problems >= n,
            Self::TotalCorrect(n) => stats.total_correct >= n,
            Self::BestStreak(n) => stats.best_streak >= n,
            Self::AccuracyAtLeast {
                percent,
                min_problems,
            } => {
                stats.total_problems >= min_problems
                    && stats.accuracy_percent() >= f64::from(percent)
            }
            Self::SkillsPracticed(n) => stats.skills_practiced.len() >= n,
            Self::SessionsCompleted(n) => stats.sessions_completed >= n,
            Self::TotalXp(n) => stats.total_xp >= n,
            Self::FastestSessionUnder { seconds } => stats
                .fastest_session_seconds
                .is_some_and(|fastest| fastest <= seconds),
        }
    }
}

/// One entry in an achievement catalog.
#[derive(Debug, Clone, Copy)]
pub struct Achievement {
    /// Stable identifier, used as the ledger key.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// What kind of accomplishment this is.
    pub category: AchievementCategory,
    /// How rare it is.
    pub rarity: Rarity,
    /// When it unlocks.
    pub condition: UnlockCondition,
    /// XP granted to the learner on unlock.
    pub xp_reward: u32,
}

/// The built-in achievement catalog.
///
/// Callers may supply their own slice to [`evaluate`]; this one covers
/// every category at increasing rarity.
pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: "first-steps",
        name: "First Steps",
        category: AchievementCategory::Mastery,
        rarity: Rarity::Common,
        condition: UnlockCondition::TotalCorrect(1),
        xp_reward: 10,
    },
    Achievement {
        id: "apprentice",
        name: "Apprentice",
        category: AchievementCategory::Mastery,
        rarity: Rarity::Common,
        condition: UnlockCondition::TotalCorrect(25),
        xp_reward: 25,
    },
    Achievement {
        id: "century",
        name: "Century Club",
        category: AchievementCategory::Mastery,
        rarity: Rarity::Rare,
        condition: UnlockCondition::TotalProblems(100),
        xp_reward: 100,
    },
    Achievement {
        id: "problem-machine",
        name: "Problem Machine",
        category: AchievementCategory::Mastery,
        rarity: Rarity::Epic,
        condition: UnlockCondition::TotalProblems(500),
        xp_reward: 250,
    },
    Achievement {
        id: "on-a-roll",
        name: "On a Roll",
        category: AchievementCategory::Streak,
        rarity: Rarity::Common,
        condition: UnlockCondition::BestStreak(5),
        xp_reward: 25,
    },
    Achievement {
        id: "unstoppable",
        name: "Unstoppable",
        category: AchievementCategory::Streak,
        rarity: Rarity::Rare,
        condition: UnlockCondition::BestStreak(10),
        xp_reward: 75,
    },
    Achievement {
        id: "quick-thinker",
        name: "Quick Thinker",
        category: AchievementCategory::Speed,
        rarity: Rarity::Rare,
        condition: UnlockCondition::FastestSessionUnder { seconds: 60 },
        xp_reward: 50,
    },
    Achievement {
        id: "sharpshooter",
        name: "Sharpshooter",
        category: AchievementCategory::Accuracy,
        rarity: Rarity::Rare,
        condition: UnlockCondition::AccuracyAtLeast {
            percent: 90,
            min_problems: 50,
        },
        xp_reward: 100,
    },
    Achievement {
        id: "precision",
        name: "Precision Instrument",
        category: AchievementCategory::Accuracy,
        rarity: Rarity::Epic,
        condition: UnlockCondition::AccuracyAtLeast {
            percent: 95,
            min_problems: 100,
        },
        xp_reward: 200,
    },
    Achievement {
        id: "regular",
        name: "Regular",
        category: AchievementCategory::Consistency,
        rarity: Rarity::Common,
        condition: UnlockCondition::SessionsCompleted(5),
        xp_reward: 25,
    },
    Achievement {
        id: "marathoner",
        name: "Marathoner",
        category: AchievementCategory::Consistency,
        rarity: Rarity::Rare,
        condition: UnlockCondition::SessionsCompleted(20),
        xp_reward: 100,
    },
    Achievement {
        id: "explorer",
        name: "Explorer",
        category: AchievementCategory::Exploration,
        rarity: Rarity::Common,
        condition: UnlockCondition::SkillsPracticed(3),
        xp_reward: 25,
    },
    Achievement {
        id: "polymath",
        name: "Polymath",
        category: AchievementCategory::Exploration,
        rarity: Rarity::Epic,
        condition: UnlockCondition::SkillsPracticed(7),
        xp_reward: 150,
    },
    Achievement {
        id: "xp-hoarder",
        name: "XP Hoarder",
        category: AchievementCategory::Mastery,
        rarity: Rarity::Legendary,
        condition: UnlockCondition::TotalXp(10_000),
        xp_reward: 500,
    },
];

/// A learner's unlock record: achievement id to unlock time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AchievementLedger {
    unlocked: BTreeMap<String, DateTime<Utc>>,
}

impl AchievementLedger {
    /// An empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the given achievement is already unlocked.
    pub fn is_unlocked(&self, id: &str) -> bool {
        self.unlocked.contains_key(id)
    }

    /// When the given achievement was unlocked, if it is.
    pub fn unlocked_at(&self, id: &str) -> Option<DateTime<Utc>> {
        self.unlocked.get(id).copied()
    }

    /// Number of unlocked achievements.
    pub fn len(&self) -> usize {
        self.unlocked.len()
    }

    /// Whether nothing is unlocked yet.
    pub fn is_empty(&self) -> bool {
        self.unlocked.is_empty()
    }

    fn unlock(&mut self, id: &str) {
        self.unlocked.insert(id.to_string(), Utc::now());
    }
}

/// Evaluate the catalog against cumulative statistics.
///
/// Returns the ids newly unlocked by this call, in catalog order.
/// Idempotent: a second call with identical stats unlocks nothing, and
/// already-unlocked achievements are never revoked.
pub fn evaluate(
    stats: &CumulativeStats,
    catalog: &[Achievement],
    ledger: &mut AchievementLedger,
) -> Vec<&'static str> {
    let mut newly_unlocked = Vec::new();
    for achievement in catalog {
        if ledger.is_unlocked(achievement.id) {
            continue;
        }
        if achievement.condition.met(stats) {
            ledger.unlock(achievement.id);
            newly_unlocked.push(achievement.id);
            tracing::debug!(
                id = achievement.id,
                category = ?achievement.category,
                "achievement unlocked"
            );
        }
    }
    newly_unlocked
}
