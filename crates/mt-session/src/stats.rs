//! Cumulative learner statistics.
//!
//! One append-only record per learner, updated once per completed session
//! in a single synchronous read-modify-write. This is the only state that
//! crosses session boundaries; achievement unlocks read exclusively from
//! it, never from an individual session.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use mt_core::Skill;

use crate::result::SessionResult;

/// Sessions shorter than this many problems do not count toward the
/// fastest-session record.
const FASTEST_SESSION_MIN_PROBLEMS: usize = 5;

/// Lifetime statistics across all of a learner's sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CumulativeStats {
    /// Total problems answered.
    pub total_problems: u64,
    /// Total problems answered correctly.
    pub total_correct: u64,
    /// Total XP earned from sessions.
    pub total_xp: u64,
    /// Longest consecutive-correct run ever recorded in a session.
    pub best_streak: u32,
    /// Number of completed sessions.
    pub sessions_completed: u32,
    /// Every skill that has appeared in a completed session.
    pub skills_practiced: HashSet<Skill>,
    /// Duration of the fastest completed session of at least
    /// five problems, in seconds.
    pub fastest_session_seconds: Option<u64>,
}

impl CumulativeStats {
    /// Empty statistics for a new learner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one completed session into the record.
    pub fn absorb(&mut self, result: &SessionResult) {
        self.total_problems += result.total_problems as u64;
        self.total_correct += result.correct_count() as u64;
        self.total_xp += u64::from(result.score);
        self.best_streak = self.best_streak.max(result.best_streak);
        self.sessions_completed += 1;
        self.skills_practiced.extend(result.skills.iter().copied());

        if result.total_problems >= FASTEST_SESSION_MIN_PROBLEMS {
            self.fastest_session_seconds = Some(
                self.fastest_session_seconds
                    .map_or(result.time_spent_seconds, |prev| {
                        prev.min(result.time_spent_seconds)
                    }),
            );
        }
    }

    /// Lifetime accuracy percentage, 0.0 when nothing has been answered.
    pub fn accuracy_percent(&self) -> f64 {
        if self.total_problems == 0 {
            0.0
        } else {
            self.total_correct as f64 / self.total_problems as f64 * 100.0
        }
    }
}
