//! Session result summaries.

use serde::{Deserialize, Serialize};

use mt_core::{Attempt, Skill};

/// The summary a completed session hands to its caller.
///
/// This is the only artifact the engine expects an external collaborator
/// (a progress-tracking XP ledger, a results screen) to consume or
/// persist. The engine itself persists nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResult {
    /// Total XP accumulated over the session.
    pub score: u32,
    /// Number of problems answered.
    pub total_problems: usize,
    /// Wall-clock seconds from session start to completion.
    pub time_spent_seconds: u64,
    /// Percentage of attempts answered correctly (0.0-100.0).
    pub accuracy_percent: f64,
    /// Longest run of consecutive correct answers in the session.
    pub best_streak: u32,
    /// Distinct skills that appeared in the session, in first-seen order.
    pub skills: Vec<Skill>,
    /// Per-problem attempt records, in answer order.
    pub attempts: Vec<Attempt>,
}

impl SessionResult {
    /// Number of correctly answered problems.
    pub fn correct_count(&self) -> usize {
        self.attempts.iter().filter(|a| a.correct).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn attempt(correct: bool, xp: u32) -> Attempt {
        Attempt {
            problem_id: Uuid::new_v4(),
            submitted: "7".to_string(),
            correct,
            hints_used: 0,
            xp_awarded: xp,
            time_to_answer_ms: None,
        }
    }

    #[test]
    fn correct_count() {
        let result = SessionResult {
            score: 30,
            total_problems: 3,
            time_spent_seconds: 40,
            accuracy_percent: 66.7,
            best_streak: 2,
            skills: vec![Skill::Addition],
            attempts: vec![attempt(true, 10), attempt(true, 20), attempt(false, 0)],
        };
        assert_eq!(result.correct_count(), 2);
    }

    #[test]
    fn serde_round_trip() {
        let result = SessionResult {
            score: 10,
            total_problems: 1,
            time_spent_seconds: 5,
            accuracy_percent: 100.0,
            best_streak: 1,
            skills: vec![Skill::Fractions],
            attempts: vec![attempt(true, 10)],
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: SessionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.score, 10);
        assert_eq!(back.skills, vec![Skill::Fractions]);
        assert_eq!(back.attempts.len(), 1);
    }
}
