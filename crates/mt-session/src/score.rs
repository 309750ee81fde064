//! XP scoring.
//!
//! A correct answer is worth `tier * 10 + streak * 5`, where the streak is
//! measured *before* the adapter increments it. An incorrect answer is
//! worth nothing; XP only ever accumulates.

use mt_core::Difficulty;

/// Compute the XP delta for one attempt.
pub fn score_answer(difficulty: Difficulty, streak_before: u32, correct: bool) -> u32 {
    if correct {
        u32::from(difficulty.value()) * 10 + streak_before * 5
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_scores_tier_times_ten_plus_streak_bonus() {
        assert_eq!(score_answer(Difficulty::new(1), 0, true), 10);
        assert_eq!(score_answer(Difficulty::new(2), 0, true), 20);
        assert_eq!(score_answer(Difficulty::new(2), 2, true), 30);
        assert_eq!(score_answer(Difficulty::new(5), 4, true), 70);
    }

    #[test]
    fn incorrect_scores_zero_at_any_tier_or_streak() {
        for tier in 1..=5 {
            for streak in 0..10 {
                assert_eq!(score_answer(Difficulty::new(tier), streak, false), 0);
            }
        }
    }

    #[test]
    fn tier_two_streak_sequence() {
        // Scenario: three correct answers at tier 2 with pre-increment
        // streak values 0, 1, 2.
        let d = Difficulty::new(2);
        assert_eq!(score_answer(d, 0, true), 20);
        assert_eq!(score_answer(d, 1, true), 25);
        assert_eq!(score_answer(d, 2, true), 30);
    }
}
