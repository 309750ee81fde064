//! The quiz session state machine.
//!
//! `QuizSession` moves through `Presenting -> Feedback -> (Presenting |
//! Complete)`. Evaluation happens synchronously inside
//! [`submit_answer`](QuizSession::submit_answer); in a single-threaded
//! core no event can arrive mid-evaluation, so it is not an observable
//! resting state. Events that do not match the current phase are
//! rejected without changing anything.

use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;

use mt_core::{Attempt, Problem};
use mt_problems::generate_one;

use crate::adapter::{Adjustment, DifficultyState};
use crate::config::{SessionConfig, SessionMode};
use crate::error::SessionError;
use crate::result::SessionResult;
use crate::score::score_answer;

/// The observable phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// A problem is on display; hints and one answer are accepted.
    Presenting,
    /// The last answer's feedback is on display; only `advance` is accepted.
    Feedback,
    /// The session is finished; only `result` is meaningful.
    Complete,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Presenting => write!(f, "presenting"),
            Self::Feedback => write!(f, "showing feedback"),
            Self::Complete => write!(f, "complete"),
        }
    }
}

/// What the session told the caller after evaluating an answer.
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// Whether the submission matched the correct answer.
    pub correct: bool,
    /// XP awarded for this attempt.
    pub xp_awarded: u32,
    /// Worked explanation to display alongside the verdict.
    pub explanation: String,
    /// What the attempt did to the difficulty tier.
    pub adjustment: Adjustment,
}

/// The outcome of an `advance` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// A new problem is now presenting.
    Next,
    /// The session just completed.
    Complete,
}

/// An interactive quiz session.
#[derive(Debug)]
pub struct QuizSession {
    config: SessionConfig,
    rng: StdRng,
    state: DifficultyState,
    problems: Vec<Problem>,
    current: usize,
    phase: Phase,
    hints_revealed: u32,
    attempts: Vec<Attempt>,
    xp: u32,
    /// Session-wide consecutive-correct run; unlike the adapter's streak
    /// counter it survives tier promotions, feeding the best-streak stat.
    run: u32,
    best_run: u32,
    started_at: DateTime<Utc>,
    presented_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Start a new session from a configuration.
    ///
    /// Batch mode generates all problems upfront at the starting tier;
    /// adaptive mode generates only the first and produces each next
    /// problem at the adapter's tier when the caller advances.
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        if config.problem_count == 0 {
            return Err(SessionError::NoProblems);
        }

        let mut rng = StdRng::seed_from_u64(config.seed);
        let state = DifficultyState::new(config.difficulty);
        let problems = match config.mode {
            SessionMode::Batch => (0..config.problem_count)
                .map(|_| {
                    let skill = config.mix.pick(&mut rng);
                    generate_one(skill, config.difficulty, &mut rng)
                })
                .collect(),
            SessionMode::Adaptive => {
                let skill = config.mix.pick(&mut rng);
                vec![generate_one(skill, config.difficulty, &mut rng)]
            }
        };

        let now = Utc::now();
        tracing::debug!(
            mix = %config.mix,
            tier = config.difficulty.value(),
            count = config.problem_count,
            mode = ?config.mode,
            "session started"
        );

        Ok(Self {
            config,
            rng,
            state,
            problems,
            current: 0,
            phase: Phase::Presenting,
            hints_revealed: 0,
            attempts: Vec::new(),
            xp: 0,
            run: 0,
            best_run: 0,
            started_at: now,
            presented_at: now,
            completed_at: None,
        })
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The problem currently presented (or under feedback), `None` once
    /// the session is complete.
    pub fn current_problem(&self) -> Option<&Problem> {
        match self.phase {
            Phase::Complete => None,
            _ => self.problems.get(self.current),
        }
    }

    /// XP accumulated so far. Non-decreasing over the session.
    pub fn xp(&self) -> u32 {
        self.xp
    }

    /// The adapter's difficulty state.
    pub fn difficulty_state(&self) -> &DifficultyState {
        &self.state
    }

    /// Attempts recorded so far.
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Reveal the next hint for the current problem.
    ///
    /// Only valid while presenting. Asking past the end of the hint list
    /// is rejected with [`SessionError::NoMoreHints`] and changes nothing.
    pub fn request_hint(&mut self) -> Result<&str, SessionError> {
        self.expect_phase(Phase::Presenting)?;

        let problem = &self.problems[self.current];
        let next = self.hints_revealed as usize;
        if next >= problem.hints.len() {
            return Err(SessionError::NoMoreHints);
        }
        self.hints_revealed += 1;
        Ok(&problem.hints[next])
    }

    /// Submit an answer for the current problem.
    ///
    /// Only valid while presenting; an empty or whitespace-only answer is
    /// rejected without advancing the state machine. On success the
    /// session evaluates, scores, adapts, records the attempt, and moves
    /// to the feedback phase.
    pub fn submit_answer(&mut self, raw: &str) -> Result<Evaluation, SessionError> {
        self.expect_phase(Phase::Presenting)?;
        if raw.trim().is_empty() {
            return Err(SessionError::EmptyAnswer);
        }

        let problem = &self.problems[self.current];
        let correct = problem.answer.matches(raw);
        let explanation = problem.explanation.clone();
        let problem_id = problem.id;

        // Streak and tier are read before the adapter moves them.
        let streak_before = self.state.streak();
        let xp_awarded = score_answer(self.state.difficulty(), streak_before, correct);
        let adjustment = self.state.record(correct);

        self.xp += xp_awarded;
        if correct {
            self.run += 1;
            self.best_run = self.best_run.max(self.run);
        } else {
            self.run = 0;
        }

        let elapsed = (Utc::now() - self.presented_at).num_milliseconds().max(0);
        self.attempts.push(Attempt {
            problem_id,
            submitted: raw.to_string(),
            correct,
            hints_used: self.hints_revealed,
            xp_awarded,
            time_to_answer_ms: Some(elapsed as u64),
        });
        self.phase = Phase::Feedback;

        tracing::debug!(correct, xp_awarded, ?adjustment, "answer evaluated");

        Ok(Evaluation {
            correct,
            xp_awarded,
            explanation,
            adjustment,
        })
    }

    /// Move past the feedback screen.
    ///
    /// Only valid while showing feedback. Presents the next problem or
    /// completes the session once the configured count is answered. The
    /// call is synchronous; any feedback-display delay is the caller's
    /// timing policy, not the engine's.
    pub fn advance(&mut self) -> Result<Advance, SessionError> {
        self.expect_phase(Phase::Feedback)?;

        if self.attempts.len() >= self.config.problem_count {
            self.phase = Phase::Complete;
            self.completed_at = Some(Utc::now());
            tracing::debug!(
                xp = self.xp,
                answered = self.attempts.len(),
                "session complete"
            );
            return Ok(Advance::Complete);
        }

        match self.config.mode {
            SessionMode::Batch => {
                self.current += 1;
            }
            SessionMode::Adaptive => {
                let skill = self.config.mix.pick(&mut self.rng);
                let problem = generate_one(skill, self.state.difficulty(), &mut self.rng);
                self.problems.push(problem);
                self.current = self.problems.len() - 1;
            }
        }
        self.hints_revealed = 0;
        self.presented_at = Utc::now();
        self.phase = Phase::Presenting;
        Ok(Advance::Next)
    }

    /// The session summary, available once the session is complete.
    pub fn result(&self) -> Option<SessionResult> {
        let completed_at = self.completed_at?;

        let total = self.attempts.len();
        let correct = self.attempts.iter().filter(|a| a.correct).count();
        let accuracy_percent = if total == 0 {
            0.0
        } else {
            correct as f64 / total as f64 * 100.0
        };

        let mut skills = Vec::new();
        for p in &self.problems {
            if !skills.contains(&p.skill) {
                skills.push(p.skill);
            }
        }

        Some(SessionResult {
            score: self.xp,
            total_problems: total,
            time_spent_seconds: (completed_at - self.started_at).num_seconds().max(0) as u64,
            accuracy_percent,
            best_streak: self.best_run,
            skills,
            attempts: self.attempts.clone(),
        })
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), SessionError> {
        match self.phase {
            Phase::Complete => Err(SessionError::SessionComplete),
            found if found != expected => Err(SessionError::InvalidState { expected, found }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mt_core::Skill;
    use mt_problems::SkillMix;

    fn session(count: usize) -> QuizSession {
        QuizSession::new(
            SessionConfig::default()
                .with_skill(Skill::Addition)
                .with_problem_count(count)
                .with_seed(42),
        )
        .unwrap()
    }

    /// Read the right answer off the current problem for test driving.
    fn right_answer(s: &QuizSession) -> String {
        s.current_problem().unwrap().answer.to_string()
    }

    #[test]
    fn zero_problems_rejected() {
        let err = QuizSession::new(SessionConfig::default().with_problem_count(0)).unwrap_err();
        assert_eq!(err, SessionError::NoProblems);
    }

    #[test]
    fn starts_presenting_first_problem() {
        let s = session(3);
        assert_eq!(s.phase(), Phase::Presenting);
        assert!(s.current_problem().is_some());
        assert_eq!(s.xp(), 0);
        assert!(s.attempts().is_empty());
    }

    #[test]
    fn correct_answer_awards_xp_and_moves_to_feedback() {
        let mut s = session(3);
        let ans = right_answer(&s);
        let eval = s.submit_answer(&ans).unwrap();
        assert!(eval.correct);
        assert_eq!(eval.xp_awarded, 10); // tier 1, streak 0
        assert_eq!(s.phase(), Phase::Feedback);
        assert_eq!(s.xp(), 10);
    }

    #[test]
    fn wrong_answer_awards_nothing() {
        let mut s = session(3);
        let eval = s.submit_answer("999999").unwrap();
        assert!(!eval.correct);
        assert_eq!(eval.xp_awarded, 0);
        assert_eq!(s.xp(), 0);
        assert!(!eval.explanation.is_empty());
    }

    #[test]
    fn empty_answer_rejected_without_advancing() {
        let mut s = session(3);
        assert_eq!(s.submit_answer("   ").unwrap_err(), SessionError::EmptyAnswer);
        assert_eq!(s.phase(), Phase::Presenting);
        assert!(s.attempts().is_empty());
        // Still answerable afterwards.
        let ans = right_answer(&s);
        assert!(s.submit_answer(&ans).unwrap().correct);
    }

    #[test]
    fn submit_during_feedback_rejected() {
        let mut s = session(3);
        let ans = right_answer(&s);
        s.submit_answer(&ans).unwrap();
        let err = s.submit_answer("1").unwrap_err();
        assert_eq!(
            err,
            SessionError::InvalidState {
                expected: Phase::Presenting,
                found: Phase::Feedback,
            }
        );
        assert_eq!(s.attempts().len(), 1);
    }

    #[test]
    fn advance_while_presenting_rejected() {
        let mut s = session(3);
        let err = s.advance().unwrap_err();
        assert_eq!(
            err,
            SessionError::InvalidState {
                expected: Phase::Feedback,
                found: Phase::Presenting,
            }
        );
    }

    #[test]
    fn hints_revealed_one_per_request_then_rejected() {
        let mut s = session(1);
        let total_hints = s.current_problem().unwrap().hints.len();
        for _ in 0..total_hints {
            assert!(!s.request_hint().unwrap().is_empty());
        }
        assert_eq!(s.request_hint().unwrap_err(), SessionError::NoMoreHints);
        // Session unaffected: answering still works and records hint use.
        let ans = right_answer(&s);
        s.submit_answer(&ans).unwrap();
        assert_eq!(s.attempts()[0].hints_used, total_hints as u32);
    }

    #[test]
    fn full_session_produces_result() {
        let mut s = session(3);
        for i in 0..3 {
            let ans = right_answer(&s);
            s.submit_answer(&ans).unwrap();
            let adv = s.advance().unwrap();
            if i < 2 {
                assert_eq!(adv, Advance::Next);
            } else {
                assert_eq!(adv, Advance::Complete);
            }
        }
        assert_eq!(s.phase(), Phase::Complete);
        assert!(s.current_problem().is_none());

        let result = s.result().unwrap();
        assert_eq!(result.total_problems, 3);
        assert_eq!(result.correct_count(), 3);
        assert!((result.accuracy_percent - 100.0).abs() < f64::EPSILON);
        assert_eq!(result.best_streak, 3);
        assert_eq!(result.skills, vec![Skill::Addition]);
        // XP equals the sum of per-attempt awards.
        let sum: u32 = result.attempts.iter().map(|a| a.xp_awarded).sum();
        assert_eq!(result.score, sum);
    }

    #[test]
    fn result_is_none_before_completion() {
        let mut s = session(2);
        assert!(s.result().is_none());
        let ans = right_answer(&s);
        s.submit_answer(&ans).unwrap();
        assert!(s.result().is_none());
    }

    #[test]
    fn completed_session_rejects_everything() {
        let mut s = session(1);
        let ans = right_answer(&s);
        s.submit_answer(&ans).unwrap();
        s.advance().unwrap();
        assert_eq!(s.submit_answer("1").unwrap_err(), SessionError::SessionComplete);
        assert_eq!(s.request_hint().unwrap_err(), SessionError::SessionComplete);
        assert_eq!(s.advance().unwrap_err(), SessionError::SessionComplete);
    }

    #[test]
    fn three_correct_promote_tier_with_pre_increment_scores() {
        // Scenario: tier 2 start, three correct answers. Awards use the
        // pre-increment streak (20, 25, 30 XP) and the tier becomes 3.
        let mut s = QuizSession::new(
            SessionConfig::default()
                .with_skill(Skill::Addition)
                .with_difficulty(2)
                .with_problem_count(5),
        )
        .unwrap();

        let mut awards = Vec::new();
        for _ in 0..3 {
            let ans = right_answer(&s);
            awards.push(s.submit_answer(&ans).unwrap().xp_awarded);
            s.advance().unwrap();
        }
        assert_eq!(awards, vec![20, 25, 30]);
        assert_eq!(s.difficulty_state().difficulty().value(), 3);
        assert_eq!(s.difficulty_state().streak(), 0);
    }

    #[test]
    fn two_wrong_demote_tier() {
        let mut s = QuizSession::new(
            SessionConfig::default()
                .with_skill(Skill::Addition)
                .with_difficulty(3)
                .with_problem_count(5),
        )
        .unwrap();

        s.submit_answer("-1").unwrap();
        s.advance().unwrap();
        s.submit_answer("-1").unwrap();
        assert_eq!(s.difficulty_state().difficulty().value(), 2);
        assert_eq!(s.difficulty_state().mistakes(), 0);
    }

    #[test]
    fn xp_non_decreasing_over_mixed_outcomes() {
        let mut s = session(6);
        let mut last_xp = 0;
        for i in 0..6 {
            if i % 2 == 0 {
                let ans = right_answer(&s);
                s.submit_answer(&ans).unwrap();
            } else {
                s.submit_answer("999999").unwrap();
            }
            assert!(s.xp() >= last_xp);
            last_xp = s.xp();
            s.advance().unwrap();
        }
        let result = s.result().unwrap();
        let sum: u32 = result.attempts.iter().map(|a| a.xp_awarded).sum();
        assert_eq!(result.score, sum);
    }

    #[test]
    fn adaptive_mode_tracks_tier_for_next_problem() {
        let mut s = QuizSession::new(
            SessionConfig::default()
                .with_skill(Skill::Addition)
                .with_mode(SessionMode::Adaptive)
                .with_problem_count(6)
                .with_seed(9),
        )
        .unwrap();

        // Promote to tier 2 with three correct answers, then check the
        // next generated problem carries the new tier.
        for _ in 0..3 {
            let ans = right_answer(&s);
            s.submit_answer(&ans).unwrap();
            s.advance().unwrap();
        }
        assert_eq!(s.difficulty_state().difficulty().value(), 2);
        assert_eq!(s.current_problem().unwrap().difficulty.value(), 2);
    }

    #[test]
    fn batch_mode_generates_all_upfront_at_start_tier() {
        let s = session(4);
        assert_eq!(s.problems.len(), 4);
        assert!(s.problems.iter().all(|p| p.difficulty.value() == 1));
    }

    #[test]
    fn mixed_sessions_draw_multiple_skills() {
        let s = QuizSession::new(
            SessionConfig::default()
                .with_mix(SkillMix::Mixed)
                .with_problem_count(30)
                .with_seed(4),
        )
        .unwrap();
        let distinct: std::collections::HashSet<_> =
            s.problems.iter().map(|p| p.skill).collect();
        assert!(distinct.len() > 1);
    }

    #[test]
    fn same_seed_reproduces_problem_sequence() {
        let a = session(5);
        let b = session(5);
        for (p, q) in a.problems.iter().zip(&b.problems) {
            assert!(p.same_content(q));
        }
    }

    #[test]
    fn whitespace_numeric_submission_accepted() {
        // Scenario: "  12 " against a correct answer of 12.
        let mut s = session(1);
        let ans = format!("  {} ", right_answer(&s));
        assert!(s.submit_answer(&ans).unwrap().correct);
    }
}
