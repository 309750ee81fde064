//! Quiz session engine for MathTrek.
//!
//! `QuizSession` runs a finite sequence of generated problems as an
//! event-driven state machine: the caller submits answers, requests hints,
//! and advances past feedback; the session scores each attempt, adapts the
//! difficulty tier to the learner's streak/mistake pattern, and emits a
//! [`SessionResult`] on completion. A separate [`achievements`] module
//! evaluates badge unlocks over cumulative statistics.
//!
//! The engine performs no I/O and owns no timers: the feedback-display
//! delay between problems is the presentation layer's concern.

pub mod achievements;
pub mod adapter;
pub mod config;
pub mod error;
pub mod result;
pub mod score;
pub mod session;
pub mod stats;

pub use achievements::{
    ACHIEVEMENTS, Achievement, AchievementCategory, AchievementLedger, Rarity, UnlockCondition,
    evaluate,
};
pub use adapter::{Adjustment, DifficultyState};
pub use config::{SessionConfig, SessionMode};
pub use error::SessionError;
pub use result::SessionResult;
pub use score::score_answer;
pub use session::{Advance, Evaluation, Phase, QuizSession};
pub use stats::CumulativeStats;
