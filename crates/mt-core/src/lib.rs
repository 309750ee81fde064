//! Core types for MathTrek: skills, difficulty tiers, problems, answers,
//! and attempt records.
//!
//! This crate holds the data model shared by the problem generator and the
//! quiz session engine. Everything here is plain data: no I/O, no
//! randomness, no session state.

pub mod answer;
pub mod attempt;
pub mod difficulty;
pub mod problem;
pub mod skill;

pub use answer::{Answer, DECIMAL_TOLERANCE};
pub use attempt::Attempt;
pub use difficulty::Difficulty;
pub use problem::Problem;
pub use skill::{Skill, SkillParseError};
