//! Procedural math problem generation for MathTrek.
//!
//! Each skill has five difficulty tiers of generation rules controlling
//! operand ranges and item shape. The correct answer is always computed
//! from the generated operands, never hard-coded. All generation draws
//! from a caller-supplied [`rand::rngs::StdRng`], so a fixed seed yields
//! a reproducible problem sequence.

pub mod arithmetic;
pub mod decimals;
pub mod fractions;
pub mod generator;
pub mod word;

pub use generator::{SkillMix, generate, generate_one};
