//! Per-problem attempt records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The record of one submitted answer to one problem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attempt {
    /// The problem this attempt answered.
    pub problem_id: Uuid,
    /// The raw answer string as submitted (untrimmed).
    pub submitted: String,
    /// Whether the submission matched the correct answer.
    pub correct: bool,
    /// How many hints were revealed before answering.
    pub hints_used: u32,
    /// XP awarded for this attempt (0 when incorrect).
    pub xp_awarded: u32,
    /// Time from presentation to submission, if the caller tracked it.
    pub time_to_answer_ms: Option<u64>,
}
