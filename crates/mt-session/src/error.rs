//! Error types for the quiz session engine.

use thiserror::Error;

use crate::session::Phase;

/// Errors that can occur while driving a quiz session.
///
/// All of these leave the session state unchanged; the engine remains
/// usable after any rejected operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// An event arrived in a phase that does not accept it.
    #[error("invalid state: expected {expected}, session is {found}")]
    InvalidState {
        /// The phase the operation is valid in.
        expected: Phase,
        /// The phase the session was actually in.
        found: Phase,
    },

    /// The submitted answer was empty or whitespace-only.
    #[error("submitted answer is empty")]
    EmptyAnswer,

    /// Every hint for the current problem has already been revealed.
    #[error("no more hints for this problem")]
    NoMoreHints,

    /// The session is complete; no further events are accepted.
    #[error("session is complete")]
    SessionComplete,

    /// The session was configured with a problem count of zero.
    #[error("session must contain at least one problem")]
    NoProblems,
}
