//! Allocation error taxonomy.
//!
//! Three failure classes, none of which is retried or relaxed by the
//! engine itself: malformed input, a constraint set with no satisfying
//! assignment, and backend solver failure. The engine never performs a
//! partial write on any of these paths.

use thiserror::Error;

use crate::normalize::ValidationError;

/// A fatal allocation failure.
#[derive(Debug, Error)]
pub enum AllocationError {
    /// Malformed or inconsistent input, detected before model
    /// construction. Carries every problem found, not just the first.
    #[error("input validation failed with {} error(s): {}", .0.len(), .0.iter().map(|e| e.message.as_str()).collect::<Vec<_>>().join("; "))]
    Validation(Vec<ValidationError>),

    /// The constraints admit no satisfying assignment. Relaxing the
    /// configuration (typically `balance_tolerance`) and re-solving is
    /// the caller's decision; the engine never auto-relaxes.
    #[error("no assignment satisfies the model constraints: {detail}")]
    InfeasibleModel {
        /// Which constraint class triggered, where cheaply known.
        detail: String,
    },

    /// The objective is unbounded. Cannot happen with a well-formed
    /// binary model; reported rather than masked if the backend says so.
    #[error("solver reported an unbounded objective")]
    Unbounded,

    /// Backend failure (timeout, numerical trouble). Fatal for this
    /// solve; a best-effort non-optimal assignment is never returned.
    #[error("solver failure: {0}")]
    Solver(String),
}
