//! Skill-based allocation engine.
//!
//! Assigns participants to capacity-constrained groups ("projects") so
//! that the summed skill compatibility is maximal, while honoring each
//! participant's required number of assignments, preserving
//! pre-assignments, excluding zero-affinity pairs, and keeping group
//! sizes inside a configurable band around the expected load. The
//! problem is formulated as an integer linear program and solved to
//! optimality through `good_lp`.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Participant`, `Project`,
//!   `AllocationResult`
//! - **`normalize`**: Raw-table normalization and input validation
//! - **`compat`**: Dense participant × project compatibility scores
//! - **`ilp`**: Decision grid, fixing rules, constraint/objective
//!   construction, solver adapter
//! - **`extract`**: Solution read-back into group codes
//! - **`engine`**: One-call blocking solve
//! - **`config`**: Balance band, tie-break, and solver options
//! - **`error`**: Failure taxonomy
//!
//! # Pipeline
//!
//! normalize → compatibility matrix → model build → solve → extract.
//! Each stage consumes the previous stage's output; nothing is shared
//! between solves.
//!
//! # References
//!
//! - Burkard, Dell'Amico & Martello (2012), "Assignment Problems"
//! - Wolsey (2020), "Integer Programming"

pub mod compat;
pub mod config;
pub mod engine;
pub mod error;
pub mod extract;
pub mod ilp;
pub mod models;
pub mod normalize;

pub use compat::CompatibilityMatrix;
pub use config::{AllocationConfig, BalanceBasis};
pub use engine::{AllocationRequest, Allocator};
pub use error::AllocationError;
pub use models::{AllocationResult, Participant, ParticipantAssignment, Project};
pub use normalize::{ValidationError, ValidationErrorKind};
