//! Allocation domain models.
//!
//! Core data types for representing allocation problems and solutions:
//! raw input rows ([`Participant`], [`Project`]) and the solved
//! assignment ([`AllocationResult`]). Input rows mirror the two tables
//! the engine is fed; cells stay raw here and are normalized in
//! [`crate::normalize`].

mod allocation;
mod participant;
mod project;

pub use allocation::{AllocationResult, ParticipantAssignment};
pub use participant::{Participant, ASSIGNMENT_SLOTS};
pub use project::Project;
