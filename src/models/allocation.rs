//! Allocation result model.
//!
//! The solution to an allocation problem: for each participant, the
//! group codes it ends up assigned to. Pre-assigned codes come first in
//! their original slot order, followed by solver-chosen codes in group
//! table order; the entry count always equals the participant's
//! `required_count`.

use serde::{Deserialize, Serialize};

use super::Participant;

/// A complete allocation (solution to an allocation problem).
///
/// Entries appear in input row order, one per participant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AllocationResult {
    /// Per-participant assignments.
    pub assignments: Vec<ParticipantAssignment>,
}

/// The resolved group codes for one participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantAssignment {
    /// Participant ID.
    pub participant_id: String,
    /// Assigned group codes, pre-assignments first.
    pub projects: Vec<String>,
}

impl ParticipantAssignment {
    /// Creates a new assignment entry.
    pub fn new(participant_id: impl Into<String>, projects: Vec<String>) -> Self {
        Self {
            participant_id: participant_id.into(),
            projects,
        }
    }
}

impl AllocationResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an assignment entry.
    pub fn add(&mut self, assignment: ParticipantAssignment) {
        self.assignments.push(assignment);
    }

    /// Finds the entry for a given participant.
    pub fn for_participant(&self, participant_id: &str) -> Option<&ParticipantAssignment> {
        self.assignments
            .iter()
            .find(|a| a.participant_id == participant_id)
    }

    /// Number of participants assigned to a given project code.
    pub fn project_load(&self, code: &str) -> usize {
        self.assignments
            .iter()
            .filter(|a| a.projects.iter().any(|p| p == code))
            .count()
    }

    /// Total number of (participant, project) assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.iter().map(|a| a.projects.len()).sum()
    }

    /// Writes the resolved codes back into cloned input rows.
    ///
    /// Rewrites all assignment slot cells of each row from the entry
    /// (remaining slots are cleared, so a pre-assignment that sat in a
    /// later slot is not left behind as a stray duplicate); every other
    /// field and the row order are left untouched. Rows without a
    /// matching entry (none exist when the result came from the engine)
    /// are cloned as-is.
    pub fn merge_into(&self, participants: &[Participant]) -> Vec<Participant> {
        participants
            .iter()
            .map(|p| {
                let mut row = p.clone();
                if let Some(entry) = self.for_participant(&p.id) {
                    for (i, slot) in row.assigned.iter_mut().enumerate() {
                        *slot = entry.projects.get(i).cloned();
                    }
                }
                row
            })
            .collect()
    }
}
