//! Result extraction.
//!
//! Reads the solved decision grid back into group codes per participant.
//! Pre-assignments come first, in their original slot order, followed by
//! solver-chosen projects in project-table order; by construction the
//! entry count equals the participant's `required_count` exactly.

use crate::ilp::SolvedAssignments;
use crate::models::{AllocationResult, ParticipantAssignment};
use crate::normalize::NormalizedDataset;

/// Builds the final allocation from the solver output.
pub fn extract(dataset: &NormalizedDataset, solved: &SolvedAssignments) -> AllocationResult {
    let mut result = AllocationResult::new();

    for (p, meta) in dataset.participants.iter().enumerate() {
        let mut projects: Vec<String> = meta
            .pre_assigned
            .iter()
            .map(|&g| dataset.projects[g].code.clone())
            .collect();
        projects.extend(
            solved.chosen[p]
                .iter()
                .map(|&g| dataset.projects[g].code.clone()),
        );

        debug_assert_eq!(projects.len(), meta.required_count);
        result.add(ParticipantAssignment::new(meta.id.clone(), projects));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Participant, Project};
    use crate::normalize::normalize;

    #[test]
    fn test_pre_assignments_come_first() {
        let participants = vec![
            Participant::new("S1")
                .with_required_count(2)
                .with_skills([1.0, 1.0, 1.0])
                .with_pre_assignment("P3"),
            Participant::new("S2").with_required_count(1).with_skills([1.0, 1.0, 1.0]),
        ];
        let projects = vec![
            Project::new("1", "P1").with_demands([1.0, 0.0, 0.0]),
            Project::new("2", "P2").with_demands([0.0, 1.0, 0.0]),
            Project::new("3", "P3").with_demands([0.0, 0.0, 1.0]),
        ];
        let dataset = normalize(&participants, &projects).unwrap();

        let solved = SolvedAssignments {
            chosen: vec![vec![0], vec![1]],
        };
        let result = extract(&dataset, &solved);

        // S1: pre-assigned P3 first, then solver-chosen P1.
        assert_eq!(
            result.for_participant("S1").unwrap().projects,
            vec!["P3", "P1"]
        );
        assert_eq!(result.for_participant("S2").unwrap().projects, vec!["P2"]);
    }

    #[test]
    fn test_row_order_is_preserved() {
        let participants = vec![
            Participant::new("B").with_required_count(0).with_skills([1.0]),
            Participant::new("A").with_required_count(0).with_skills([1.0]),
        ];
        let projects = vec![Project::new("1", "P1").with_demands([1.0])];
        let dataset = normalize(&participants, &projects).unwrap();

        let solved = SolvedAssignments {
            chosen: vec![vec![], vec![]],
        };
        let result = extract(&dataset, &solved);

        let ids: Vec<&str> = result
            .assignments
            .iter()
            .map(|a| a.participant_id.as_str())
            .collect();
        assert_eq!(ids, vec!["B", "A"]);
    }
}
