//! Dataset normalization and input validation.
//!
//! Turns the two raw input tables into a dense, index-addressed model:
//! a skill matrix, a demand matrix, and per-row metadata. Detects:
//! - Duplicate participant IDs / project codes
//! - Negative or slot-exceeding `required_count`
//! - Pre-assignments referencing unknown project codes
//! - More pre-assignments than `required_count`
//! - Skill/demand vectors of inconsistent length
//!
//! All problems are collected and reported together rather than
//! stopping at the first.

use std::collections::HashMap;

use crate::models::{Participant, Project, ASSIGNMENT_SLOTS};

/// Normalization result.
pub type NormalizeResult = Result<NormalizedDataset, Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID or code.
    DuplicateId,
    /// A `required_count` cell is negative.
    NegativeRequiredCount,
    /// A `required_count` cell exceeds the number of assignment slots.
    RequiredCountExceedsSlots,
    /// A slot references a project code absent from the project table.
    UnknownProjectReference,
    /// A participant has more pre-assignments than `required_count`.
    PreAssignmentOverflow,
    /// A skill or demand vector has the wrong length.
    SkillLengthMismatch,
    /// The project table has no rows.
    EmptyProjectTable,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Dense, validated view of the input tables.
///
/// Owned by one solve; positional indices used here never leak into the
/// final result.
#[derive(Debug, Clone)]
pub struct NormalizedDataset {
    /// Skill matrix, one row per participant. Missing cells are 0.0.
    pub skills: Vec<Vec<f64>>,
    /// Demand matrix, one row per project. Missing cells are 0.0.
    pub demands: Vec<Vec<f64>>,
    /// Per-participant metadata, in input row order.
    pub participants: Vec<ParticipantMeta>,
    /// Per-project metadata, in input row order.
    pub projects: Vec<ProjectMeta>,
}

/// Normalized participant metadata.
#[derive(Debug, Clone)]
pub struct ParticipantMeta {
    /// Participant ID.
    pub id: String,
    /// Required number of assignments (validated: 0..=slots).
    pub required_count: usize,
    /// Availability flag, decoded from the raw categorical cell.
    pub available: bool,
    /// Pre-assigned project indices, in slot order.
    pub pre_assigned: Vec<usize>,
}

impl ParticipantMeta {
    /// Assignments still to be chosen by the solver.
    pub fn residual(&self) -> usize {
        self.required_count - self.pre_assigned.len()
    }
}

/// Normalized project metadata.
#[derive(Debug, Clone)]
pub struct ProjectMeta {
    /// Project ID.
    pub id: String,
    /// Display code, written into assignment slots.
    pub code: String,
}

impl NormalizedDataset {
    /// Number of participants.
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Number of projects.
    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    /// Sum of all participants' required counts.
    pub fn total_required(&self) -> usize {
        self.participants.iter().map(|p| p.required_count).sum()
    }
}

/// Decodes the binary categorical availability cell.
///
/// Unrecognized values (including blank) decode to unavailable.
fn decode_availability(cell: &str) -> bool {
    matches!(
        cell.trim().to_ascii_lowercase().as_str(),
        "yes" | "y" | "true" | "1" | "sim"
    )
}

/// Normalizes the two input tables into a dense dataset.
///
/// Checks:
/// 1. The project table is non-empty
/// 2. No duplicate project codes or participant IDs
/// 3. Demand and skill vectors all share the first project's length
/// 4. `0 <= required_count <= 2` per participant
/// 5. Every pre-assignment slot names a known project code
/// 6. Pre-assignment count never exceeds `required_count`
///
/// # Returns
/// The dense dataset, or every detected issue.
pub fn normalize(participants: &[Participant], projects: &[Project]) -> NormalizeResult {
    let mut errors = Vec::new();

    if projects.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProjectTable,
            "project table is empty",
        ));
        return Err(errors);
    }

    let vector_len = projects[0].demands.len();

    let mut code_index: HashMap<&str, usize> = HashMap::new();
    for (g, project) in projects.iter().enumerate() {
        if code_index.insert(project.code.as_str(), g).is_some() {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate project code: {}", project.code),
            ));
        }
        if project.demands.len() != vector_len {
            errors.push(ValidationError::new(
                ValidationErrorKind::SkillLengthMismatch,
                format!(
                    "Project '{}' has {} demand cells, expected {}",
                    project.code,
                    project.demands.len(),
                    vector_len
                ),
            ));
        }
    }

    let mut participant_ids = std::collections::HashSet::new();
    let mut metas = Vec::with_capacity(participants.len());
    let mut skills = Vec::with_capacity(participants.len());

    for participant in participants {
        if !participant_ids.insert(participant.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate participant ID: {}", participant.id),
            ));
        }

        if participant.skills.len() != vector_len {
            errors.push(ValidationError::new(
                ValidationErrorKind::SkillLengthMismatch,
                format!(
                    "Participant '{}' has {} skill cells, expected {}",
                    participant.id,
                    participant.skills.len(),
                    vector_len
                ),
            ));
        }

        if participant.required_count < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeRequiredCount,
                format!(
                    "Participant '{}' has negative required count {}",
                    participant.id, participant.required_count
                ),
            ));
        } else if participant.required_count as usize > ASSIGNMENT_SLOTS {
            errors.push(ValidationError::new(
                ValidationErrorKind::RequiredCountExceedsSlots,
                format!(
                    "Participant '{}' requires {} assignments but the table has {} slots",
                    participant.id, participant.required_count, ASSIGNMENT_SLOTS
                ),
            ));
        }

        let mut pre_assigned = Vec::new();
        for code in participant.pre_assignments() {
            match code_index.get(code) {
                Some(&g) => pre_assigned.push(g),
                None => errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownProjectReference,
                    format!(
                        "Participant '{}' is pre-assigned to unknown project '{}'",
                        participant.id, code
                    ),
                )),
            }
        }

        let required = participant.required_count.max(0) as usize;
        if pre_assigned.len() > required {
            errors.push(ValidationError::new(
                ValidationErrorKind::PreAssignmentOverflow,
                format!(
                    "Participant '{}' has {} pre-assignments but requires only {}",
                    participant.id,
                    pre_assigned.len(),
                    required
                ),
            ));
        }

        metas.push(ParticipantMeta {
            id: participant.id.clone(),
            required_count: required,
            available: decode_availability(&participant.availability),
            pre_assigned,
        });
        skills.push(
            participant
                .skills
                .iter()
                .map(|c| c.unwrap_or(0.0))
                .collect(),
        );
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let demands = projects
        .iter()
        .map(|p| p.demands.iter().map(|c| c.unwrap_or(0.0)).collect())
        .collect();
    let project_metas = projects
        .iter()
        .map(|p| ProjectMeta {
            id: p.id.clone(),
            code: p.code.clone(),
        })
        .collect();

    Ok(NormalizedDataset {
        skills,
        demands,
        participants: metas,
        projects: project_metas,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_projects() -> Vec<Project> {
        vec![
            Project::new("1", "P1").with_demands([1.0, 0.0]),
            Project::new("2", "P2").with_demands([0.0, 1.0]),
        ]
    }

    #[test]
    fn test_valid_input() {
        let participants = vec![
            Participant::new("S1")
                .with_required_count(1)
                .with_availability("yes")
                .with_skills([2.0, 0.0]),
            Participant::new("S2")
                .with_required_count(2)
                .with_availability("no")
                .with_skills([1.0, 1.0])
                .with_pre_assignment("P2"),
        ];

        let ds = normalize(&participants, &sample_projects()).unwrap();
        assert_eq!(ds.participant_count(), 2);
        assert_eq!(ds.project_count(), 2);
        assert_eq!(ds.total_required(), 3);
        assert!(ds.participants[0].available);
        assert!(!ds.participants[1].available);
        assert_eq!(ds.participants[1].pre_assigned, vec![1]);
        assert_eq!(ds.participants[1].residual(), 1);
    }

    #[test]
    fn test_missing_cells_default_to_zero() {
        let participants = vec![Participant::new("S1")
            .with_required_count(1)
            .with_skill_cells(vec![Some(3.0), None])];
        let projects = vec![
            Project::new("1", "P1").with_demand_cells(vec![None, Some(2.0)]),
            Project::new("2", "P2").with_demands([1.0, 1.0]),
        ];

        let ds = normalize(&participants, &projects).unwrap();
        assert_eq!(ds.skills[0], vec![3.0, 0.0]);
        assert_eq!(ds.demands[0], vec![0.0, 2.0]);
    }

    #[test]
    fn test_availability_decoding() {
        assert!(decode_availability("yes"));
        assert!(decode_availability(" Sim "));
        assert!(decode_availability("1"));
        assert!(!decode_availability("no"));
        assert!(!decode_availability(""));
        assert!(!decode_availability("maybe"));
    }

    #[test]
    fn test_unknown_project_reference() {
        let participants = vec![Participant::new("S1")
            .with_required_count(1)
            .with_skills([1.0, 0.0])
            .with_pre_assignment("P9")];

        let errors = normalize(&participants, &sample_projects()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownProjectReference));
    }

    #[test]
    fn test_pre_assignment_overflow() {
        let participants = vec![Participant::new("S1")
            .with_required_count(1)
            .with_skills([1.0, 0.0])
            .with_pre_assignment("P1")
            .with_pre_assignment("P2")];

        let errors = normalize(&participants, &sample_projects()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::PreAssignmentOverflow));
    }

    #[test]
    fn test_duplicate_code_in_both_slots() {
        // The same code twice is legal and consumes both units of the
        // required count.
        let participants = vec![Participant::new("S1")
            .with_required_count(2)
            .with_skills([1.0, 1.0])
            .with_pre_assignment("P1")
            .with_pre_assignment("P1")];

        let ds = normalize(&participants, &sample_projects()).unwrap();
        assert_eq!(ds.participants[0].pre_assigned, vec![0, 0]);
        assert_eq!(ds.participants[0].residual(), 0);
    }

    #[test]
    fn test_negative_required_count() {
        let participants = vec![Participant::new("S1")
            .with_required_count(-1)
            .with_skills([1.0, 0.0])];

        let errors = normalize(&participants, &sample_projects()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeRequiredCount));
    }

    #[test]
    fn test_required_count_exceeds_slots() {
        let participants = vec![Participant::new("S1")
            .with_required_count(3)
            .with_skills([1.0, 0.0])];

        let errors = normalize(&participants, &sample_projects()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::RequiredCountExceedsSlots));
    }

    #[test]
    fn test_duplicate_ids() {
        let participants = vec![
            Participant::new("S1").with_required_count(1).with_skills([1.0, 0.0]),
            Participant::new("S1").with_required_count(1).with_skills([0.0, 1.0]),
        ];
        let mut projects = sample_projects();
        projects.push(Project::new("3", "P1").with_demands([1.0, 1.0]));

        let errors = normalize(&participants, &projects).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::DuplicateId)
                .count(),
            2
        );
    }

    #[test]
    fn test_length_mismatch() {
        let participants = vec![Participant::new("S1")
            .with_required_count(1)
            .with_skills([1.0])];

        let errors = normalize(&participants, &sample_projects()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::SkillLengthMismatch));
    }

    #[test]
    fn test_empty_project_table() {
        let errors = normalize(&[], &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyProjectTable));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let participants = vec![
            Participant::new("S1").with_required_count(-1).with_skills([1.0, 0.0]),
            Participant::new("S2")
                .with_required_count(1)
                .with_skills([1.0, 0.0])
                .with_pre_assignment("P9"),
        ];

        let errors = normalize(&participants, &sample_projects()).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
