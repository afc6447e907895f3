//! Participant model.
//!
//! A participant is one row of the input table: identity, display name,
//! the number of groups the participant must join, a raw availability
//! cell, a block of skill cells, and two assignment slots that may carry
//! pre-assigned group codes.
//!
//! Cells are kept raw here (`Option<f64>` for numbers, `String` for the
//! availability column); normalization into a dense model happens in
//! [`crate::normalize`].

use serde::{Deserialize, Serialize};

/// Number of assignment slots in the participant table.
///
/// The result table carries exactly two "assigned group" columns, so a
/// participant can hold at most two assignments end to end.
pub const ASSIGNMENT_SLOTS: usize = 2;

/// A participant to be allocated to groups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    /// Unique participant identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Number of groups this participant must join (validated: 0..=2).
    pub required_count: i32,
    /// Raw availability cell (binary categorical, e.g. "yes"/"no").
    pub availability: String,
    /// Raw skill cells, positionally aligned with the group demand columns.
    /// `None` represents a missing cell.
    pub skills: Vec<Option<f64>>,
    /// Assignment slot cells. `None` or blank means unassigned; a non-blank
    /// value is a pre-assigned group code the solver must preserve.
    pub assigned: [Option<String>; ASSIGNMENT_SLOTS],
}

impl Participant {
    /// Creates a new participant with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            required_count: 0,
            availability: String::new(),
            skills: Vec::new(),
            assigned: [None, None],
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the number of required group assignments.
    pub fn with_required_count(mut self, count: i32) -> Self {
        self.required_count = count;
        self
    }

    /// Sets the raw availability cell.
    pub fn with_availability(mut self, availability: impl Into<String>) -> Self {
        self.availability = availability.into();
        self
    }

    /// Sets the skill vector from fully populated cells.
    pub fn with_skills(mut self, skills: impl IntoIterator<Item = f64>) -> Self {
        self.skills = skills.into_iter().map(Some).collect();
        self
    }

    /// Sets the skill vector from raw cells (`None` = missing).
    pub fn with_skill_cells(mut self, cells: Vec<Option<f64>>) -> Self {
        self.skills = cells;
        self
    }

    /// Writes a pre-assigned group code into the first empty slot.
    ///
    /// Further calls beyond [`ASSIGNMENT_SLOTS`] are ignored; the input
    /// table has no room for them.
    pub fn with_pre_assignment(mut self, code: impl Into<String>) -> Self {
        let code = code.into();
        if let Some(slot) = self.assigned.iter_mut().find(|s| s.is_none()) {
            *slot = Some(code);
        }
        self
    }

    /// Returns the non-blank pre-assignment codes in slot order.
    pub fn pre_assignments(&self) -> Vec<&str> {
        self.assigned
            .iter()
            .filter_map(|s| s.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_builder() {
        let p = Participant::new("S1")
            .with_name("Alice")
            .with_required_count(2)
            .with_availability("yes")
            .with_skills([3.0, 0.0, 5.0])
            .with_pre_assignment("P1");

        assert_eq!(p.id, "S1");
        assert_eq!(p.name, "Alice");
        assert_eq!(p.required_count, 2);
        assert_eq!(p.skills, vec![Some(3.0), Some(0.0), Some(5.0)]);
        assert_eq!(p.assigned, [Some("P1".to_string()), None]);
    }

    #[test]
    fn test_pre_assignment_fills_slots_in_order() {
        let p = Participant::new("S1")
            .with_pre_assignment("P1")
            .with_pre_assignment("P2")
            .with_pre_assignment("P3"); // no third slot

        assert_eq!(p.pre_assignments(), vec!["P1", "P2"]);
    }

    #[test]
    fn test_blank_slots_are_not_pre_assignments() {
        let mut p = Participant::new("S1");
        p.assigned = [Some("  ".to_string()), Some("P2".to_string())];
        assert_eq!(p.pre_assignments(), vec!["P2"]);
    }

    #[test]
    fn test_skill_cells_keep_missing_values() {
        let p = Participant::new("S1").with_skill_cells(vec![Some(1.0), None]);
        assert_eq!(p.skills, vec![Some(1.0), None]);
    }

    #[test]
    fn test_serde_round_trip() {
        let p = Participant::new("S1")
            .with_name("Alice")
            .with_required_count(2)
            .with_availability("yes")
            .with_skill_cells(vec![Some(3.0), None])
            .with_pre_assignment("P1");

        let json = serde_json::to_string(&p).unwrap();
        let back: Participant = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, p.id);
        assert_eq!(back.required_count, p.required_count);
        assert_eq!(back.skills, p.skills);
        assert_eq!(back.assigned, p.assigned);
    }
}
