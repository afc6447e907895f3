//! Compatibility matrix.
//!
//! Dense participant × project score matrix. The score for a pair is the
//! inner product of the participant's skill vector and the project's
//! demand vector, with no normalization. Computed once per solve and
//! shared by the objective and the zero-affinity exclusion rule.

use crate::normalize::NormalizedDataset;

/// Dense row-major compatibility scores.
#[derive(Debug, Clone)]
pub struct CompatibilityMatrix {
    scores: Vec<f64>,
    participants: usize,
    projects: usize,
}

impl CompatibilityMatrix {
    /// Computes the matrix from a normalized dataset.
    pub fn compute(dataset: &NormalizedDataset) -> Self {
        let participants = dataset.participant_count();
        let projects = dataset.project_count();
        let mut scores = Vec::with_capacity(participants * projects);

        for skill in &dataset.skills {
            for demand in &dataset.demands {
                scores.push(dot(skill, demand));
            }
        }

        Self {
            scores,
            participants,
            projects,
        }
    }

    /// Score for a (participant, project) pair.
    #[inline]
    pub fn score(&self, participant: usize, project: usize) -> f64 {
        self.scores[participant * self.projects + project]
    }

    /// Scores for one participant across all projects.
    pub fn row(&self, participant: usize) -> &[f64] {
        let start = participant * self.projects;
        &self.scores[start..start + self.projects]
    }

    /// Number of participant rows.
    pub fn participant_count(&self) -> usize {
        self.participants
    }

    /// Number of project columns.
    pub fn project_count(&self) -> usize {
        self.projects
    }
}

#[inline]
fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Participant, Project};
    use crate::normalize::normalize;

    fn sample_dataset() -> NormalizedDataset {
        let participants = vec![
            Participant::new("S1").with_required_count(1).with_skills([1.0, 2.0]),
            Participant::new("S2").with_required_count(1).with_skills([3.0, 0.0]),
        ];
        let projects = vec![
            Project::new("1", "P1").with_demands([2.0, 1.0]),
            Project::new("2", "P2").with_demands([0.0, 4.0]),
        ];
        normalize(&participants, &projects).unwrap()
    }

    #[test]
    fn test_inner_product_scores() {
        let m = CompatibilityMatrix::compute(&sample_dataset());
        assert_eq!(m.participant_count(), 2);
        assert_eq!(m.project_count(), 2);
        assert!((m.score(0, 0) - 4.0).abs() < 1e-10); // 1*2 + 2*1
        assert!((m.score(0, 1) - 8.0).abs() < 1e-10); // 1*0 + 2*4
        assert!((m.score(1, 0) - 6.0).abs() < 1e-10); // 3*2 + 0*1
        assert!((m.score(1, 1) - 0.0).abs() < 1e-10); // 3*0 + 0*4
    }

    #[test]
    fn test_row_access() {
        let m = CompatibilityMatrix::compute(&sample_dataset());
        assert_eq!(m.row(1), &[6.0, 0.0]);
    }
}
