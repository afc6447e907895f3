//! Allocation engine front door.
//!
//! One solve is one blocking call: normalize, score, build the ILP,
//! solve to optimality, extract. Either a complete constraint-satisfying
//! result comes back or an error does; nothing is written on failure and
//! no state survives between calls.

use tracing::{debug, info};

use crate::compat::CompatibilityMatrix;
use crate::config::AllocationConfig;
use crate::error::AllocationError;
use crate::extract::extract;
use crate::ilp::{solve_model, AllocationModelBuilder};
use crate::models::{AllocationResult, Participant, Project};
use crate::normalize::normalize;

/// Input container for one allocation solve.
#[derive(Debug, Clone)]
pub struct AllocationRequest {
    /// Participant table rows.
    pub participants: Vec<Participant>,
    /// Project table rows.
    pub projects: Vec<Project>,
    /// Engine configuration.
    pub config: AllocationConfig,
}

impl AllocationRequest {
    /// Creates a request with the default configuration.
    pub fn new(participants: Vec<Participant>, projects: Vec<Project>) -> Self {
        Self {
            participants,
            projects,
            config: AllocationConfig::default(),
        }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: AllocationConfig) -> Self {
        self.config = config;
        self
    }
}

/// Skill-compatibility allocation engine.
///
/// Maximizes the summed compatibility score over all assignments while
/// honoring required counts, pre-assignments, zero-affinity exclusion,
/// and the per-project load band.
///
/// # Example
///
/// ```
/// use team_alloc::engine::{AllocationRequest, Allocator};
/// use team_alloc::models::{Participant, Project};
///
/// let participants = vec![
///     Participant::new("S1").with_required_count(1).with_skills([2.0, 0.0]),
///     Participant::new("S2").with_required_count(1).with_skills([0.0, 3.0]),
/// ];
/// let projects = vec![
///     Project::new("1", "P1").with_demands([1.0, 0.0]),
///     Project::new("2", "P2").with_demands([0.0, 1.0]),
/// ];
///
/// let request = AllocationRequest::new(participants, projects);
/// let result = Allocator::new().solve(&request)?;
/// assert_eq!(result.for_participant("S1").unwrap().projects, vec!["P1"]);
/// # Ok::<(), team_alloc::error::AllocationError>(())
/// ```
#[derive(Debug, Default)]
pub struct Allocator;

impl Allocator {
    /// Creates an allocator.
    pub fn new() -> Self {
        Self
    }

    /// Runs one complete solve.
    ///
    /// The compatibility matrix and decision grid are scoped to this
    /// call and discarded afterwards; concurrent solves on independent
    /// requests never share state.
    pub fn solve(&self, request: &AllocationRequest) -> Result<AllocationResult, AllocationError> {
        let dataset = normalize(&request.participants, &request.projects)
            .map_err(AllocationError::Validation)?;
        info!(
            participants = dataset.participant_count(),
            projects = dataset.project_count(),
            total_required = dataset.total_required(),
            "solving allocation"
        );

        let matrix = CompatibilityMatrix::compute(&dataset);
        let model = AllocationModelBuilder::new(&dataset, &matrix, &request.config).build()?;
        let solved = solve_model(model, &request.config)?;
        let result = extract(&dataset, &solved);

        for project in &dataset.projects {
            debug!(
                project = %project.code,
                load = result.project_load(&project.code),
                "allocated members"
            );
        }

        Ok(result)
    }
}
