//! Solver adapter.
//!
//! Hands a built model to the `good_lp` backend and maps the outcome
//! onto the engine's error taxonomy. Only an optimal solution proceeds;
//! infeasible, unbounded, and backend failures are all fatal for the
//! solve, and no partial assignment ever leaks out.

use good_lp::{default_solver, ResolutionError, Solution, SolverModel};
use tracing::{debug, warn};

use super::grid::Cell;
use super::model::BuiltModel;
use crate::config::AllocationConfig;
use crate::error::AllocationError;

/// Solver-chosen project indices, per participant, in project order.
///
/// Pre-assigned pairs never appear here; they were fixed before the
/// solver ran and are merged back in by the extractor.
#[derive(Debug, Clone)]
pub struct SolvedAssignments {
    /// Chosen project indices per participant row.
    pub chosen: Vec<Vec<usize>>,
}

/// Solves a built model to optimality.
///
/// A model whose grid holds no free variables skips the backend
/// entirely: every decision was fixed by pre-assignments and the column
/// bands were already checked during the build.
pub fn solve_model(
    model: BuiltModel,
    config: &AllocationConfig,
) -> Result<SolvedAssignments, AllocationError> {
    let BuiltModel {
        vars,
        grid,
        objective,
        constraints,
    } = model;

    if let Some(limit) = config.time_limit_seconds {
        // microlp exposes no time-limit hook; say so rather than
        // silently dropping the option.
        warn!(
            limit_seconds = limit,
            "time limit requested but the pure-Rust backend does not support one; ignoring"
        );
    }

    let participants = grid.participant_count();
    let projects = grid.project_count();

    if grid.free_count() == 0 {
        debug!("model fully fixed by pre-assignments; skipping solver");
        return Ok(SolvedAssignments {
            chosen: vec![Vec::new(); participants],
        });
    }

    let mut problem = vars.maximise(objective).using(default_solver);
    for c in constraints {
        problem = problem.with(c);
    }

    let solution = problem.solve().map_err(|e| match e {
        ResolutionError::Infeasible => AllocationError::InfeasibleModel {
            detail: "no assignment satisfies the load band and assignment-count constraints"
                .into(),
        },
        ResolutionError::Unbounded => AllocationError::Unbounded,
        other => AllocationError::Solver(other.to_string()),
    })?;

    let mut chosen = vec![Vec::new(); participants];
    for (p, row) in chosen.iter_mut().enumerate() {
        for g in 0..projects {
            if let Cell::Free(v) = grid.cell(p, g) {
                if solution.value(v) >= 0.5 {
                    row.push(g);
                }
            }
        }
    }

    Ok(SolvedAssignments { chosen })
}
