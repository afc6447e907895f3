//! Allocation model builder.
//!
//! Lowers the normalized dataset and compatibility matrix into an ILP:
//! one binary variable per undecided (participant, project) pair, an
//! assignment-count equality per participant, a load band per project,
//! and a maximized compatibility objective with an optional availability
//! tie-break bonus.

use good_lp::{variable, Constraint, Expression, ProblemVariables};
use tracing::debug;

use super::grid::{Cell, VariableGrid};
use super::rules::{FixingContext, FixingRule, PreAllocationRule, ZeroCompatibilityRule};
use crate::compat::CompatibilityMatrix;
use crate::config::{AllocationConfig, BalanceBasis};
use crate::error::AllocationError;
use crate::normalize::NormalizedDataset;

/// A fully built ILP, ready for the solver adapter.
pub struct BuiltModel {
    /// Variable pool (moved into the solver on solve).
    pub vars: ProblemVariables,
    /// Decision cells, kept for reading the solution back.
    pub grid: VariableGrid,
    /// Maximization objective over the free cells.
    pub objective: Expression,
    /// Row and column constraints.
    pub constraints: Vec<Constraint>,
}

/// Builds the ILP for one allocation solve.
///
/// Cell fixing is delegated to an ordered list of [`FixingRule`]
/// strategies; by default pre-allocations first, then zero-affinity
/// exclusion.
pub struct AllocationModelBuilder<'a> {
    dataset: &'a NormalizedDataset,
    matrix: &'a CompatibilityMatrix,
    config: &'a AllocationConfig,
    rules: Vec<Box<dyn FixingRule>>,
}

impl<'a> AllocationModelBuilder<'a> {
    /// Creates a builder with the default fixing rules.
    pub fn new(
        dataset: &'a NormalizedDataset,
        matrix: &'a CompatibilityMatrix,
        config: &'a AllocationConfig,
    ) -> Self {
        Self {
            dataset,
            matrix,
            config,
            rules: vec![Box::new(PreAllocationRule), Box::new(ZeroCompatibilityRule)],
        }
    }

    /// Replaces the fixing rules. Order is significant: the first rule
    /// returning a decision wins.
    pub fn with_rules(mut self, rules: Vec<Box<dyn FixingRule>>) -> Self {
        self.rules = rules;
        self
    }

    /// Builds the variable grid, constraints, and objective.
    ///
    /// Fails with [`AllocationError::InfeasibleModel`] when the grid is
    /// structurally unsatisfiable before the solver even runs: a
    /// participant with fewer candidate projects than residual demand,
    /// or a fully fixed project column outside its load band.
    pub fn build(&self) -> Result<BuiltModel, AllocationError> {
        let participants = self.dataset.participant_count();
        let projects = self.dataset.project_count();
        let ctx = FixingContext {
            dataset: self.dataset,
            matrix: self.matrix,
        };

        let mut vars = ProblemVariables::new();
        let mut cells = Vec::with_capacity(participants * projects);
        for p in 0..participants {
            for g in 0..projects {
                let decision = self.rules.iter().find_map(|r| r.fix(&ctx, p, g));
                cells.push(match decision {
                    Some(true) => Cell::FixedOne,
                    Some(false) => Cell::FixedZero,
                    None => Cell::Free(vars.add(variable().binary().name(format!("x_{p}_{g}")))),
                });
            }
        }
        let grid = VariableGrid::from_cells(cells, participants, projects);
        debug!(
            free = grid.free_count(),
            total = participants * projects,
            "decision grid built"
        );

        // Structural check: every row must have room for its residual.
        for (p, meta) in self.dataset.participants.iter().enumerate() {
            let free = grid.free_in_row(p);
            if free < meta.residual() {
                return Err(AllocationError::InfeasibleModel {
                    detail: format!(
                        "zero-affinity exclusion leaves participant '{}' with {} candidate \
                         project(s) for {} remaining assignment(s)",
                        meta.id,
                        free,
                        meta.residual()
                    ),
                });
            }
        }

        let mut constraints = Vec::new();

        // Residual assignment count per participant.
        for (p, meta) in self.dataset.participants.iter().enumerate() {
            if meta.residual() == 0 {
                continue; // row already fully fixed
            }
            let mut row = Expression::default();
            for g in 0..projects {
                if let Cell::Free(v) = grid.cell(p, g) {
                    row.add_mul(1.0, v);
                }
            }
            constraints.push(row.eq(meta.residual() as f64));
        }

        // Load band per project, with pre-assigned members folded in as
        // constants.
        let (lo, hi) = self.load_bounds();
        for (g, meta) in self.dataset.projects.iter().enumerate() {
            let fixed = grid.fixed_ones_in_column(g) as f64;
            let mut col = Expression::default();
            let mut free = 0usize;
            for p in 0..participants {
                if let Cell::Free(v) = grid.cell(p, g) {
                    col.add_mul(1.0, v);
                    free += 1;
                }
            }
            if free == 0 {
                if fixed < lo || fixed > hi {
                    return Err(AllocationError::InfeasibleModel {
                        detail: format!(
                            "project '{}' is fully fixed at {} member(s), outside the load \
                             band [{:.2}, {:.2}]",
                            meta.code, fixed, lo, hi
                        ),
                    });
                }
                continue;
            }
            constraints.push(col.clone().geq(lo - fixed));
            constraints.push(col.leq(hi - fixed));
        }

        let objective = self.build_objective(&grid);

        Ok(BuiltModel {
            vars,
            grid,
            objective,
            constraints,
        })
    }

    /// Composes the maximization objective over the free cells.
    ///
    /// Fixed cells contribute a constant and are omitted; they cannot
    /// change the argmax.
    fn build_objective(&self, grid: &VariableGrid) -> Expression {
        let mut objective = Expression::default();
        for (p, meta) in self.dataset.participants.iter().enumerate() {
            let bonus = if self.config.tie_break_enabled && meta.available {
                self.config.tie_break_weight
            } else {
                0.0
            };
            for g in 0..grid.project_count() {
                if let Cell::Free(v) = grid.cell(p, g) {
                    objective.add_mul(self.matrix.score(p, g) + bonus, v);
                }
            }
        }
        objective
    }

    /// Symmetric load band around the expected per-project load.
    ///
    /// The lower bound clamps to at least one member, except when there
    /// are fewer assignments than projects and an empty project is
    /// unavoidable.
    fn load_bounds(&self) -> (f64, f64) {
        let groups = self.dataset.project_count() as f64;
        let basis = match self.config.balance_basis {
            BalanceBasis::TotalAssignments => self.dataset.total_required() as f64,
            BalanceBasis::ParticipantCount => self.dataset.participant_count() as f64,
        };
        let expected = basis / groups;
        let margin = self.config.balance_tolerance * expected;
        // With fewer assignments than projects an empty project is
        // unavoidable; no lower bound is imposed then.
        let lo = if basis >= groups {
            (expected - margin).max(1.0)
        } else {
            0.0
        };
        (lo, expected + margin)
    }
}
