//! Engine configuration.
//!
//! Options recognized by the allocation engine. The balance basis and
//! tolerance are explicit configuration rather than hard-coded formulas,
//! so callers can relax the load band and retry after an infeasible
//! solve.

use serde::{Deserialize, Serialize};

/// Configuration for one allocation solve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationConfig {
    /// Fraction of the expected load used as the symmetric band margin.
    /// Larger values trade balance for better compatibility scores and
    /// higher feasibility odds.
    pub balance_tolerance: f64,
    /// Quantity divided by the group count to obtain the expected load.
    pub balance_basis: BalanceBasis,
    /// Solver time limit in seconds, passed to backends that support one.
    pub time_limit_seconds: Option<f64>,
    /// Whether the availability bonus is added to the objective.
    pub tie_break_enabled: bool,
    /// Magnitude of the availability bonus. Must stay below the smallest
    /// gap between distinct compatibility scores so it only breaks ties.
    pub tie_break_weight: f64,
}

/// Basis for the per-group expected load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalanceBasis {
    /// `sum of required_count / group count`: each group carries an even
    /// share of the total assignment volume.
    TotalAssignments,
    /// `participant count / group count`: each group carries an even
    /// share of the participant headcount.
    ParticipantCount,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            balance_tolerance: 0.2,
            balance_basis: BalanceBasis::TotalAssignments,
            time_limit_seconds: None,
            tie_break_enabled: true,
            tie_break_weight: 0.5,
        }
    }
}

impl AllocationConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the balance tolerance fraction.
    pub fn with_balance_tolerance(mut self, tolerance: f64) -> Self {
        self.balance_tolerance = tolerance;
        self
    }

    /// Sets the balance basis.
    pub fn with_balance_basis(mut self, basis: BalanceBasis) -> Self {
        self.balance_basis = basis;
        self
    }

    /// Sets the solver time limit.
    pub fn with_time_limit(mut self, seconds: f64) -> Self {
        self.time_limit_seconds = Some(seconds);
        self
    }

    /// Enables or disables the availability tie-break bonus.
    pub fn with_tie_break(mut self, enabled: bool) -> Self {
        self.tie_break_enabled = enabled;
        self
    }

    /// Sets the tie-break bonus magnitude.
    pub fn with_tie_break_weight(mut self, weight: f64) -> Self {
        self.tie_break_weight = weight;
        self
    }
}
