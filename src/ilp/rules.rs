//! Cell-fixing strategies.
//!
//! Before any solver variable is created, an ordered list of fixing
//! rules gets the chance to pin a (participant, project) pair to a
//! constant. The first rule that returns a decision wins, so rule order
//! is a policy: pre-allocations run first and are preserved verbatim
//! even when a later rule would have excluded the pair.

use crate::compat::CompatibilityMatrix;
use crate::normalize::NormalizedDataset;

/// Read-only view handed to fixing rules.
pub struct FixingContext<'a> {
    /// Normalized input tables.
    pub dataset: &'a NormalizedDataset,
    /// Compatibility scores for this solve.
    pub matrix: &'a CompatibilityMatrix,
}

/// A strategy that may pin a decision cell to a constant.
pub trait FixingRule {
    /// Rule name, for diagnostics.
    fn name(&self) -> &'static str;

    /// Returns `Some(true)` to force the assignment, `Some(false)` to
    /// forbid it, or `None` to leave the pair free.
    fn fix(&self, ctx: &FixingContext<'_>, participant: usize, project: usize) -> Option<bool>;
}

/// Pins pre-assigned pairs to 1 and exhausted rows to 0.
///
/// A participant whose pre-assignments already cover `required_count`
/// has no residual demand, so every other pair in its row is forbidden
/// rather than left to the solver.
pub struct PreAllocationRule;

impl FixingRule for PreAllocationRule {
    fn name(&self) -> &'static str {
        "pre_allocation"
    }

    fn fix(&self, ctx: &FixingContext<'_>, participant: usize, project: usize) -> Option<bool> {
        let meta = &ctx.dataset.participants[participant];
        if meta.pre_assigned.contains(&project) {
            Some(true)
        } else if meta.residual() == 0 {
            Some(false)
        } else {
            None
        }
    }
}

/// Forbids pairs with no measured affinity.
///
/// A participant is never assigned to a project it has a zero
/// compatibility score with, even when that would satisfy the counts.
/// The resulting infeasibility, if any, is reported rather than relaxed.
pub struct ZeroCompatibilityRule;

impl FixingRule for ZeroCompatibilityRule {
    fn name(&self) -> &'static str {
        "zero_compatibility"
    }

    fn fix(&self, ctx: &FixingContext<'_>, participant: usize, project: usize) -> Option<bool> {
        if ctx.matrix.score(participant, project) == 0.0 {
            Some(false)
        } else {
            None
        }
    }
}
