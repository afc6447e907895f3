//! ILP formulation of the allocation problem.
//!
//! Bridges the normalized dataset and compatibility matrix to the
//! `good_lp` solver. Builds a binary decision grid (one cell per
//! participant × project pair), fixes cells via strategy rules, lowers
//! the rest into linear constraints and a maximized objective, and maps
//! the solver's status back onto the engine's error taxonomy.
//!
//! # Reference
//! Wolsey (2020), "Integer Programming", Ch. 1: assignment models

mod grid;
mod model;
mod rules;
mod solver;

pub use grid::{Cell, VariableGrid};
pub use model::{AllocationModelBuilder, BuiltModel};
pub use rules::{FixingContext, FixingRule, PreAllocationRule, ZeroCompatibilityRule};
pub use solver::{solve_model, SolvedAssignments};
