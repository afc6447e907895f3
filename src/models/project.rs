//! Project (group) model.
//!
//! A project is one row of the group table: identity, display code,
//! description, and a block of demand cells positionally aligned with
//! the participant skill columns. Projects are referenced by `code`
//! everywhere outside the engine; positional indices never leak out.

use serde::{Deserialize, Serialize};

/// A capacity-constrained group that participants are assigned to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique project identifier.
    pub id: String,
    /// Display code used in assignment slots (e.g. "P1").
    pub code: String,
    /// Human-readable description.
    pub description: String,
    /// Raw demand cells, one per tracked skill. `None` = missing cell.
    pub demands: Vec<Option<f64>>,
}

impl Project {
    /// Creates a new project with the given ID and display code.
    pub fn new(id: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            description: String::new(),
            demands: Vec::new(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the demand vector from fully populated cells.
    pub fn with_demands(mut self, demands: impl IntoIterator<Item = f64>) -> Self {
        self.demands = demands.into_iter().map(Some).collect();
        self
    }

    /// Sets the demand vector from raw cells (`None` = missing).
    pub fn with_demand_cells(mut self, cells: Vec<Option<f64>>) -> Self {
        self.demands = cells;
        self
    }
}
