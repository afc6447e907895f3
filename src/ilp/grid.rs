//! Decision-variable grid.
//!
//! One cell per (participant, project) pair, stored as a flat
//! index-addressed vector. A cell is either a free binary solver
//! variable or fixed to a constant before the solver runs; fixed cells
//! never enter the search space.

use good_lp::Variable;

/// State of one (participant, project) decision.
#[derive(Debug, Clone, Copy)]
pub enum Cell {
    /// Open decision, owned by the solver.
    Free(Variable),
    /// Forced assignment (pre-allocation).
    FixedOne,
    /// Forbidden assignment (zero affinity, or an exhausted row).
    FixedZero,
}

/// Participant × project grid of decision cells.
#[derive(Debug, Clone)]
pub struct VariableGrid {
    cells: Vec<Cell>,
    participants: usize,
    projects: usize,
}

impl VariableGrid {
    /// Builds a grid from row-major cells.
    ///
    /// # Panics
    /// If `cells.len() != participants * projects`.
    pub fn from_cells(cells: Vec<Cell>, participants: usize, projects: usize) -> Self {
        assert_eq!(cells.len(), participants * projects);
        Self {
            cells,
            participants,
            projects,
        }
    }

    /// Cell for a (participant, project) pair.
    #[inline]
    pub fn cell(&self, participant: usize, project: usize) -> Cell {
        self.cells[participant * self.projects + project]
    }

    /// Cells for one participant across all projects.
    pub fn row(&self, participant: usize) -> &[Cell] {
        let start = participant * self.projects;
        &self.cells[start..start + self.projects]
    }

    /// Total number of free cells.
    pub fn free_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| matches!(c, Cell::Free(_)))
            .count()
    }

    /// Number of free cells in one participant's row.
    pub fn free_in_row(&self, participant: usize) -> usize {
        self.row(participant)
            .iter()
            .filter(|c| matches!(c, Cell::Free(_)))
            .count()
    }

    /// Number of forced assignments in one project's column.
    pub fn fixed_ones_in_column(&self, project: usize) -> usize {
        (0..self.participants)
            .filter(|&p| matches!(self.cell(p, project), Cell::FixedOne))
            .count()
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
