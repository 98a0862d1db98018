use crate::{constants::LAYOUT_COLUMNS, maze::CellKind};

/// Where a solution is drawn: `column` within a band of `LAYOUT_COLUMNS`
/// solutions, `band` counting down from the top.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
    pub column: usize,
    pub band: usize,
}

impl Slot {
    pub fn for_index(solution_index: usize) -> Self {
        Self {
            column: solution_index % LAYOUT_COLUMNS,
            band: solution_index / LAYOUT_COLUMNS,
        }
    }

    pub fn is_last_in_band(&self) -> bool {
        self.column == LAYOUT_COLUMNS - 1
    }
}

/// Fired each time the search reaches the exit. `grid` is a copy of the cell
/// states at that moment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolutionEvent {
    pub solution_index: usize,
    pub grid: Vec<Vec<CellKind>>,
}

impl SolutionEvent {
    pub fn slot(&self) -> Slot {
        Slot::for_index(self.solution_index)
    }

    /// Cells tagged as part of the path to the exit.
    pub fn path_len(&self) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|&&cell| cell == CellKind::OnPath)
            .count()
    }
}
