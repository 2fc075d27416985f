//! Immutable board snapshots.

use super::types::{Cell, Dimensions, Mark};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;

/// A rows×cols board stored as a flat row-major slice.
///
/// Boards are snapshots: placing a mark yields a new board and leaves the
/// original untouched. Cloning shares the underlying cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    dims: Dimensions,
    cells: Arc<[Cell]>,
}

/// Unchecked wire form of a [`Board`].
#[derive(Deserialize)]
struct RawBoard {
    dims: Dimensions,
    cells: Vec<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = String;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let count = raw.cells.len();
        Self::from_cells(raw.dims, raw.cells).ok_or_else(|| {
            format!("{} board needs {} cells, got {}", raw.dims, raw.dims.area(), count)
        })
    }
}

impl Board {
    /// Creates an all-empty board.
    #[instrument]
    pub fn empty(dims: Dimensions) -> Self {
        Self {
            dims,
            cells: vec![Cell::Empty; dims.area()].into(),
        }
    }

    /// Builds a board from row-major cells.
    ///
    /// Returns `None` if the cell count does not match `dims`.
    pub fn from_cells(dims: Dimensions, cells: Vec<Cell>) -> Option<Self> {
        (cells.len() == dims.area()).then(|| Self {
            dims,
            cells: cells.into(),
        })
    }

    /// Returns the board dimensions.
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Gets the cell at a row-major index.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Gets the cell at (row, col).
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.dims.index(row, col).and_then(|index| self.get(index))
    }

    /// Checks if the cell at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn marks_placed(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Returns a copy of this board with `mark` at `index`.
    ///
    /// The caller is responsible for checking that the cell is empty.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Option<Self> {
        if index >= self.cells.len() {
            return None;
        }
        let mut cells = self.cells.to_vec();
        cells[index] = Cell::Occupied(mark);
        Some(Self {
            dims: self.dims,
            cells: cells.into(),
        })
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their index so a player can tell which cell to click.
    pub fn display(&self) -> String {
        let width = self.cells.len().saturating_sub(1).to_string().len();
        let rows = (0..self.dims.rows())
            .map(|row| {
                (0..self.dims.cols())
                    .map(|col| {
                        let index = row * self.dims.cols() + col;
                        let symbol = match self.get(index) {
                            Some(Cell::Occupied(mark)) => mark.to_string(),
                            _ => index.to_string(),
                        };
                        format!("{:>width$}", symbol, width = width)
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>();
        let separator = vec!["-".repeat(width); self.dims.cols()].join("+");
        rows.join(&format!("\n{}\n", separator))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::empty(Dimensions::new(4, 3));
        assert_eq!(board.cells().len(), 12);
        assert!(board.cells().iter().all(|c| c.is_empty()));
        assert_eq!(board.marks_placed(), 0);
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::empty(Dimensions::default());
        let next = board.with_mark(4, Mark::X).unwrap();
        assert!(board.is_empty(4));
        assert_eq!(next.get(4), Some(Cell::Occupied(Mark::X)));
        assert_eq!(next.cell(1, 1), Some(Cell::Occupied(Mark::X)));
        assert_eq!(next.marks_placed(), 1);
    }

    #[test]
    fn test_with_mark_out_of_bounds() {
        let board = Board::empty(Dimensions::default());
        assert!(board.with_mark(9, Mark::O).is_none());
        assert!(!board.is_empty(9));
    }

    #[test]
    fn test_from_cells_checks_length() {
        let dims = Dimensions::new(2, 2);
        assert!(Board::from_cells(dims, vec![Cell::Empty; 3]).is_none());
        assert!(Board::from_cells(dims, vec![Cell::Empty; 4]).is_some());
    }

    #[test]
    fn test_display() {
        let board = Board::empty(Dimensions::default())
            .with_mark(0, Mark::X)
            .and_then(|b| b.with_mark(4, Mark::O))
            .unwrap();
        assert_eq!(board.display(), "X|1|2\n-+-+-\n3|O|5\n-+-+-\n6|7|8");
    }

    #[test]
    fn test_display_pads_wide_boards() {
        let board = Board::empty(Dimensions::new(3, 4));
        let first_line = board.display().lines().next().unwrap().to_string();
        assert_eq!(first_line, " 0| 1| 2| 3");
    }

    #[test]
    fn test_deserialize_checks_cell_count() {
        let board = Board::empty(Dimensions::new(2, 2)).with_mark(3, Mark::O).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);

        let short = r#"{"dims":{"rows":2,"cols":2},"cells":["Empty","Empty","Empty"]}"#;
        let err = serde_json::from_str::<Board>(short).unwrap_err();
        assert!(err.to_string().contains("2x2 board needs 4 cells, got 3"));
    }
}
