//! Win detection logic for M×N boards.
//!
//! Only complete rows, complete columns, and (on square boards) the two
//! full-length diagonals win. Lines are checked in that order and the first
//! complete one is reported.

use super::cell_at;
use crate::outcome::LineKind;
use crate::types::{Cell, Dimensions, Mark};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Returns the mark and the first complete line found, or `None`.
#[instrument(skip(cells))]
pub fn check_winner(cells: &[Cell], dims: Dimensions) -> Option<(Mark, LineKind)> {
    let (rows, cols) = (dims.rows(), dims.cols());

    for row in 0..rows {
        if let Some(mark) = uniform(cells, (0..cols).map(|col| row * cols + col)) {
            return Some((mark, LineKind::Row(row)));
        }
    }

    for col in 0..cols {
        if let Some(mark) = uniform(cells, (0..rows).map(|row| col + row * cols)) {
            return Some((mark, LineKind::Column(col)));
        }
    }

    if dims.is_square() && !dims.is_degenerate() {
        for line in [LineKind::MainDiagonal, LineKind::AntiDiagonal] {
            if let Some(mark) = uniform(cells, line.cells(dims).into_iter()) {
                return Some((mark, line));
            }
        }
    }

    None
}

/// Returns the shared mark if the line starts occupied and never changes.
fn uniform(cells: &[Cell], mut line: impl Iterator<Item = usize>) -> Option<Mark> {
    let first = cell_at(cells, line.next()?);
    let mark = first.mark()?;
    line.all(|index| cell_at(cells, index) == first).then_some(mark)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(dims: Dimensions, marks: &[(usize, Mark)]) -> Vec<Cell> {
        let mut cells = vec![Cell::Empty; dims.area()];
        for &(index, mark) in marks {
            cells[index] = Cell::Occupied(mark);
        }
        cells
    }

    #[test]
    fn test_no_winner_empty_board() {
        let dims = Dimensions::new(3, 3);
        assert_eq!(check_winner(&board(dims, &[]), dims), None);
    }

    #[test]
    fn test_winner_full_row_on_wide_board() {
        let dims = Dimensions::new(3, 5);
        let cells = board(dims, &(5..10).map(|i| (i, Mark::O)).collect::<Vec<_>>());
        assert_eq!(check_winner(&cells, dims), Some((Mark::O, LineKind::Row(1))));
    }

    #[test]
    fn test_partial_row_does_not_win() {
        let dims = Dimensions::new(3, 5);
        let cells = board(dims, &[(0, Mark::X), (1, Mark::X), (2, Mark::X)]);
        assert_eq!(check_winner(&cells, dims), None);
    }

    #[test]
    fn test_winner_column_on_tall_board() {
        let dims = Dimensions::new(4, 3);
        let cells = board(
            dims,
            &[(2, Mark::X), (5, Mark::X), (8, Mark::X), (11, Mark::X)],
        );
        assert_eq!(check_winner(&cells, dims), Some((Mark::X, LineKind::Column(2))));
    }

    #[test]
    fn test_mixed_row_does_not_win() {
        let dims = Dimensions::new(3, 3);
        let cells = board(dims, &[(0, Mark::X), (1, Mark::O), (2, Mark::X)]);
        assert_eq!(check_winner(&cells, dims), None);
    }

    #[test]
    fn test_winner_main_diagonal() {
        let dims = Dimensions::new(4, 4);
        let cells = board(
            dims,
            &[(0, Mark::O), (5, Mark::O), (10, Mark::O), (15, Mark::O)],
        );
        assert_eq!(
            check_winner(&cells, dims),
            Some((Mark::O, LineKind::MainDiagonal))
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let dims = Dimensions::new(3, 3);
        let cells = board(dims, &[(2, Mark::X), (4, Mark::X), (6, Mark::X)]);
        assert_eq!(
            check_winner(&cells, dims),
            Some((Mark::X, LineKind::AntiDiagonal))
        );
    }

    #[test]
    fn test_diagonal_ignored_on_non_square_board() {
        let dims = Dimensions::new(3, 4);
        // 0, 5, 10 runs diagonally from the top-left corner.
        let cells = board(dims, &[(0, Mark::X), (5, Mark::X), (10, Mark::X)]);
        assert_eq!(check_winner(&cells, dims), None);
    }

    #[test]
    fn test_small_boards_use_same_rules() {
        let dims = Dimensions::new(2, 2);
        let cells = board(dims, &[(1, Mark::O), (2, Mark::O)]);
        assert_eq!(
            check_winner(&cells, dims),
            Some((Mark::O, LineKind::AntiDiagonal))
        );

        let single = Dimensions::new(1, 1);
        assert_eq!(
            check_winner(&board(single, &[(0, Mark::X)]), single),
            Some((Mark::X, LineKind::Row(0)))
        );
    }
}
