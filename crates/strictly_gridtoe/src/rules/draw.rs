//! Draw detection logic.

use super::cell_at;
use crate::types::{Cell, Dimensions};
use tracing::instrument;

/// Checks if every cell of the board is occupied.
///
/// A full board is a draw no matter what lines it contains.
#[instrument(skip(cells))]
pub fn is_full(cells: &[Cell], dims: Dimensions) -> bool {
    (0..dims.area()).all(|index| !cell_at(cells, index).is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    #[test]
    fn test_empty_board_not_full() {
        let dims = Dimensions::new(3, 4);
        assert!(!is_full(&vec![Cell::Empty; 12], dims));
    }

    #[test]
    fn test_partial_board_not_full() {
        let dims = Dimensions::new(3, 3);
        let mut cells = vec![Cell::Occupied(Mark::X); 9];
        cells[7] = Cell::Empty;
        assert!(!is_full(&cells, dims));
    }

    #[test]
    fn test_full_board() {
        let dims = Dimensions::new(4, 3);
        let cells: Vec<_> = (0..12).map(|i| Cell::Occupied(Mark::for_move(i))).collect();
        assert!(is_full(&cells, dims));
    }

    #[test]
    fn test_short_slice_not_full() {
        let dims = Dimensions::new(3, 3);
        assert!(!is_full(&vec![Cell::Occupied(Mark::O); 8], dims));
    }
}
