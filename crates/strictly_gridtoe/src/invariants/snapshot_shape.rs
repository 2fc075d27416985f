//! Snapshot shape invariant: one size for every board, empty start board.

use super::Invariant;
use crate::history::History;

/// Invariant: every snapshot has rows×cols cells and snapshot 0 is empty.
pub struct SnapshotShapeInvariant;

impl Invariant<History> for SnapshotShapeInvariant {
    fn holds(history: &History) -> bool {
        let dims = history.dims();
        let shaped = history
            .snapshots()
            .iter()
            .all(|board| board.dims() == dims && board.cells().len() == dims.area());

        shaped && history.get(0).is_some_and(|start| start.marks_placed() == 0)
    }

    fn description() -> &'static str {
        "Every snapshot matches the history dimensions and the first is empty"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::types::{Dimensions, Mark};

    #[test]
    fn test_fresh_history_holds() {
        assert!(SnapshotShapeInvariant::holds(&History::new(Dimensions::new(3, 7))));
    }

    #[test]
    fn test_mismatched_snapshot_violates() {
        let dims = Dimensions::default();
        let other = Board::empty(Dimensions::new(4, 4));
        let history = History::from_parts(dims, vec![Board::empty(dims), other], 0);
        assert!(!SnapshotShapeInvariant::holds(&history));
    }

    #[test]
    fn test_marked_start_violates() {
        let dims = Dimensions::default();
        let start = Board::empty(dims).with_mark(4, Mark::X).unwrap();
        let history = History::from_parts(dims, vec![start], 0);
        assert!(!SnapshotShapeInvariant::holds(&history));
    }

    #[test]
    fn test_empty_history_violates() {
        let dims = Dimensions::default();
        let history = History::from_parts(dims, Vec::new(), 0);
        assert!(!SnapshotShapeInvariant::holds(&history));
    }
}
