//! Alternating marks invariant: X, O, X, O, ... one mark per snapshot.

use super::Invariant;
use crate::board::Board;
use crate::history::History;
use crate::types::{Cell, Mark};

/// Invariant: each snapshot adds exactly one mark to its predecessor.
///
/// The mark added to reach snapshot `k` is X when `k` is odd and O when it
/// is even, so X always opens.
pub struct AlternatingMarksInvariant;

impl AlternatingMarksInvariant {
    fn single_step(before: &Board, after: &Board, mark: Mark) -> bool {
        if before.cells().len() != after.cells().len() {
            return false;
        }
        let changed: Vec<_> = before
            .cells()
            .iter()
            .zip(after.cells())
            .filter(|(b, a)| b != a)
            .collect();

        matches!(
            changed.as_slice(),
            [(Cell::Empty, Cell::Occupied(placed))] if *placed == mark
        )
    }
}

impl Invariant<History> for AlternatingMarksInvariant {
    fn holds(history: &History) -> bool {
        history
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(k, pair)| Self::single_step(&pair[0], &pair[1], Mark::for_move(k)))
    }

    fn description() -> &'static str {
        "Each snapshot adds one mark and marks alternate starting with X"
    }
}
