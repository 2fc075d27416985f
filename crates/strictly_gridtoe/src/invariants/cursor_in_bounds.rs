//! Cursor invariant: the viewed move exists.

use super::Invariant;
use crate::history::History;

/// Invariant: the cursor points at an existing snapshot.
pub struct CursorInBoundsInvariant;

impl Invariant<History> for CursorInBoundsInvariant {
    fn holds(history: &History) -> bool {
        history.cursor() < history.len()
    }

    fn description() -> &'static str {
        "Cursor points at an existing snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::types::Dimensions;

    #[test]
    fn test_cursor_at_start_holds() {
        assert!(CursorInBoundsInvariant::holds(&History::new(Dimensions::default())));
    }

    #[test]
    fn test_cursor_past_end_violates() {
        let dims = Dimensions::default();
        let history = History::from_parts(dims, vec![Board::empty(dims)], 1);
        assert!(!CursorInBoundsInvariant::holds(&history));
    }
}
