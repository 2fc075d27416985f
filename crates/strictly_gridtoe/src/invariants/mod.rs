//! First-class invariants for move history.
//!
//! Invariants are logical properties that must hold after every transition.
//! They are testable independently and checked by the controller in debug
//! builds.

pub mod alternating_marks;
pub mod cursor_in_bounds;
pub mod snapshot_shape;

pub use alternating_marks::AlternatingMarksInvariant;
pub use cursor_in_bounds::CursorInBoundsInvariant;
pub use snapshot_shape::SnapshotShapeInvariant;

use crate::history::History;
use tracing::error;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for triples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    SnapshotShapeInvariant,
    CursorInBoundsInvariant,
    AlternatingMarksInvariant,
);

/// Panics in debug builds if any history invariant is violated.
pub(crate) fn assert_invariants(history: &History) {
    let result = HistoryInvariants::check_all(history);
    if let Err(violations) = &result {
        for violation in violations {
            error!(description = %violation.description, "History invariant violated");
        }
    }
    debug_assert!(result.is_ok(), "History invariants violated: {:?}", result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::types::{Dimensions, Mark};

    #[test]
    fn test_invariant_set_holds_for_new_history() {
        let history = History::new(Dimensions::new(4, 6));
        assert!(HistoryInvariants::check_all(&history).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let dims = Dimensions::default();
        let start = Board::empty(dims);
        let double = start
            .with_mark(0, Mark::X)
            .and_then(|b| b.with_mark(1, Mark::X))
            .unwrap();
        let history = History::from_parts(dims, vec![start, double], 3);

        let violations = HistoryInvariants::check_all(&history).unwrap_err();
        assert_eq!(violations.len(), 2);
    }
}
