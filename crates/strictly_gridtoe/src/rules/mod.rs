//! Game rules for grid tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board. Rules are
//! separated from board storage so they can run over any flat slice of
//! cells, including ones that never became a [`Board`](crate::Board).

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;

use super::outcome::Outcome;
use super::types::{Cell, Dimensions};
use tracing::instrument;

/// Evaluates a flat row-major board.
///
/// A full board is reported as [`Outcome::Draw`] before any line is
/// examined, so a full board that also holds a complete line is a draw.
/// Diagonals only count on square boards.
#[instrument(skip(cells), fields(dims = %dims))]
pub fn evaluate(cells: &[Cell], dims: Dimensions) -> Outcome {
    if is_full(cells, dims) {
        return Outcome::Draw;
    }
    match check_winner(cells, dims) {
        Some((mark, line)) => Outcome::Win { mark, line },
        None => Outcome::Undecided,
    }
}

/// Cell lookup that treats missing cells as empty.
fn cell_at(cells: &[Cell], index: usize) -> Cell {
    cells.get(index).copied().unwrap_or(Cell::Empty)
}
