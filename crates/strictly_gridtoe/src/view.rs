//! Render-ready snapshot of the game.

use super::board::Board;
use super::history::{DisplayOrder, MoveEntry};
use super::outcome::{Outcome, Status};
use super::types::Dimensions;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything a front end needs to draw one frame.
///
/// Built by [`Game::view`](crate::Game::view) and handed to observers after
/// each state change.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameView {
    /// Board dimensions.
    dims: Dimensions,
    /// The board being viewed.
    board: Board,
    /// Result of evaluating the viewed board.
    outcome: Outcome,
    /// Status line text source.
    status: Status,
    /// Move list, already in display order.
    moves: Vec<MoveEntry>,
    /// History index of the viewed board.
    cursor: usize,
    /// Order of `moves`.
    order: DisplayOrder,
}

impl GameView {
    pub(crate) fn new(
        board: Board,
        outcome: Outcome,
        status: Status,
        moves: Vec<MoveEntry>,
        cursor: usize,
        order: DisplayOrder,
    ) -> Self {
        Self {
            dims: board.dims(),
            board,
            outcome,
            status,
            moves,
            cursor,
            order,
        }
    }

    /// Indices of the winning line, empty unless the game is won.
    pub fn winning_cells(&self) -> Vec<usize> {
        self.outcome
            .line()
            .map(|line| line.cells(self.dims))
            .unwrap_or_default()
    }

    /// Returns true once the viewed board accepts no more moves.
    pub fn is_over(&self) -> bool {
        self.outcome.is_decided()
    }
}
