//! Results of win detection and the status line derived from them.

use super::types::{Dimensions, Mark};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// The line that decided a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum LineKind {
    /// A complete row, by row index.
    #[display("row {}", _0)]
    Row(usize),
    /// A complete column, by column index.
    #[display("column {}", _0)]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("first diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[display("second diagonal")]
    AntiDiagonal,
}

impl LineKind {
    /// Returns the row-major indices covered by this line.
    pub fn cells(self, dims: Dimensions) -> Vec<usize> {
        let (rows, cols) = (dims.rows(), dims.cols());
        match self {
            LineKind::Row(row) => (0..cols).map(|col| row * cols + col).collect(),
            LineKind::Column(col) => (0..rows).map(|row| row * cols + col).collect(),
            LineKind::MainDiagonal => (0..rows).map(|i| i * (cols + 1)).collect(),
            LineKind::AntiDiagonal => (1..=rows).map(|i| i * (cols.saturating_sub(1))).collect(),
        }
    }
}

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
pub enum Outcome {
    /// Nobody has won and the board still has room.
    #[default]
    #[display("Undecided")]
    Undecided,
    /// Every cell is filled.
    #[display("Draw")]
    Draw,
    /// A player completed a line.
    #[display("{} wins by {}", mark, line)]
    Win {
        /// The winning mark.
        mark: Mark,
        /// Where the mark won.
        line: LineKind,
    },
}

impl Outcome {
    /// Returns true once no further moves are accepted.
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::Undecided)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<LineKind> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Status line shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Status {
    /// The board is full.
    #[display("Draw")]
    Draw,
    /// A player has won.
    #[display("Winner: {}", _0)]
    Winner(Mark),
    /// The game continues.
    #[display("Next player: {}", _0)]
    NextPlayer(Mark),
}

impl Status {
    /// Derives the status from an outcome and the player to move.
    pub fn new(outcome: Outcome, to_move: Mark) -> Self {
        match outcome {
            Outcome::Undecided => Status::NextPlayer(to_move),
            Outcome::Draw => Status::Draw,
            Outcome::Win { mark, .. } => Status::Winner(mark),
        }
    }
}
