//! Core domain types for grid tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Mark placed by a player.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, strum::EnumIter,
)]
pub enum Mark {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Returns the mark that plays from history index `move_number`.
    ///
    /// Even indices belong to X, odd ones to O.
    pub fn for_move(move_number: usize) -> Self {
        if move_number % 2 == 0 { Mark::X } else { Mark::O }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns true for [`Cell::Empty`].
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        Cell::Occupied(mark)
    }
}

/// Board dimensions as (rows, cols).
///
/// The core accepts any size. Front ends that expose sliders go through
/// [`Dimensions::bounded`] to keep each side within
/// [`MIN_SIDE`](Self::MIN_SIDE)..=[`MAX_SIDE`](Self::MAX_SIDE).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{}x{}", rows, cols)]
pub struct Dimensions {
    rows: usize,
    cols: usize,
}

impl Dimensions {
    /// Smallest side length offered to players.
    pub const MIN_SIDE: usize = 3;
    /// Largest side length offered to players.
    pub const MAX_SIDE: usize = 15;

    /// Creates dimensions without range checks.
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Creates dimensions, rejecting sides outside the player-facing range.
    #[instrument]
    pub fn bounded(rows: usize, cols: usize) -> Result<Self, DimensionsError> {
        for (name, side) in [("rows", rows), ("cols", cols)] {
            if !(Self::MIN_SIDE..=Self::MAX_SIDE).contains(&side) {
                return Err(DimensionsError::new(format!(
                    "{} must be between {} and {}, got {}",
                    name,
                    Self::MIN_SIDE,
                    Self::MAX_SIDE,
                    side
                )));
            }
        }
        Ok(Self { rows, cols })
    }

    /// Clamps a side length into the player-facing range.
    pub fn clamp_side(side: usize) -> usize {
        side.clamp(Self::MIN_SIDE, Self::MAX_SIDE)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn area(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns true when rows == cols, the only shape with diagonal wins.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns true if either side is zero.
    pub fn is_degenerate(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Row-major index of (row, col), or `None` when off the board.
    pub fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// (row, col) of a row-major index, or `None` when off the board.
    pub fn position(&self, index: usize) -> Option<(usize, usize)> {
        (index < self.area()).then(|| (index / self.cols, index % self.cols))
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(Self::MIN_SIDE, Self::MIN_SIDE)
    }
}

/// Dimensions outside the player-facing range.
#[derive(Debug, Clone, Display, Error)]
#[display("Dimensions error: {} at {}:{}", message, file, line)]
pub struct DimensionsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl DimensionsError {
    /// Creates a new dimensions error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
