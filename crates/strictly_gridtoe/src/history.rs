//! Move history: board snapshots, the viewed move, and list order.

use super::board::Board;
use super::types::{Dimensions, Mark};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Order in which the move list is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl DisplayOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Returns the display label for this order.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Oldest first",
            Self::Descending => "Newest first",
        }
    }
}

/// One row of the rendered move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    index: usize,
    /// Whether this entry is the board being viewed.
    current: bool,
    /// Text shown for the entry.
    label: String,
}

/// Board snapshots for the current dimensions plus the viewed move.
///
/// Index 0 is always the empty board. Every snapshot has the same size.
/// Only built through [`History::new`], so the cursor always points at a
/// snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    dims: Dimensions,
    snapshots: Vec<Board>,
    cursor: usize,
    order: DisplayOrder,
}

impl History {
    /// Starts a history holding one empty board.
    #[instrument]
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            snapshots: vec![Board::empty(dims)],
            cursor: 0,
            order: DisplayOrder::default(),
        }
    }

    /// Returns the dimensions every snapshot shares.
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Returns all snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Gets the snapshot at a history index.
    pub fn get(&self, index: usize) -> Option<&Board> {
        self.snapshots.get(index)
    }

    /// Number of snapshots, counting the empty start board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the start board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the snapshot being viewed.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current move-list order.
    pub fn order(&self) -> DisplayOrder {
        self.order
    }

    /// The snapshot being viewed.
    pub fn current(&self) -> &Board {
        &self.snapshots[self.cursor]
    }

    /// Mark that plays next from the viewed snapshot.
    pub fn to_move(&self) -> Mark {
        Mark::for_move(self.cursor)
    }

    /// Appends a snapshot after the cursor, dropping any later snapshots.
    #[instrument(skip(self, board), fields(cursor = self.cursor, len = self.snapshots.len()))]
    pub(crate) fn record(&mut self, board: Board) {
        let pruned = self.snapshots.len() - (self.cursor + 1);
        if pruned > 0 {
            debug!(pruned, "Discarding redo history");
        }
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(board);
        self.cursor = self.snapshots.len() - 1;
    }

    /// Moves the cursor. Returns false if `index` is out of range.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub(crate) fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.snapshots.len() {
            debug!("Ignoring jump past end of history");
            return false;
        }
        self.cursor = index;
        true
    }

    /// Replaces everything with a single empty board of `dims`.
    ///
    /// The display order survives a reset.
    #[instrument(skip(self), fields(from = %self.dims))]
    pub(crate) fn reset(&mut self, dims: Dimensions) {
        self.dims = dims;
        self.snapshots = vec![Board::empty(dims)];
        self.cursor = 0;
    }

    /// Flips the move-list order.
    pub(crate) fn toggle_order(&mut self) {
        self.order = self.order.toggle();
    }

    /// Sets the move-list order.
    pub(crate) fn set_order(&mut self, order: DisplayOrder) {
        self.order = order;
    }

    /// Builds the move list in display order.
    #[instrument(skip(self))]
    pub fn entries(&self) -> Vec<MoveEntry> {
        let len = self.snapshots.len();
        (0..len)
            .map(|position| match self.order {
                DisplayOrder::Ascending => position,
                DisplayOrder::Descending => len - position - 1,
            })
            .map(|index| MoveEntry::new(index, index == self.cursor, self.label(index)))
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn from_parts(dims: Dimensions, snapshots: Vec<Board>, cursor: usize) -> Self {
        Self {
            dims,
            snapshots,
            cursor,
            order: DisplayOrder::default(),
        }
    }

    fn label(&self, index: usize) -> String {
        if index == self.cursor {
            format!("You are on move #{}", index)
        } else if index > 0 {
            format!("Go to move #{}", index)
        } else {
            "Go to game start".to_string()
        }
    }
}
