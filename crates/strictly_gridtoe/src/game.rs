//! Game controller: turns user intents into history transitions.
//!
//! Every operation is total. Intents that cannot apply (occupied cell,
//! decided board, unchanged dimensions, out-of-range jump) leave the game
//! untouched and report `false`.

use super::board::Board;
use super::history::{DisplayOrder, History};
use super::invariants::assert_invariants;
use super::observer::GameObserver;
use super::outcome::{Outcome, Status};
use super::rules;
use super::types::{Dimensions, Mark};
use super::view::GameView;
use tracing::{debug, info, instrument};

/// A request from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Play the cell at a row-major index.
    Click(usize),
    /// Change the row count, keeping the column count.
    SetRows(usize),
    /// Change the column count, keeping the row count.
    SetCols(usize),
    /// Change both sides at once.
    Resize {
        /// New row count.
        rows: usize,
        /// New column count.
        cols: usize,
    },
    /// View the board at a history index.
    JumpTo(usize),
    /// Flip the move-list order.
    ToggleOrder,
}

/// Grid tic-tac-toe with time travel.
pub struct Game {
    history: History,
    observers: Vec<Box<dyn GameObserver>>,
}

impl Game {
    /// Creates a game with an empty board of `dims`.
    #[instrument]
    pub fn new(dims: Dimensions) -> Self {
        Self {
            history: History::new(dims),
            observers: Vec::new(),
        }
    }

    /// Sets the initial move-list order.
    pub fn with_order(mut self, order: DisplayOrder) -> Self {
        self.history.set_order(order);
        self
    }

    /// Registers an observer for state changes.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Returns the move history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the current dimensions.
    pub fn dims(&self) -> Dimensions {
        self.history.dims()
    }

    /// Returns the board being viewed.
    pub fn board(&self) -> &Board {
        self.history.current()
    }

    /// Evaluates the board being viewed.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(self.board().cells(), self.dims())
    }

    /// Mark that plays next from the viewed board.
    pub fn to_move(&self) -> Mark {
        self.history.to_move()
    }

    /// Builds a render-ready snapshot.
    #[instrument(skip(self))]
    pub fn view(&self) -> GameView {
        let outcome = self.outcome();
        GameView::new(
            self.board().clone(),
            outcome,
            Status::new(outcome, self.to_move()),
            self.history.entries(),
            self.history.cursor(),
            self.history.order(),
        )
    }

    /// Applies an intent. Returns true if the game changed.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::Click(index) => self.apply_move(index),
            Intent::SetRows(rows) => self.set_rows(rows),
            Intent::SetCols(cols) => self.set_cols(cols),
            Intent::Resize { rows, cols } => self.resize(rows, cols),
            Intent::JumpTo(index) => self.jump_to(index),
            Intent::ToggleOrder => self.toggle_order(),
        }
    }

    /// Plays the next mark at `index`.
    ///
    /// Ignored if the cell is occupied or off the board, or if the viewed
    /// board is already decided. Playing from an earlier move discards the
    /// moves after it.
    #[instrument(skip(self), fields(cursor = self.history.cursor()))]
    pub fn apply_move(&mut self, index: usize) -> bool {
        let board = self.history.current();
        if !board.is_empty(index) {
            debug!("Ignoring click on occupied or missing cell");
            return false;
        }

        let outcome = self.outcome();
        if outcome.is_decided() {
            debug!(%outcome, "Ignoring click on decided board");
            return false;
        }

        let mark = self.history.to_move();
        let Some(next) = board.with_mark(index, mark) else {
            return false;
        };
        self.history.record(next);
        debug!(%mark, cursor = self.history.cursor(), "Move played");
        self.changed()
    }

    /// Views the board at history index `index`.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index == self.history.cursor() {
            return false;
        }
        self.history.jump_to(index) && self.changed()
    }

    /// Starts over on an empty `rows`×`cols` board.
    ///
    /// All history is discarded. Unchanged or zero-sized dimensions are
    /// ignored.
    #[instrument(skip(self), fields(current = %self.dims()))]
    pub fn resize(&mut self, rows: usize, cols: usize) -> bool {
        let dims = Dimensions::new(rows, cols);
        if dims.is_degenerate() {
            debug!("Ignoring zero-sized board");
            return false;
        }
        if dims == self.dims() {
            return false;
        }
        info!(%dims, discarded = self.history.len(), "Resizing board");
        self.history.reset(dims);
        self.changed()
    }

    /// Changes the row count.
    pub fn set_rows(&mut self, rows: usize) -> bool {
        self.resize(rows, self.dims().cols())
    }

    /// Changes the column count.
    pub fn set_cols(&mut self, cols: usize) -> bool {
        self.resize(self.dims().rows(), cols)
    }

    /// Flips the move-list order.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) -> bool {
        self.history.toggle_order();
        debug!(order = ?self.history.order(), "Toggled move order");
        self.changed()
    }

    /// Checks invariants and notifies observers. Always returns true.
    fn changed(&mut self) -> bool {
        assert_invariants(&self.history);
        if !self.observers.is_empty() {
            let view = self.view();
            for observer in &mut self.observers {
                observer.on_change(&view);
            }
        }
        true
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Dimensions::default())
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("history", &self.history)
            .field("observers", &self.observers.len())
            .finish()
    }
}
