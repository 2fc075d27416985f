//! Strictly Gridtoe - tic-tac-toe on any rows×cols grid, with time travel.
//!
//! # Architecture
//!
//! - **Rules**: pure win and draw detection over a flat board
//! - **History**: board snapshots plus the viewed move
//! - **Game**: the controller that turns intents into history transitions
//! - **View**: render-ready snapshots delivered to observers
//!
//! # Example
//!
//! ```
//! use strictly_gridtoe::{Dimensions, Game, Intent, Status, Mark};
//!
//! let mut game = Game::new(Dimensions::new(3, 3));
//! for cell in [0, 1, 4, 2, 8] {
//!     game.dispatch(Intent::Click(cell));
//! }
//! assert_eq!(*game.view().status(), Status::Winner(Mark::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod game;
mod history;
pub mod invariants;
mod observer;
mod outcome;
pub mod rules;
mod types;
mod view;

pub use board::Board;
pub use game::{Game, Intent};
pub use history::{DisplayOrder, History, MoveEntry};
pub use observer::GameObserver;
pub use outcome::{LineKind, Outcome, Status};
pub use rules::evaluate;
pub use types::{Cell, Dimensions, DimensionsError, Mark};
pub use view::GameView;
