//! Application state and logic.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use strictly_gridtoe::{Dimensions, DisplayOrder, Game, GameView, Intent};
use tracing::{debug, info, instrument};

use super::input::{Action, Focus, clamp_cursor, move_cursor};

/// Main application state.
///
/// The app never reads the game directly for rendering: it keeps the last
/// [`GameView`] delivered by its observer.
pub struct App {
    game: Game,
    view: Rc<RefCell<GameView>>,
    cursor: (usize, usize),
    focus: Focus,
    selected: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    #[instrument]
    pub fn new(dims: Dimensions, order: DisplayOrder) -> Self {
        let mut game = Game::new(dims).with_order(order);
        let view = Rc::new(RefCell::new(game.view()));
        let sink = Rc::clone(&view);
        game.subscribe(move |next: &GameView| {
            *sink.borrow_mut() = next.clone();
        });
        Self {
            game,
            view,
            cursor: (0, 0),
            focus: Focus::default(),
            selected: 0,
            should_quit: false,
        }
    }

    /// Latest view published by the game.
    pub fn view(&self) -> Ref<'_, GameView> {
        self.view.borrow()
    }

    /// Board cursor as (row, col).
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// Panel receiving navigation keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected position in the displayed move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Returns true once the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles an action from the keyboard.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action) {
        let dims = self.game.dims();
        match action {
            Action::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction, dims);
            }
            Action::Play => {
                if let Some(index) = dims.index(self.cursor.0, self.cursor.1) {
                    self.dispatch(Intent::Click(index));
                }
            }
            Action::ToggleFocus => {
                self.focus = self.focus.toggle();
                if self.focus == Focus::Moves {
                    self.select_current();
                }
            }
            Action::SelectPrevious => {
                let count = self.view().moves().len();
                self.selected = match self.selected {
                    i if i > 0 => i - 1,
                    _ => count - 1,
                };
            }
            Action::SelectNext => {
                let count = self.view().moves().len();
                self.selected = (self.selected + 1) % count;
            }
            Action::JumpToSelected => {
                let target = self.view().moves().get(self.selected).map(|e| *e.index());
                if let Some(index) = target {
                    self.dispatch(Intent::JumpTo(index));
                }
            }
            Action::ToggleOrder => {
                let count = self.view().moves().len();
                self.selected = count - 1 - self.selected.min(count - 1);
                self.dispatch(Intent::ToggleOrder);
            }
            Action::ShrinkRows => {
                self.resize(Intent::SetRows(Dimensions::clamp_side(
                    dims.rows().saturating_sub(1),
                )));
            }
            Action::GrowRows => {
                self.resize(Intent::SetRows(Dimensions::clamp_side(dims.rows() + 1)));
            }
            Action::ShrinkCols => {
                self.resize(Intent::SetCols(Dimensions::clamp_side(
                    dims.cols().saturating_sub(1),
                )));
            }
            Action::GrowCols => {
                self.resize(Intent::SetCols(Dimensions::clamp_side(dims.cols() + 1)));
            }
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Action::Ignore => {}
        }
    }

    /// Sends a slider change; a new board restarts the move list.
    fn resize(&mut self, intent: Intent) {
        if self.dispatch(intent) {
            self.cursor = clamp_cursor(self.cursor, self.game.dims());
            self.selected = 0;
        }
    }

    fn dispatch(&mut self, intent: Intent) -> bool {
        let changed = self.game.dispatch(intent);
        if !changed {
            debug!(?intent, "Intent ignored");
        }
        changed
    }

    /// Points the move-list selection at the viewed move.
    fn select_current(&mut self) {
        let position = self.view().moves().iter().position(|e| *e.current());
        self.selected = position.unwrap_or(0);
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("game", &self.game)
            .field("cursor", &self.cursor)
            .field("focus", &self.focus)
            .field("selected", &self.selected)
            .finish()
    }
}
