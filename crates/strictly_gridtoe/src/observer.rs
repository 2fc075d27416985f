//! Change notification for front ends.

use super::view::GameView;

/// Receives a fresh [`GameView`] after every state change.
///
/// Intents that leave the game untouched do not notify observers.
pub trait GameObserver {
    /// Called once per state change.
    fn on_change(&mut self, view: &GameView);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameView),
{
    fn on_change(&mut self, view: &GameView) {
        self(view)
    }
}
