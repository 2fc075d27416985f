//! Headless replay of clicks and jumps.

use derive_more::{Display, Error};
use strictly_gridtoe::{Dimensions, Game, GameView, Intent};
use tracing::{debug, instrument};

/// A script token that is neither a cell index nor a jump.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ScriptError {
    /// Token could not be parsed.
    #[display("Invalid move token {:?} at position {}", token, position)]
    InvalidToken {
        /// The offending token.
        token: String,
        /// Zero-based position in the script.
        position: usize,
    },
}

/// Parses `0,4,j1,8` into click and jump intents.
///
/// Whitespace around tokens is ignored, as are empty tokens.
#[instrument]
pub fn parse_moves(script: &str) -> Result<Vec<Intent>, ScriptError> {
    script
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| {
            let invalid = || ScriptError::InvalidToken {
                token: token.to_string(),
                position,
            };
            match token.strip_prefix('j') {
                Some(index) => index.parse().map(Intent::JumpTo).map_err(|_| invalid()),
                None => token.parse().map(Intent::Click).map_err(|_| invalid()),
            }
        })
        .collect()
}

/// Replays intents on a fresh board and returns the final view.
///
/// Intents the game ignores are skipped, just as in the interactive UI.
#[instrument(skip(intents), fields(count = intents.len()))]
pub fn run_script(dims: Dimensions, intents: &[Intent]) -> GameView {
    let mut game = Game::new(dims);
    for &intent in intents {
        if !game.dispatch(intent) {
            debug!(?intent, "Script step had no effect");
        }
    }
    game.view()
}

/// Formats a view as plain text: status, board, and move list.
pub fn render_text(view: &GameView) -> String {
    let moves = view
        .moves()
        .iter()
        .map(|entry| format!("  {}", entry.label()))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{}\n\n{}\n\nMoves:\n{}", view.status(), view.board(), moves)
}
