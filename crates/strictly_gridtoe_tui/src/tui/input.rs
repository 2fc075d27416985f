//! Keyboard mapping and board cursor movement.

use crossterm::event::{KeyCode, KeyEvent};
use strictly_gridtoe::Dimensions;

/// Panel that receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the move-list selection.
    Moves,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

/// Direction of a cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the board cursor.
    MoveCursor(Direction),
    /// Play at the board cursor.
    Play,
    /// Switch between board and move list.
    ToggleFocus,
    /// Select the entry above in the move list.
    SelectPrevious,
    /// Select the entry below in the move list.
    SelectNext,
    /// Jump to the selected move.
    JumpToSelected,
    /// Flip the move-list order.
    ToggleOrder,
    /// One row fewer.
    ShrinkRows,
    /// One row more.
    GrowRows,
    /// One column fewer.
    ShrinkCols,
    /// One column more.
    GrowCols,
    /// Leave the game.
    Quit,
    /// Key has no binding.
    Ignore,
}

/// Maps a key press to an action for the focused panel.
pub fn map_key(focus: Focus, key: KeyEvent) -> Action {
    match (focus, key.code) {
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Action::Quit,
        (_, KeyCode::Tab) | (_, KeyCode::BackTab) => Action::ToggleFocus,
        (_, KeyCode::Char('o')) => Action::ToggleOrder,
        (_, KeyCode::Char('r')) => Action::ShrinkRows,
        (_, KeyCode::Char('R')) => Action::GrowRows,
        (_, KeyCode::Char('c')) => Action::ShrinkCols,
        (_, KeyCode::Char('C')) => Action::GrowCols,

        (Focus::Board, KeyCode::Up) => Action::MoveCursor(Direction::Up),
        (Focus::Board, KeyCode::Down) => Action::MoveCursor(Direction::Down),
        (Focus::Board, KeyCode::Left) => Action::MoveCursor(Direction::Left),
        (Focus::Board, KeyCode::Right) => Action::MoveCursor(Direction::Right),
        (Focus::Board, KeyCode::Enter) | (Focus::Board, KeyCode::Char(' ')) => Action::Play,

        (Focus::Moves, KeyCode::Up) => Action::SelectPrevious,
        (Focus::Moves, KeyCode::Down) => Action::SelectNext,
        (Focus::Moves, KeyCode::Enter) | (Focus::Moves, KeyCode::Char(' ')) => {
            Action::JumpToSelected
        }

        _ => Action::Ignore,
    }
}

/// Moves the cursor one step, staying put at the board edge.
pub fn move_cursor(cursor: (usize, usize), direction: Direction, dims: Dimensions) -> (usize, usize) {
    let (row, col) = clamp_cursor(cursor, dims);
    match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(dims.rows().saturating_sub(1)), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(dims.cols().saturating_sub(1))),
    }
}

/// Pulls a cursor back onto a board that may have shrunk.
pub fn clamp_cursor(cursor: (usize, usize), dims: Dimensions) -> (usize, usize) {
    (
        cursor.0.min(dims.rows().saturating_sub(1)),
        cursor.1.min(dims.cols().saturating_sub(1)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrows_depend_on_focus() {
        assert_eq!(
            map_key(Focus::Board, key(KeyCode::Up)),
            Action::MoveCursor(Direction::Up)
        );
        assert_eq!(map_key(Focus::Moves, key(KeyCode::Up)), Action::SelectPrevious);
        assert_eq!(map_key(Focus::Board, key(KeyCode::Enter)), Action::Play);
        assert_eq!(map_key(Focus::Moves, key(KeyCode::Enter)), Action::JumpToSelected);
    }

    #[test]
    fn test_global_keys() {
        for focus in [Focus::Board, Focus::Moves] {
            assert_eq!(map_key(focus, key(KeyCode::Char('q'))), Action::Quit);
            assert_eq!(map_key(focus, key(KeyCode::Tab)), Action::ToggleFocus);
            assert_eq!(map_key(focus, key(KeyCode::Char('o'))), Action::ToggleOrder);
            assert_eq!(map_key(focus, key(KeyCode::Char('R'))), Action::GrowRows);
            assert_eq!(map_key(focus, key(KeyCode::Char('c'))), Action::ShrinkCols);
            assert_eq!(map_key(focus, key(KeyCode::Char('x'))), Action::Ignore);
        }
    }

    #[test]
    fn test_move_cursor_stops_at_edges() {
        let dims = Dimensions::new(3, 4);
        assert_eq!(move_cursor((0, 0), Direction::Up, dims), (0, 0));
        assert_eq!(move_cursor((0, 0), Direction::Left, dims), (0, 0));
        assert_eq!(move_cursor((2, 3), Direction::Down, dims), (2, 3));
        assert_eq!(move_cursor((2, 3), Direction::Right, dims), (2, 3));
        assert_eq!(move_cursor((1, 1), Direction::Right, dims), (1, 2));
        assert_eq!(move_cursor((1, 1), Direction::Down, dims), (2, 1));
    }

    #[test]
    fn test_clamp_cursor_after_shrink() {
        assert_eq!(clamp_cursor((9, 9), Dimensions::new(3, 5)), (2, 4));
        assert_eq!(clamp_cursor((1, 1), Dimensions::new(3, 5)), (1, 1));
    }
}
