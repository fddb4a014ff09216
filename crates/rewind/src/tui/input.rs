//! Key bindings.

use crossterm::event::KeyCode;
use rewind_tictactoe::{Intent, Position, SortOrder};

/// Which pane receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 board.
    #[default]
    Board,
    /// The move log.
    MoveLog,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::MoveLog,
            Focus::MoveLog => Focus::Board,
        }
    }
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the app.
    Quit,
    /// Switch focus between board and move log.
    SwitchFocus,
    /// Move the board cursor.
    MoveCursor(KeyCode),
    /// Move the move-log selection by one entry.
    ScrollLog(isize),
    /// Enter on the focused pane.
    Activate,
    /// Step one move back or forward through history.
    Step(isize),
    /// Forward an intent to the game.
    Send(Intent),
}

/// Maps a key to an action given the focused pane.
pub fn action_for(key: KeyCode, focus: Focus) -> Option<Action> {
    let action = match (key, focus) {
        (KeyCode::Char('q') | KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Tab, _) => Action::SwitchFocus,
        (KeyCode::Enter | KeyCode::Char(' '), _) => Action::Activate,
        (KeyCode::Char('['), _) => Action::Step(-1),
        (KeyCode::Char(']'), _) => Action::Step(1),
        (KeyCode::Char('a'), _) => Action::Send(Intent::SetSortOrder {
            order: SortOrder::Ascending,
        }),
        (KeyCode::Char('d'), _) => Action::Send(Intent::SetSortOrder {
            order: SortOrder::Descending,
        }),
        (KeyCode::Char('s'), _) => Action::Send(Intent::ToggleSortOrder),
        (KeyCode::Char('r'), _) => Action::Send(Intent::Restart),
        (KeyCode::Char(c @ '1'..='9'), _) => {
            let index = c.to_digit(10)? as usize - 1;
            Action::Send(Intent::Play {
                position: Position::from_index(index)?,
            })
        }
        (KeyCode::Up, Focus::MoveLog) => Action::ScrollLog(-1),
        (KeyCode::Down, Focus::MoveLog) => Action::ScrollLog(1),
        (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right, Focus::Board) => {
            Action::MoveCursor(key)
        }
        _ => return None,
    };
    Some(action)
}

/// Moves cursor based on arrow keys.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row() - 1, cursor.column() - 1);
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}
