//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        // History
        KeyCode::Char('u') | KeyCode::Char('U') | KeyCode::Char('z') | KeyCode::Char('Z') => {
            Some(GameAction::Undo)
        }
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Char('y') | KeyCode::Char('Y') => {
            Some(GameAction::Redo)
        }

        // Stock
        KeyCode::Char(' ') | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameAction::ClickStock),

        // Deal again
        KeyCode::Char('n') | KeyCode::Char('N') => Some(GameAction::NewGame),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
