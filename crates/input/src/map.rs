//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to a game action.
///
/// | Keys | Action |
/// |------|--------|
/// | Down, S | move down |
/// | Up, W, F | rotate |
/// | Left, A | move left |
/// | Right, D | move right |
/// | Space, G | hard drop |
pub fn action_for_key(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::MoveDown),
        KeyCode::Up
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('f')
        | KeyCode::Char('F') => Some(GameAction::Rotate),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameAction::MoveRight),
        KeyCode::Char(' ') | KeyCode::Char('g') | KeyCode::Char('G') => Some(GameAction::HardDrop),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
