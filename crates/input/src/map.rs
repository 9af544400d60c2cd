//! Key mapping from terminal events to player intents.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press means, before any hold/edge bookkeeping.
///
/// Movement intents feed the continuous held-state sampler; the rest are
/// discrete actions fired on the press edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    MoveLeft,
    MoveRight,
    Jump,
    NextLevel,
    PrevLevel,
    Restart,
}

/// Map keyboard input to a player intent.
pub fn classify_key(code: KeyCode) -> Option<KeyIntent> {
    match code {
        // Movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(KeyIntent::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(KeyIntent::MoveRight)
        }

        // Jump
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(KeyIntent::Jump)
        }

        // Level debug controls
        KeyCode::Char('n') | KeyCode::Char('N') => Some(KeyIntent::NextLevel),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(KeyIntent::PrevLevel),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(KeyIntent::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
