//! Key mapping from terminal events to tilt nudges.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Direction a key press tips the simulated device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiltNudge {
    /// Left edge down (negative x)
    Left,
    /// Right edge down (positive x)
    Right,
    /// Top edge toward the player (positive y): falls faster
    Toward,
    /// Top edge away from the player (negative y): rotates
    Away,
    /// Snap back to level
    Level,
}

/// Map keyboard input to a tilt nudge.
pub fn handle_key_event(key: KeyEvent) -> Option<TiltNudge> {
    map_key_code(key.code)
}

pub fn map_key_code(code: KeyCode) -> Option<TiltNudge> {
    match code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(TiltNudge::Left)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(TiltNudge::Right)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(TiltNudge::Toward)
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(TiltNudge::Away)
        }
        KeyCode::Char(' ') | KeyCode::Char('0') => Some(TiltNudge::Level),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
