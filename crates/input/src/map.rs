//! Key mapping from terminal events to game events.

use crate::types::{Command, GameEvent};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to a game event.
///
/// Ctrl-C is reported as [`GameEvent::Quit`], the terminal counterpart of closing
/// the window; every other binding is a [`GameEvent::Key`].
pub fn handle_key_event(key: KeyEvent) -> Option<GameEvent> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(GameEvent::Quit);
    }

    let command = match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Command::MoveLeft
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Command::MoveRight
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Command::MoveDown
        }

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Command::Rotate,

        // Session control
        KeyCode::Char('p') | KeyCode::Char('P') => Command::Pause,
        KeyCode::Char(' ') => Command::Restart,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Command::Quit,

        _ => return None,
    };
    Some(GameEvent::Key(command))
}

/// Map any terminal event; only key presses produce game events.
pub fn handle_event(event: &Event) -> Option<GameEvent> {
    match event {
        // Release/repeat events (Windows, kitty protocol) would double every press.
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(*key),
        _ => None,
    }
}
