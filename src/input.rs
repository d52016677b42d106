//! Key bindings: terminal key events to player commands.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::sim::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Game(Command),
    Quit,
}

/// Translate a key event. Only fresh presses count: releases and auto-repeat
/// are dropped, which makes the jump edge-triggered.
pub fn translate(event: &Event) -> Option<Action> {
    let Event::Key(key) = event else {
        return None;
    };
    if key.kind != KeyEventKind::Press {
        return None;
    }
    translate_key(key)
}

fn translate_key(key: &KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Up => Some(Action::Game(Command::Jump)),
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => {
            Some(Action::Game(Command::Restart))
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}
