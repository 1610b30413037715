//! Terminal input adapter.
//!
//! Maps raw crossterm events onto the game's single action (jump/restart)
//! plus host-level commands. Terminals have no touch events; a left mouse
//! click stands in for the pointer/touch source.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// What a raw input event means to the host loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
    /// Jump while running, restart otherwise.
    Action,
    Quit,
    /// Anything else, including key releases and mouse motion.
    Ignore,
}

pub fn map_key(key: KeyEvent) -> HostAction {
    // Windows reports press and release; only presses count
    if key.kind == KeyEventKind::Release {
        return HostAction::Ignore;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => HostAction::Quit,
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => HostAction::Action,
        KeyCode::Char('w') | KeyCode::Char('W') => HostAction::Action,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => HostAction::Quit,
        _ => HostAction::Ignore,
    }
}

pub fn map_mouse(mouse: MouseEvent) -> HostAction {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => HostAction::Action,
        _ => HostAction::Ignore,
    }
}

pub fn map_event(event: &Event) -> HostAction {
    match event {
        Event::Key(key) => map_key(*key),
        Event::Mouse(mouse) => map_mouse(*mouse),
        _ => HostAction::Ignore,
    }
}
