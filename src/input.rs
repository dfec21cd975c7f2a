#![warn(clippy::all, clippy::pedantic)]

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Escape,
    Enter,
    /// Always lower case.
    Char(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Pressed(Key),
    Released(Key),
    CloseRequested,
}

/// Translates a terminal key event. Ctrl+C is a close request; keys the game
/// has no use for map to `None`.
#[must_use]
pub fn map_key_event(event: &KeyEvent) -> Option<InputEvent> {
    if event.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(event.code, KeyCode::Char('c' | 'C'))
    {
        return Some(InputEvent::CloseRequested);
    }

    let key = match event.code {
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Esc => Key::Escape,
        KeyCode::Enter => Key::Enter,
        KeyCode::Char(c) => Key::Char(c.to_ascii_lowercase()),
        _ => return None,
    };

    match event.kind {
        KeyEventKind::Release => Some(InputEvent::Released(key)),
        KeyEventKind::Press | KeyEventKind::Repeat => Some(InputEvent::Pressed(key)),
    }
}

/// Keyboard state seen by one frame: presses since the last executed frame
/// and keys currently held down.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pressed: HashSet<Key>,
    held: HashSet<Key>,
    close_requested: bool,
}

impl FrameInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Pressed(key) => {
                // Auto-repeat of a held key is not a new press
                if self.held.insert(key) {
                    self.pressed.insert(key);
                }
            }
            InputEvent::Released(key) => {
                self.held.remove(&key);
            }
            InputEvent::CloseRequested => self.close_requested = true,
        }
    }

    /// Edge: the key went down since the last executed frame.
    #[must_use]
    pub fn was_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    /// Level: the key is down right now.
    #[must_use]
    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    #[must_use]
    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    /// Forgets presses once a frame has consumed them.
    pub fn end_frame(&mut self) {
        self.pressed.clear();
        self.close_requested = false;
    }

    /// For terminals that never report key releases.
    pub fn release_all(&mut self) {
        self.held.clear();
    }
}
