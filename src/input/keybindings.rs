use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Navigation
    Up,
    Down,
    Top,
    Bottom,
    HalfPageUp,
    HalfPageDown,

    // Actions
    Open,
    CloseModal,
    Search,
    ExitSearch,
    ClearSearch,
    Refresh,
    Retry,
    Quit,
}

pub struct KeyBindings {
    bindings: HashMap<KeyEvent, Action>,
}

impl KeyBindings {
    pub fn new() -> Self {
        let mut map = HashMap::new();

        // Navigation (vim keys and arrows both work)
        map.insert(key('j'), Action::Down);
        map.insert(key('k'), Action::Up);
        map.insert(key_code(KeyCode::Down), Action::Down);
        map.insert(key_code(KeyCode::Up), Action::Up);
        map.insert(key('g'), Action::Top);
        map.insert(shift_key('G'), Action::Bottom);
        map.insert(ctrl_key('d'), Action::HalfPageDown);
        map.insert(ctrl_key('u'), Action::HalfPageUp);

        // Actions
        map.insert(key_code(KeyCode::Enter), Action::Open);
        map.insert(key('q'), Action::Quit);
        map.insert(key('/'), Action::Search);
        map.insert(key('r'), Action::Refresh);
        map.insert(key('x'), Action::ClearSearch);

        Self { bindings: map }
    }

    pub fn get(&self, event: &KeyEvent) -> Option<Action> {
        self.bindings.get(event).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

fn shift_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::SHIFT)
}

fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn key_code(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}
