use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use super::keybindings::{Action, KeyBindings};
use crate::app::state::AppState;

pub enum InputResult {
    Continue,
    Quit,
    Action(Action),
    Char(char),
    Backspace,
}

pub fn handle_input(event: Event, state: &AppState, bindings: &KeyBindings) -> InputResult {
    match event {
        Event::Key(key_event) => handle_key(key_event, state, bindings),
        _ => InputResult::Continue,
    }
}

fn handle_key(key: KeyEvent, state: &AppState, bindings: &KeyBindings) -> InputResult {
    // Ctrl-C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return InputResult::Quit;
    }

    // Detail overlay: any dismiss key closes it, everything else is swallowed
    if state.modal.is_active() {
        return handle_modal_input(key);
    }

    // Full-screen error state: only retry and quit are meaningful
    if is_error_screen(state) {
        return handle_error_input(key);
    }

    // Search input mode: keystrokes edit the query
    if state.search.input_active {
        return handle_search_input(key);
    }

    // Check for mapped action
    if let Some(action) = bindings.get(&key) {
        if action == Action::Quit {
            return InputResult::Quit;
        }
        return InputResult::Action(action);
    }

    InputResult::Continue
}

fn handle_modal_input(key: KeyEvent) -> InputResult {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
            InputResult::Action(Action::CloseModal)
        }
        _ => InputResult::Continue,
    }
}

/// The error screen replaces the whole view only while no posts have ever
/// been loaded; after that, fetch errors show as a bar over the list.
fn is_error_screen(state: &AppState) -> bool {
    state.status.error.is_some() && state.posts.is_empty()
}

fn handle_error_input(key: KeyEvent) -> InputResult {
    match key.code {
        KeyCode::Char('r') | KeyCode::Enter => InputResult::Action(Action::Retry),
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        _ => InputResult::Continue,
    }
}

fn handle_search_input(key: KeyEvent) -> InputResult {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => InputResult::Action(Action::ExitSearch),
        KeyCode::Backspace => InputResult::Backspace,
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            InputResult::Action(Action::ClearSearch)
        }
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            InputResult::Char(c)
        }
        _ => InputResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::ModalState;
    use crate::constants::FETCH_ERROR_MSG;
    use crate::posts::Post;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn sample_post() -> Post {
        Post {
            id: 1,
            title: "hello".to_string(),
            body: "world".to_string(),
        }
    }

    #[test]
    fn slash_enters_search_mode() {
        let state = AppState::default();
        let bindings = KeyBindings::new();
        let result = handle_input(key(KeyCode::Char('/')), &state, &bindings);
        assert!(matches!(result, InputResult::Action(Action::Search)));
    }

    #[test]
    fn chars_edit_the_query_in_search_mode() {
        let mut state = AppState::default();
        state.search.input_active = true;
        let bindings = KeyBindings::new();

        let result = handle_input(key(KeyCode::Char('q')), &state, &bindings);
        assert!(matches!(result, InputResult::Char('q')));

        let result = handle_input(key(KeyCode::Backspace), &state, &bindings);
        assert!(matches!(result, InputResult::Backspace));

        let result = handle_input(key(KeyCode::Esc), &state, &bindings);
        assert!(matches!(result, InputResult::Action(Action::ExitSearch)));
    }

    #[test]
    fn modal_swallows_keys_and_closes_on_dismiss() {
        let mut state = AppState::default();
        state.modal = ModalState::Detail(sample_post());
        let bindings = KeyBindings::new();

        let result = handle_input(key(KeyCode::Esc), &state, &bindings);
        assert!(matches!(result, InputResult::Action(Action::CloseModal)));

        let result = handle_input(key(KeyCode::Char('j')), &state, &bindings);
        assert!(matches!(result, InputResult::Continue));
    }

    #[test]
    fn error_screen_maps_r_to_retry() {
        let mut state = AppState::default();
        state.status.set_error(FETCH_ERROR_MSG);
        let bindings = KeyBindings::new();

        let result = handle_input(key(KeyCode::Char('r')), &state, &bindings);
        assert!(matches!(result, InputResult::Action(Action::Retry)));
    }

    #[test]
    fn error_bar_over_posts_keeps_normal_bindings() {
        let mut state = AppState::default();
        state.apply_fetched(vec![sample_post()]);
        state.status.set_error(FETCH_ERROR_MSG);
        let bindings = KeyBindings::new();

        let result = handle_input(key(KeyCode::Char('j')), &state, &bindings);
        assert!(matches!(result, InputResult::Action(Action::Down)));
    }
}
