//! UI rendering: screens, cards, overlays, and theming

mod card;
mod detail;
mod format;
mod list;
mod status_bar;
pub mod theme;
mod widgets;

use ratatui::Frame;

use crate::app::state::AppState;

pub fn render(frame: &mut Frame, state: &AppState) {
    if state.status.loading {
        list::render_loading(frame);
    } else if state.status.error.is_some() && state.posts.is_empty() {
        list::render_error_screen(frame, state);
    } else {
        list::render_list(frame, state);
    }

    // The detail overlay is independent of the branch above: it renders
    // whenever a selection exists.
    if let Some(post) = state.modal.selected() {
        detail::render_detail(frame, post);
    }
}
