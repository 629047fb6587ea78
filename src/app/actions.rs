//! Action handling: load, search, refresh, pagination, selection

use std::sync::Arc;
use std::time::Instant;

use crate::input::Action;
use crate::posts::FetchOutcome;

use super::App;

impl App {
    pub(crate) fn handle_action(&mut self, action: Action) {
        match action {
            Action::Up => self.state.move_up(),
            Action::Down => self.state.move_down(),
            Action::Top => self.state.jump_top(),
            Action::Bottom => self.state.jump_bottom(),
            Action::HalfPageDown => self.state.half_page_down(),
            Action::HalfPageUp => self.state.half_page_up(),
            Action::Open => self.state.select_under_cursor(),
            Action::CloseModal => self.state.deselect(),
            Action::Search => self.state.search.input_active = true,
            Action::ExitSearch => self.state.search.input_active = false,
            Action::ClearSearch => self.apply_search(String::new()),
            Action::Refresh => self.refresh(),
            Action::Retry => self.dispatch_load(),
            // Quit is resolved in the event loop
            Action::Quit => {}
        }
    }

    /// A keystroke in search input mode.
    pub(crate) fn handle_char(&mut self, c: char) {
        let mut query = self.state.search.query.clone();
        query.push(c);
        self.apply_search(query);
    }

    pub(crate) fn handle_backspace(&mut self) {
        let mut query = self.state.search.query.clone();
        query.pop();
        self.apply_search(query);
    }

    /// Re-filter the cached posts for `query` and persist it. Searching never
    /// refetches from the API.
    fn apply_search(&mut self, query: String) {
        self.state.apply_search(query.clone());
        self.persist_search(query);
    }

    /// Detached persist: a failed write is logged, never surfaced, and never
    /// delays the keystroke that triggered it.
    fn persist_search(&self, text: String) {
        let store = Arc::clone(&self.store);
        tokio::spawn(async move {
            if let Err(e) = store.save_search_text(&text).await {
                tracing::warn!("failed to persist search text: {e:#}");
            }
        });
    }

    /// Dispatch a fetch for the full post set. The outcome arrives through
    /// the fetch channel, tagged with a fresh generation.
    pub(crate) fn dispatch_load(&mut self) {
        self.state.status.clear_error();
        self.fetch_generation += 1;

        let generation = self.fetch_generation;
        let client = Arc::clone(&self.client);
        let tx = self.fetch_tx.clone();
        tokio::spawn(async move {
            let result = client.fetch_posts().await;
            // The receiver only drops on shutdown; nothing left to notify.
            tx.send(FetchOutcome { generation, result }).ok();
        });
    }

    fn refresh(&mut self) {
        self.state.status.refreshing = true;
        self.state.pagination.reset();
        self.dispatch_load();
    }

    pub(crate) fn start_load_more(&mut self) {
        if self.state.can_load_more() {
            self.state.pagination.pending_since = Some(Instant::now());
        }
    }
}
