//! Main event loop: input, fetch outcomes, and the load-more timer

use anyhow::Result;
use std::time::Duration;

use crossterm::event;

use crate::constants::{FETCH_ERROR_MSG, LOAD_MORE_DELAY_MS};
use crate::input::{InputResult, handle_input};

use super::App;
use super::render_thread::RenderThread;

impl App {
    pub(crate) async fn event_loop(&mut self, render_thread: &RenderThread) -> Result<()> {
        // Initial load, using the search text restored from the store.
        self.dispatch_load();

        loop {
            // Process fetch outcomes FIRST (non-blocking) - prioritize responsiveness
            if self.process_fetch_outcomes() {
                self.dirty = true;
            }

            // Clear an expired error bar. The full-screen error state (no
            // posts yet) persists until the user retries.
            if !self.state.posts.is_empty() && self.state.status.clear_error_if_expired() {
                self.dirty = true;
            }

            // Reveal the next page once the load-more delay has elapsed
            if self.process_pending_load_more() {
                self.dirty = true;
            }

            // Render only when dirty (non-blocking - sends to render thread)
            if self.dirty {
                render_thread.render(self.state.clone());
                self.dirty = false;
            }

            // Handle input (adaptive timeout: faster while something is pending)
            let poll_timeout = if self.state.status.loading
                || self.state.status.refreshing
                || self.state.pagination.is_pending()
            {
                50
            } else {
                150
            };
            if event::poll(Duration::from_millis(poll_timeout))? {
                let evt = event::read()?;
                // Any input event (including resize) requires re-render
                self.dirty = true;
                match handle_input(evt, &self.state, &self.bindings) {
                    InputResult::Quit => break,
                    InputResult::Action(action) => self.handle_action(action),
                    InputResult::Char(c) => self.handle_char(c),
                    InputResult::Backspace => self.handle_backspace(),
                    InputResult::Continue => {}
                }
            }

            // Arm the reveal delay when the cursor is near the bottom of the
            // visible list and more filtered posts remain.
            if self.state.needs_more_posts() {
                self.start_load_more();
                self.dirty = true;
            }
        }

        Ok(())
    }

    /// Drain fetch outcomes from spawned loads. Returns true if any were
    /// processed.
    fn process_fetch_outcomes(&mut self) -> bool {
        let mut had_outcomes = false;

        while let Ok(outcome) = self.fetch_rx.try_recv() {
            had_outcomes = true;

            // A newer load was dispatched while this one was in flight; its
            // result would clobber fresher state, so drop it.
            if outcome.generation != self.fetch_generation {
                tracing::debug!(
                    generation = outcome.generation,
                    current = self.fetch_generation,
                    "dropping stale fetch outcome"
                );
                continue;
            }

            match outcome.result {
                Ok(posts) => {
                    tracing::info!(count = posts.len(), "fetched posts");
                    self.state.apply_fetched(posts);
                    self.state.last_fetch = Some(chrono::Utc::now().timestamp());
                }
                Err(e) => {
                    tracing::error!("fetch failed: {e}");
                    self.state.status.set_error(FETCH_ERROR_MSG);
                }
            }

            // The load has settled either way.
            self.state.status.loading = false;
            self.state.status.refreshing = false;
        }

        had_outcomes
    }

    /// Increment the page once the reveal delay has elapsed. Returns true if
    /// a page was revealed.
    fn process_pending_load_more(&mut self) -> bool {
        if let Some(since) = self.state.pagination.pending_since
            && since.elapsed() >= Duration::from_millis(LOAD_MORE_DELAY_MS)
        {
            self.state.next_page();
            true
        } else {
            false
        }
    }
}
