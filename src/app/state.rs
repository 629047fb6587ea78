//! Application state types and pure transitions
//!
//! The fetch/filter/paginate pipeline lives here as plain data transforms:
//! `posts` holds the last fetch result, `filtered` the subsequence matching
//! the current query, and `displayed()` the prefix revealed by the page
//! counter. The event loop drives side effects; everything in this module is
//! synchronous and unit-testable. UI imports from here, not vice versa.

use std::time::Instant;

use crate::constants::{ERROR_TTL_SECS, LOAD_MORE_THRESHOLD, PAGE_SIZE};
use crate::posts::Post;

/// Detail overlay state - at most one post is selected at a time.
#[derive(Debug, Clone, Default)]
pub enum ModalState {
    #[default]
    None,
    Detail(Post),
}

impl ModalState {
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }

    pub fn selected(&self) -> Option<&Post> {
        match self {
            Self::Detail(post) => Some(post),
            Self::None => None,
        }
    }
}

/// Loading, error, and refresh flags for the current load cycle.
#[derive(Debug, Clone, Default)]
pub struct StatusState {
    /// Initial fetch in flight; cleared once the first load settles.
    pub loading: bool,
    /// Manual refresh in flight.
    pub refreshing: bool,
    pub error: Option<String>,
    pub error_time: Option<Instant>,
}

impl StatusState {
    pub fn set_error(&mut self, error: impl ToString) {
        self.error = Some(error.to_string());
        self.error_time = Some(Instant::now());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
        self.error_time = None;
    }

    /// Clear error if TTL expired. Returns true if error was cleared.
    pub fn clear_error_if_expired(&mut self) -> bool {
        if let Some(time) = self.error_time
            && time.elapsed().as_secs() >= ERROR_TTL_SECS
        {
            self.clear_error();
            true
        } else {
            false
        }
    }
}

/// Search input state.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub query: String,
    /// Whether keystrokes currently edit the query.
    pub input_active: bool,
}

/// Pagination cursor over the filtered list.
#[derive(Debug, Clone)]
pub struct PaginationState {
    /// 1-based page counter; `displayed()` reveals `page * PAGE_SIZE` posts.
    pub page: usize,
    /// Set while the reveal delay of a load-more trigger is running.
    pub pending_since: Option<Instant>,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page: 1,
            pending_since: None,
        }
    }
}

impl PaginationState {
    pub fn reset(&mut self) {
        self.page = 1;
    }

    pub fn is_pending(&self) -> bool {
        self.pending_since.is_some()
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Full post set from the last successful fetch.
    pub posts: Vec<Post>,
    /// Subsequence of `posts` whose titles match the query, order preserved.
    pub filtered: Vec<Post>,
    pub search: SearchState,
    pub pagination: PaginationState,
    pub status: StatusState,
    pub modal: ModalState,
    /// Cursor into the displayed list.
    pub cursor: usize,
    /// Unix timestamp of the last successful fetch.
    pub last_fetch: Option<i64>,
    /// Time format for the status bar, from config.
    pub time_format: String,
}

impl AppState {
    /// Prefix of the filtered posts revealed by the page counter.
    pub fn displayed(&self) -> &[Post] {
        &self.filtered[..self.displayed_len()]
    }

    pub fn displayed_len(&self) -> usize {
        (self.pagination.page * PAGE_SIZE).min(self.filtered.len())
    }

    /// Replace the post set after a successful fetch and re-run the filter
    /// with the current query.
    pub fn apply_fetched(&mut self, posts: Vec<Post>) {
        self.posts = posts;
        self.filtered = filter_posts(&self.posts, &self.search.query);
        self.pagination.reset();
        self.clamp_cursor();
    }

    /// Update the query and recompute the filter from the cached post set.
    /// Never touches `posts`; searching does not refetch.
    pub fn apply_search(&mut self, query: String) {
        self.search.query = query;
        self.filtered = filter_posts(&self.posts, &self.search.query);
        self.pagination.reset();
        self.cursor = 0;
    }

    /// True while more filtered posts exist than are displayed and no reveal
    /// delay is already running.
    pub fn can_load_more(&self) -> bool {
        self.displayed_len() < self.filtered.len() && !self.pagination.is_pending()
    }

    /// True when the cursor is close enough to the end of the visible list
    /// that the next page should be requested.
    pub fn needs_more_posts(&self) -> bool {
        self.can_load_more()
            && self.cursor + LOAD_MORE_THRESHOLD >= self.displayed_len().saturating_sub(1)
    }

    /// Reveal the next page. Called once the load-more delay elapses.
    pub fn next_page(&mut self) {
        self.pagination.page += 1;
        self.pagination.pending_since = None;
    }

    pub fn select_under_cursor(&mut self) {
        if let Some(post) = self.displayed().get(self.cursor) {
            self.modal = ModalState::Detail(post.clone());
        }
    }

    pub fn deselect(&mut self) {
        self.modal = ModalState::None;
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.displayed_len() {
            self.cursor += 1;
        }
    }

    pub fn jump_top(&mut self) {
        self.cursor = 0;
    }

    pub fn jump_bottom(&mut self) {
        self.cursor = self.displayed_len().saturating_sub(1);
    }

    pub fn half_page_down(&mut self) {
        let max = self.displayed_len().saturating_sub(1);
        self.cursor = (self.cursor + PAGE_SIZE / 2).min(max);
    }

    pub fn half_page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(PAGE_SIZE / 2);
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.displayed_len().saturating_sub(1));
    }
}

/// Case-insensitive title substring filter. An empty query yields the full
/// set unchanged.
pub fn filter_posts(posts: &[Post], query: &str) -> Vec<Post> {
    if query.is_empty() {
        return posts.to_vec();
    }
    let needle = query.to_lowercase();
    posts
        .iter()
        .filter(|post| post.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u64, title: &str) -> Post {
        Post {
            id,
            title: title.to_string(),
            body: format!("body {id}"),
        }
    }

    fn many_posts(n: u64) -> Vec<Post> {
        (1..=n)
            .map(|i| post(i, &format!("post number {i}")))
            .collect()
    }

    #[test]
    fn empty_query_filters_nothing() {
        let posts = many_posts(5);
        assert_eq!(filter_posts(&posts, ""), posts);
    }

    #[test]
    fn filter_is_case_insensitive_substring_on_title() {
        let posts = vec![post(1, "Hello World"), post(2, "Goodbye")];
        let filtered = filter_posts(&posts, "hello");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
        // matches anywhere in the title, any case
        assert_eq!(filter_posts(&posts, "BYE").len(), 1);
        // bodies are not searched
        assert!(filter_posts(&posts, "body").is_empty());
    }

    #[test]
    fn filter_preserves_relative_order() {
        let posts = vec![post(1, "alpha one"), post(2, "beta"), post(3, "alpha two")];
        let ids: Vec<u64> = filter_posts(&posts, "alpha").iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn displayed_is_clamped_prefix_of_filtered() {
        let mut state = AppState::default();
        state.apply_fetched(many_posts(25));
        assert_eq!(state.displayed_len(), 10);
        state.pagination.page = 3;
        assert_eq!(state.displayed_len(), 25);
        state.pagination.page = 99;
        assert_eq!(state.displayed_len(), 25);
        assert_eq!(state.displayed(), &state.filtered[..]);
    }

    #[test]
    fn load_more_walkthrough_over_25_posts() {
        let mut state = AppState::default();
        state.apply_fetched(many_posts(25));
        assert_eq!(state.displayed_len(), 10);

        assert!(state.can_load_more());
        state.next_page();
        assert_eq!(state.displayed_len(), 20);

        assert!(state.can_load_more());
        state.next_page();
        assert_eq!(state.displayed_len(), 25);

        // everything revealed: a third trigger is a no-op
        assert!(!state.can_load_more());
    }

    #[test]
    fn load_more_is_guarded_while_delay_is_pending() {
        let mut state = AppState::default();
        state.apply_fetched(many_posts(25));
        state.pagination.pending_since = Some(Instant::now());
        assert!(!state.can_load_more());
        assert!(!state.needs_more_posts());
    }

    #[test]
    fn search_resets_page_and_refilters_cached_posts() {
        let mut state = AppState::default();
        state.apply_fetched(many_posts(25));
        state.pagination.page = 3;
        state.apply_search("number 1".to_string());
        assert_eq!(state.pagination.page, 1);
        // "number 1" matches post 1 and posts 10-19
        assert_eq!(state.filtered.len(), 11);
        // the full set is untouched
        assert_eq!(state.posts.len(), 25);
    }

    #[test]
    fn fetched_results_are_filtered_by_the_current_query() {
        let mut state = AppState::default();
        state.apply_search("hello".to_string());
        state.apply_fetched(vec![post(1, "Hello World"), post(2, "Goodbye")]);
        assert_eq!(state.filtered.len(), 1);
        assert_eq!(state.displayed()[0].id, 1);
    }

    #[test]
    fn failed_fetch_leaves_prior_posts_untouched() {
        let mut state = AppState::default();
        state.apply_fetched(many_posts(5));
        state.status.set_error("fetch failed");
        assert_eq!(state.posts.len(), 5);
        assert_eq!(state.filtered.len(), 5);
        assert!(state.status.error.is_some());
    }

    #[test]
    fn select_and_deselect_transitions() {
        let mut state = AppState::default();
        state.apply_fetched(many_posts(3));
        state.cursor = 1;
        state.select_under_cursor();
        assert_eq!(state.modal.selected().map(|p| p.id), Some(2));
        assert!(state.modal.is_active());
        state.deselect();
        assert!(state.modal.selected().is_none());
    }

    #[test]
    fn select_on_empty_list_is_a_no_op() {
        let mut state = AppState::default();
        state.select_under_cursor();
        assert!(!state.modal.is_active());
    }

    #[test]
    fn cursor_movement_is_bounded_by_displayed() {
        let mut state = AppState::default();
        state.apply_fetched(many_posts(3));
        state.move_up();
        assert_eq!(state.cursor, 0);
        state.jump_bottom();
        assert_eq!(state.cursor, 2);
        state.move_down();
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn refetch_clamps_cursor_to_new_displayed_range() {
        let mut state = AppState::default();
        state.apply_fetched(many_posts(25));
        state.pagination.page = 2;
        state.cursor = 15;
        state.apply_fetched(many_posts(3));
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn needs_more_posts_near_end_of_visible_list() {
        let mut state = AppState::default();
        state.apply_fetched(many_posts(25));
        assert!(!state.needs_more_posts());
        state.cursor = 7;
        assert!(state.needs_more_posts());
    }
}
