//! Application-wide constants for tuning and configuration
//!
//! Centralizes magic numbers to make them discoverable and configurable.

/// Number of posts revealed per pagination step.
pub const PAGE_SIZE: usize = 10;

/// Delay in milliseconds between a load-more trigger and revealing the next page.
pub const LOAD_MORE_DELAY_MS: u64 = 500;

/// Rows from the end of the visible list at which the next page is requested.
pub const LOAD_MORE_THRESHOLD: usize = 2;

/// Store key under which the search text is persisted between runs.
pub const SEARCH_TEXT_KEY: &str = "saved_search_text";

/// Error message shown when fetching posts fails, regardless of cause.
pub const FETCH_ERROR_MSG: &str = "Unable to fetch posts. Check your network connection.";

/// Error bar display duration in seconds before auto-dismiss.
/// Applies only once posts are on screen; the full-screen error state
/// persists until the user retries.
pub const ERROR_TTL_SECS: u64 = 5;

/// Spinner animation frame duration in milliseconds.
pub const SPINNER_FRAME_MS: u128 = 80;

/// Maximum number of terminal rows a card title may occupy.
pub const CARD_TITLE_LINES: usize = 2;

/// Maximum number of terminal rows a card body may occupy.
pub const CARD_BODY_LINES: usize = 3;
