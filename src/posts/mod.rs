//! Post records and the HTTP client that fetches them.

mod client;
mod types;

pub use client::{FetchError, FetchOutcome, PostClient};
pub use types::Post;
