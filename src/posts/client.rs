//! HTTP client for the posts API.
//!
//! Fetches run as spawned tasks that report back to the event loop over a
//! channel, so a slow network never blocks input handling or rendering.

use std::time::Duration;

use thiserror::Error;

use super::Post;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Result of a spawned fetch, tagged with the load generation that dispatched
/// it so the event loop can discard stale responses.
#[derive(Debug)]
pub struct FetchOutcome {
    pub generation: u64,
    pub result: Result<Vec<Post>, FetchError>,
}

pub struct PostClient {
    http: reqwest::Client,
    base_url: String,
}

impl PostClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the full post collection. Any transport or server problem is an
    /// error; the caller decides how to surface it.
    pub async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        let url = format!("{}/posts", self.base_url);
        tracing::debug!("fetching posts from {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posts_deserialize_from_api_shape() {
        // The API includes a userId field we don't model; serde skips it.
        let json = r#"[
            {"userId": 1, "id": 1, "title": "sunt aut facere", "body": "quia et suscipit"},
            {"userId": 1, "id": 2, "title": "qui est esse", "body": "est rerum tempore"}
        ]"#;
        let posts: Vec<Post> = serde_json::from_str(json).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, 1);
        assert_eq!(posts[1].title, "qui est esse");
    }

    #[test]
    fn client_normalizes_trailing_slash() {
        let client = PostClient::new("https://example.com/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.base_url, "https://example.com");
    }
}
