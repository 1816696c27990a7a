//! Error types shared by the lyrics pipeline.
//!
//! "Song not found" is not an error: the resolver and fetcher report it as
//! `Ok(None)`. Everything here aborts the title it happened on.

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LyricsError>;

/// Longest slice of a failed response body kept in a [`LyricsError::Status`].
const BODY_EXCERPT_CHARS: usize = 200;

#[derive(Debug, Error)]
pub enum LyricsError {
    /// The request never produced a response (connection, DNS, timeout).
    #[error("Request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("{url} returned {status}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },

    /// The JSON body did not have the expected shape.
    #[error("Unexpected response from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The song page has no element holding the lyrics.
    #[error("No lyrics element found on {url}")]
    LyricsElementNotFound { url: String },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl LyricsError {
    pub fn status(url: &str, status: StatusCode, body: &str) -> Self {
        Self::Status {
            url: url.to_string(),
            status,
            body: body.chars().take(BODY_EXCERPT_CHARS).collect(),
        }
    }
}
