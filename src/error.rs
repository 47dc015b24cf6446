//! Error types for block-extract.
//!
//! The extraction core itself only fails on a rejected frequency window
//! (and only when `Options::strict_window` is set). Every other variant
//! belongs to the collaborators around it: fetching, storing, serializing.

/// Error type for extraction and its collaborators.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `min_count` is greater than `max_count` with strict window checking enabled.
    #[error("Invalid frequency window: min_count {min_count} > max_count {max_count}")]
    InvalidWindow {
        /// Lower bound that was supplied.
        min_count: i64,
        /// Upper bound that was supplied.
        max_count: i64,
    },

    /// The document could not be fetched (transport failure, timeout, unreadable body).
    #[error("Fetching {url} failed: {reason}")]
    Fetch {
        /// URL that was requested.
        url: String,
        /// Underlying transport error, rendered.
        reason: String,
    },

    /// The server answered with a non-success status.
    #[error("Fetching {url} returned HTTP {status}")]
    HttpStatus {
        /// URL that was requested.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// The document URL could not be parsed or is not http(s).
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Writing the rendered result failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization failed.
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
