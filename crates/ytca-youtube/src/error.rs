use thiserror::Error;

/// Errors returned by the YouTube Data API client.
#[derive(Debug, Error)]
pub enum YoutubeError {
    /// Network-level failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API rejected the request. Covers invalid credentials, unknown
    /// videos, disabled comments, and exhausted quota; the message carries
    /// the API's reason code when one was supplied.
    #[error("YouTube API error: {0}")]
    Api(String),

    /// A success response did not match the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
