use serde::{Deserialize, Serialize};

/// A single top-level comment on a video.
///
/// Produced by the fetcher in API order and treated as immutable from then
/// on. Field names serialize in camelCase so report and chunk files match
/// the documented output contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Display text of the comment.
    pub text: String,
    /// Display name of the comment's author.
    pub author: String,
    /// Publication timestamp exactly as the API returned it (RFC 3339
    /// string). Passed through as-is, never parsed.
    pub published_at: String,
    /// Like count at fetch time.
    #[serde(default)]
    pub like_count: u64,
}
