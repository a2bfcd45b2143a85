//! Response types for the `commentThreads.list` endpoint.
//!
//! Only the subset of each resource that the analyzer consumes is modeled;
//! unknown fields are ignored during deserialization. Wire names are
//! camelCase per the Google API conventions.

use serde::Deserialize;
use ytca_core::Comment;

/// One page of comment threads.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadListResponse {
    /// Threads on this page, in API order.
    #[serde(default)]
    pub items: Vec<CommentThread>,
    /// Continuation token. Absent on the last page.
    pub next_page_token: Option<String>,
    /// Paging metadata.
    pub page_info: Option<PageInfo>,
}

/// Paging metadata attached to list responses.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total_results: u64,
    pub results_per_page: u64,
}

/// A `commentThread` resource: one top-level comment plus reply metadata.
#[derive(Debug, Deserialize)]
pub struct CommentThread {
    pub snippet: CommentThreadSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadSnippet {
    pub top_level_comment: TopLevelComment,
}

#[derive(Debug, Deserialize)]
pub struct TopLevelComment {
    pub snippet: CommentSnippet,
}

/// The fields consumed from a comment's snippet object.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentSnippet {
    pub text_display: String,
    pub author_display_name: String,
    pub published_at: String,
    #[serde(default)]
    pub like_count: u64,
}

impl From<CommentThread> for Comment {
    fn from(thread: CommentThread) -> Self {
        let snippet = thread.snippet.top_level_comment.snippet;
        Comment {
            text: snippet.text_display,
            author: snippet.author_display_name,
            published_at: snippet.published_at,
            like_count: snippet.like_count,
        }
    }
}

/// The standard Google API error envelope returned on non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorEnvelope {
    pub(crate) error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub(crate) message: String,
    #[serde(default)]
    pub(crate) errors: Vec<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorDetail {
    pub(crate) reason: Option<String>,
}
