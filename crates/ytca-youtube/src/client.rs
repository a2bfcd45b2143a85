//! HTTP client for the YouTube Data API v3.
//!
//! Wraps `reqwest` with API key management, typed response deserialization,
//! and the continuation-token loop for `commentThreads.list`. Non-2xx
//! responses are decoded from the Google error envelope and surfaced as
//! [`YoutubeError::Api`].

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use ytca_core::Comment;

use crate::error::YoutubeError;
use crate::types::{ApiErrorEnvelope, CommentThreadListResponse};

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3/";

/// Comment threads requested per page. The API caps `maxResults` at 100.
const PAGE_SIZE: u32 = 100;

/// Client for the YouTube Data API v3 comment endpoints.
///
/// Manages the HTTP client, API key, and base URL. Use [`YoutubeClient::new`]
/// for production or [`YoutubeClient::with_base_url`] to point at a mock
/// server in tests.
pub struct YoutubeClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl YoutubeClient {
    /// Creates a new client pointed at the production YouTube Data API.
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, YoutubeError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`YoutubeError::Api`] if `base_url` is not
    /// a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, YoutubeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("ytca/0.1 (comment-analysis)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // join() treats the last segment as a directory and appends endpoint
        // names under it rather than replacing it.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| YoutubeError::Api(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Fetches one page of top-level comment threads for a video.
    ///
    /// Calls `commentThreads.list` with `part=snippet` and up to
    /// [`PAGE_SIZE`] results; pass the previous page's continuation token to
    /// resume where that page left off. Replies to comments are not part of
    /// the listing.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::Api`] if the API rejects the request (invalid key,
    ///   unknown video, comments disabled, quota exhausted).
    /// - [`YoutubeError::Http`] on network failure.
    /// - [`YoutubeError::Deserialize`] if a success response does not match
    ///   the expected shape.
    pub async fn list_comment_threads(
        &self,
        video_id: &str,
        page_token: Option<&str>,
    ) -> Result<CommentThreadListResponse, YoutubeError> {
        let max_results = PAGE_SIZE.to_string();
        let mut params = vec![
            ("part", "snippet"),
            ("videoId", video_id),
            ("maxResults", max_results.as_str()),
        ];
        if let Some(token) = page_token {
            params.push(("pageToken", token));
        }

        let url = self.build_url("commentThreads", &params)?;
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Self::api_error(status, &body));
        }

        serde_json::from_str(&body).map_err(|e| YoutubeError::Deserialize {
            context: format!("commentThreads(videoId={video_id})"),
            source: e,
        })
    }

    /// Fetches every top-level comment for a video, following continuation
    /// tokens until the API stops returning one.
    ///
    /// Comments are flattened across pages in API order. The whole sequence
    /// is buffered in memory; a failed page aborts the fetch with no retry
    /// and no partial result.
    ///
    /// # Errors
    ///
    /// Returns the first [`YoutubeError`] hit while requesting or decoding a
    /// page. The failure is logged before being returned.
    pub async fn fetch_all_comments(&self, video_id: &str) -> Result<Vec<Comment>, YoutubeError> {
        let mut comments = Vec::new();
        let mut page_token: Option<String> = None;
        let mut pages: u32 = 0;

        loop {
            let page = match self
                .list_comment_threads(video_id, page_token.as_deref())
                .await
            {
                Ok(page) => page,
                Err(e) => {
                    tracing::error!(video_id, page = pages + 1, error = %e, "comment fetch failed");
                    return Err(e);
                }
            };
            pages += 1;

            if pages == 1 {
                if let Some(info) = &page.page_info {
                    tracing::debug!(
                        video_id,
                        total_results = info.total_results,
                        "opened comment listing"
                    );
                }
            }

            comments.extend(page.items.into_iter().map(Comment::from));
            page_token = page.next_page_token;
            if page_token.is_none() {
                break;
            }
        }

        tracing::debug!(video_id, pages, count = comments.len(), "collected comment pages");
        Ok(comments)
    }

    /// Builds the full request URL with properly percent-encoded query
    /// parameters.
    ///
    /// Joins the endpoint name onto the stored base URL, then appends the
    /// extra parameters and the API key via [`Url::query_pairs_mut`] so all
    /// values are safely encoded.
    fn build_url(&self, endpoint: &str, extra: &[(&str, &str)]) -> Result<Url, YoutubeError> {
        let mut url = self
            .base_url
            .join(endpoint)
            .map_err(|e| YoutubeError::Api(format!("invalid endpoint '{endpoint}': {e}")))?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        Ok(url)
    }

    /// Maps a non-success response to [`YoutubeError::Api`].
    ///
    /// The body normally carries the Google error envelope
    /// `{"error": {"message", "errors": [{"reason"}]}}`; when it does not
    /// parse, the raw body is carried instead so the failure stays
    /// diagnosable.
    fn api_error(status: StatusCode, body: &str) -> YoutubeError {
        match serde_json::from_str::<ApiErrorEnvelope>(body) {
            Ok(envelope) => {
                let reason = envelope
                    .error
                    .errors
                    .into_iter()
                    .find_map(|detail| detail.reason);
                let message = match reason {
                    Some(reason) => format!("{reason}: {}", envelope.error.message),
                    None => envelope.error.message,
                };
                YoutubeError::Api(format!("{message} (HTTP {status})"))
            }
            Err(_) => YoutubeError::Api(format!("request failed with HTTP {status}: {body}")),
        }
    }
}
