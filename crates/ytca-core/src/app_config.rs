/// Runtime configuration for a YTCA run.
#[derive(Clone)]
pub struct AppConfig {
    /// YouTube Data API v3 key sent with every comment request.
    pub api_key: String,
    /// Default tracing filter used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Per-request timeout for API calls, in seconds.
    pub request_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"[redacted]")
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}
