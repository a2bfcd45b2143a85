//! Shared domain types and configuration for YTCA.
//!
//! Holds the [`Comment`] record produced by the fetcher and consumed by the
//! analyzer, plus the environment-driven application configuration used to
//! bootstrap a run.

pub mod app_config;
pub mod comment;
pub mod config;
pub mod error;

pub use app_config::AppConfig;
pub use comment::Comment;
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
