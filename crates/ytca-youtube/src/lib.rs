//! YouTube Data API v3 client.
//!
//! Fetches every top-level comment for a video via `commentThreads.list`,
//! following continuation tokens until the listing is exhausted. Pages
//! deserialize into a thin typed subset of the wire format and flatten into
//! [`ytca_core::Comment`] records, ready for analysis.

pub mod client;
pub mod error;
pub mod types;

pub use client::YoutubeClient;
pub use error::YoutubeError;
