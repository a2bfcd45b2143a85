//! Naive keyword sentiment analysis for YouTube comments.
//!
//! Each comment is classified by case-insensitive substring overlap against
//! two fixed keyword sets, then aggregated in a single pass into an
//! [`AnalysisResult`] holding per-class tallies, two-decimal percentage
//! strings, and the first comment with the maximum like count.

pub mod analyzer;
pub mod classifier;
pub mod types;

pub use analyzer::analyze_comments;
pub use classifier::{classify, Sentiment};
pub use types::AnalysisResult;
