//! Aggregated analysis types.

use serde::{Deserialize, Serialize};
use ytca_core::Comment;

/// Result of analyzing one video's comment sequence.
///
/// Counts are per sentiment class; percentages are pre-formatted with two
/// decimal places so the report renders them exactly as computed. Serialized
/// field names are camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Number of comments analyzed.
    pub total: u64,
    /// Comments with more positive than negative keyword hits.
    pub positive: u64,
    /// Comments with more negative than positive keyword hits.
    pub negative: u64,
    /// Comments whose keyword hits tied, including zero hits on both sides.
    pub neutral: u64,
    /// `100 * positive / total`, `"0.00"` when the input was empty.
    pub positive_percentage: String,
    /// `100 * negative / total`, `"0.00"` when the input was empty.
    pub negative_percentage: String,
    /// `100 * neutral / total`, `"0.00"` when the input was empty.
    pub neutral_percentage: String,
    /// First comment holding the maximum like count. `None` (serialized as
    /// `null`) when the input was empty or no comment has any likes.
    pub most_liked: Option<Comment>,
    /// Like count of `most_liked`, `0` when there is none.
    pub most_liked_count: u64,
}
