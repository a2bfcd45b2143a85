//! Single-pass aggregation over a comment sequence.

use ytca_core::Comment;

use crate::classifier::{classify, Sentiment};
use crate::types::AnalysisResult;

/// Analyze a comment sequence in one pass.
///
/// Classifies every comment, tallies the three sentiment classes, and
/// tracks the most-liked comment. The like comparison is strictly greater,
/// so the first comment holding the maximum wins ties and an input where
/// every like count is zero reports no most-liked comment at all.
///
/// An empty input yields all-zero tallies with `"0.00"` percentages.
#[must_use]
pub fn analyze_comments(comments: &[Comment]) -> AnalysisResult {
    let mut positive: u64 = 0;
    let mut negative: u64 = 0;
    let mut neutral: u64 = 0;
    let mut most_liked: Option<&Comment> = None;
    let mut most_liked_count: u64 = 0;

    for comment in comments {
        if comment.like_count > most_liked_count {
            most_liked_count = comment.like_count;
            most_liked = Some(comment);
        }

        match classify(&comment.text) {
            Sentiment::Positive => positive += 1,
            Sentiment::Negative => negative += 1,
            Sentiment::Neutral => neutral += 1,
        }
    }

    let total = comments.len() as u64;
    let result = AnalysisResult {
        total,
        positive,
        negative,
        neutral,
        positive_percentage: percentage(positive, total),
        negative_percentage: percentage(negative, total),
        neutral_percentage: percentage(neutral, total),
        most_liked: most_liked.cloned(),
        most_liked_count,
    };

    tracing::debug!(
        total = result.total,
        positive = result.positive,
        negative = result.negative,
        neutral = result.neutral,
        "classified comments"
    );

    result
}

/// Formats `100 * count / total` with two decimal places.
///
/// A zero `total` yields `"0.00"` rather than dividing by zero.
fn percentage(count: u64, total: u64) -> String {
    if total == 0 {
        return "0.00".to_string();
    }
    #[allow(clippy::cast_precision_loss)]
    let ratio = (count as f64 / total as f64) * 100.0;
    format!("{ratio:.2}")
}
