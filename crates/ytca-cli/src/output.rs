//! JSON file output for analysis runs.

use std::path::{Path, PathBuf};

use serde::Serialize;

use ytca_core::Comment;
use ytca_sentiment::AnalysisResult;

/// Comments per chunk file. Matches the fetch page size.
pub(crate) const CHUNK_SIZE: usize = 100;

/// Report document written to the output path: the raw comment sequence
/// plus the aggregated analysis.
#[derive(Debug, Serialize)]
pub(crate) struct AnalysisReport {
    pub(crate) comments: Vec<Comment>,
    pub(crate) analysis: AnalysisResult,
}

/// Writes the pretty-printed report to `path`, replacing any previous run's
/// file.
pub(crate) fn write_report(path: &Path, report: &AnalysisReport) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)
        .map_err(|e| anyhow::anyhow!("failed to write report to {}: {e}", path.display()))?;
    Ok(())
}

/// Writes the comment sequence into chunk files of at most [`CHUNK_SIZE`]
/// comments each, placed under `dir` and named
/// `<video_id>-chunk-<n>-comments.json` with 1-based chunk numbers.
///
/// Returns the written paths in order. An empty sequence produces no files.
pub(crate) fn write_comment_chunks(
    dir: &Path,
    video_id: &str,
    comments: &[Comment],
) -> anyhow::Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(comments.len().div_ceil(CHUNK_SIZE));
    for (index, chunk) in comments.chunks(CHUNK_SIZE).enumerate() {
        let path = dir.join(format!("{video_id}-chunk-{}-comments.json", index + 1));
        let json = serde_json::to_string_pretty(chunk)?;
        std::fs::write(&path, json)
            .map_err(|e| anyhow::anyhow!("failed to write chunk to {}: {e}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[path = "output_test.rs"]
mod tests;
