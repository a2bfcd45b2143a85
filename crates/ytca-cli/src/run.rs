//! End-to-end orchestration of one analysis run.

use std::path::Path;

use ytca_sentiment::AnalysisResult;
use ytca_youtube::YoutubeClient;

use crate::output::{write_comment_chunks, write_report, AnalysisReport, CHUNK_SIZE};

/// Fetch, analyze, and persist the comments of one video.
///
/// Steps run strictly in order: fetch every top-level comment through the
/// paginated listing, optionally write the raw comments into numbered chunk
/// files under `chunk_dir`, analyze the full sequence, print the summary,
/// and write the JSON report to `output_path`. The first failing step
/// aborts the run; chunk files already written stay on disk.
///
/// # Errors
///
/// Returns an error if the fetch fails, a chunk file cannot be written, or
/// the report cannot be serialized or written.
pub(crate) async fn run_analysis(
    client: &YoutubeClient,
    video_id: &str,
    output_path: &Path,
    chunk_dir: Option<&Path>,
) -> anyhow::Result<()> {
    println!("Fetching comments for video: {video_id}");
    let comments = client.fetch_all_comments(video_id).await?;
    println!("Retrieved {} comments", comments.len());

    if let Some(dir) = chunk_dir {
        let chunk_paths = write_comment_chunks(dir, video_id, &comments)?;
        println!(
            "Split comments into {} chunks of up to {CHUNK_SIZE} comments each",
            chunk_paths.len()
        );
        for (index, path) in chunk_paths.iter().enumerate() {
            println!("Saved chunk {} to {}", index + 1, path.display());
        }
    }

    let analysis = ytca_sentiment::analyze_comments(&comments);
    print_summary(&analysis);

    let report = AnalysisReport { comments, analysis };
    write_report(output_path, &report)?;
    println!("\nAnalysis results saved to {}", output_path.display());

    Ok(())
}

/// Print the human-readable summary block for one analysis.
fn print_summary(analysis: &AnalysisResult) {
    println!("\nComment Analysis:");
    println!("Total Comments: {}", analysis.total);
    println!(
        "Positive Comments: {} ({}%)",
        analysis.positive, analysis.positive_percentage
    );
    println!(
        "Negative Comments: {} ({}%)",
        analysis.negative, analysis.negative_percentage
    );
    println!(
        "Neutral Comments: {} ({}%)",
        analysis.neutral, analysis.neutral_percentage
    );

    if let Some(most_liked) = &analysis.most_liked {
        println!("\nMost Liked Comment:");
        println!("Author: {}", most_liked.author);
        println!("Likes: {}", most_liked.like_count);
        println!("Text: {}", most_liked.text);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
