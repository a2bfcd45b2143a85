mod output;
mod run;

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ytca_core::ConfigError;
use ytca_youtube::YoutubeClient;

/// Fetch and analyze the comments of a YouTube video.
#[derive(Debug, Parser)]
#[command(name = "ytca-cli")]
#[command(about = "Analyze the comment sentiment of a YouTube video")]
#[command(version)]
struct Cli {
    /// ID of the video whose comments should be analyzed
    #[arg(short, long)]
    video_id: String,

    /// File the analysis report is written to
    #[arg(short, long, default_value = "analysis-results.json")]
    output: PathBuf,

    /// Also write the raw comments to numbered chunk files of 100 comments
    #[arg(short, long)]
    write_chunks: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match ytca_core::load_app_config() {
        Ok(config) => config,
        Err(e @ ConfigError::MissingEnvVar(_)) => {
            eprintln!("Error: {e}");
            eprintln!("Set YOUTUBE_API_KEY in the environment or in a .env file:");
            eprintln!("  YOUTUBE_API_KEY=your_api_key_here");
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let client = YoutubeClient::new(&config.api_key, config.request_timeout_secs)?;
    let chunk_dir = cli.write_chunks.then_some(Path::new("."));

    if let Err(e) = run::run_analysis(&client, &cli.video_id, &cli.output, chunk_dir).await {
        let chain = format!("{e:#}");
        tracing::error!(error = %chain, "analysis run failed");
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests;
