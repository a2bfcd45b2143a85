use super::*;

#[test]
fn missing_video_id_is_an_error() {
    let result = Cli::try_parse_from(["ytca-cli"]);
    assert!(result.is_err(), "video id should be required");
}

#[test]
fn parses_video_id_with_defaults() {
    let cli = Cli::try_parse_from(["ytca-cli", "--video-id", "dQw4w9WgXcQ"])
        .expect("expected valid cli args");

    assert_eq!(cli.video_id, "dQw4w9WgXcQ");
    assert_eq!(cli.output, PathBuf::from("analysis-results.json"));
    assert!(!cli.write_chunks);
}

#[test]
fn parses_custom_output_path() {
    let cli = Cli::try_parse_from([
        "ytca-cli",
        "--video-id",
        "abc123",
        "--output",
        "reports/run.json",
    ])
    .expect("expected valid cli args");

    assert_eq!(cli.output, PathBuf::from("reports/run.json"));
}

#[test]
fn parses_write_chunks_flag() {
    let cli = Cli::try_parse_from(["ytca-cli", "--video-id", "abc123", "--write-chunks"])
        .expect("expected valid cli args");

    assert!(cli.write_chunks);
}

#[test]
fn parses_short_flags() {
    let cli = Cli::try_parse_from(["ytca-cli", "-v", "abc123", "-o", "out.json", "-w"])
        .expect("expected valid cli args");

    assert_eq!(cli.video_id, "abc123");
    assert_eq!(cli.output, PathBuf::from("out.json"));
    assert!(cli.write_chunks);
}
