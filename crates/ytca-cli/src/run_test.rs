use super::*;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> YoutubeClient {
    YoutubeClient::with_base_url("test-key", 30, base_url)
        .expect("client construction should not fail")
}

fn comment_thread(text: &str, author: &str, likes: u64) -> serde_json::Value {
    serde_json::json!({
        "snippet": {
            "topLevelComment": {
                "snippet": {
                    "textDisplay": text,
                    "authorDisplayName": author,
                    "publishedAt": "2024-03-01T12:00:00Z",
                    "likeCount": likes
                }
            }
        }
    })
}

#[tokio::test]
async fn report_contains_comments_and_analysis() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "pageInfo": { "totalResults": 3, "resultsPerPage": 100 },
        "items": [
            comment_thread("Great video, thanks!", "alice", 5),
            comment_thread("This was terrible", "bob", 2),
            comment_thread("First", "carol", 10),
        ]
    });

    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .and(query_param("videoId", "vid123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir should be created");
    let output = dir.path().join("analysis-results.json");

    let client = test_client(&server.uri());
    run_analysis(&client, "vid123", &output, None)
        .await
        .expect("run should succeed");

    let raw = std::fs::read_to_string(&output).expect("report should exist");
    assert!(raw.contains("\n  "), "report should be pretty-printed");

    let report: serde_json::Value = serde_json::from_str(&raw).expect("report should parse");
    assert_eq!(report["comments"].as_array().map(Vec::len), Some(3));
    assert_eq!(report["comments"][0]["author"], "alice");
    assert_eq!(report["analysis"]["total"], 3);
    assert_eq!(report["analysis"]["positive"], 1);
    assert_eq!(report["analysis"]["negative"], 1);
    assert_eq!(report["analysis"]["neutral"], 1);
    assert_eq!(report["analysis"]["positivePercentage"], "33.33");
    assert_eq!(report["analysis"]["mostLiked"]["author"], "carol");
    assert_eq!(report["analysis"]["mostLikedCount"], 10);
}

#[tokio::test]
async fn chunk_files_land_in_the_chunk_dir() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "items": [
            comment_thread("one", "alice", 0),
            comment_thread("two", "bob", 0),
        ]
    });

    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir should be created");
    let output = dir.path().join("analysis-results.json");

    let client = test_client(&server.uri());
    run_analysis(&client, "vid123", &output, Some(dir.path()))
        .await
        .expect("run should succeed");

    let chunk = dir.path().join("vid123-chunk-1-comments.json");
    assert!(chunk.exists(), "chunk file should be written");

    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&chunk).expect("chunk should be readable"))
            .expect("chunk should parse");
    assert_eq!(parsed.as_array().map(Vec::len), Some(2));
    assert!(output.exists(), "report should be written as well");
}

#[tokio::test]
async fn failed_fetch_writes_no_report() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "error": {
            "code": 403,
            "message": "The request cannot be completed because you have exceeded your quota.",
            "errors": [{ "reason": "quotaExceeded" }]
        }
    });

    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .respond_with(ResponseTemplate::new(403).set_body_json(&body))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir should be created");
    let output = dir.path().join("analysis-results.json");

    let client = test_client(&server.uri());
    let result = run_analysis(&client, "vid123", &output, None).await;

    assert!(result.is_err(), "quota failure should abort the run");
    assert!(!output.exists(), "no report should be written on failure");
}

#[tokio::test]
async fn empty_listing_still_writes_a_report() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "pageInfo": { "totalResults": 0, "resultsPerPage": 100 },
        "items": []
    });

    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir should be created");
    let output = dir.path().join("analysis-results.json");

    let client = test_client(&server.uri());
    run_analysis(&client, "vid123", &output, Some(dir.path()))
        .await
        .expect("empty run should succeed");

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).expect("report should exist"))
            .expect("report should parse");
    assert_eq!(report["analysis"]["total"], 0);
    assert_eq!(report["analysis"]["positivePercentage"], "0.00");
    assert!(report["analysis"]["mostLiked"].is_null());

    // No chunk files for an empty comment sequence.
    assert!(!dir.path().join("vid123-chunk-1-comments.json").exists());
}
