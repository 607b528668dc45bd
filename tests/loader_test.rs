//! Integration tests for the dataset loader
//!
//! Exercises the startup path against real files on disk: a valid dataset,
//! the degraded empty-dataset states, and the file-to-HTTP round trip.

mod common;

use std::io::Write;

use axum::http::{Request, StatusCode};
use tempfile::NamedTempFile;
use tower::ServiceExt;

use terra::config::ServerConfig;
use terra::dataset::CountryDataset;
use terra::server::ApiServer;

use common::body_json;

fn dataset_file(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content).unwrap();
    file
}

#[test]
fn test_load_valid_file_preserves_order() {
    let file = dataset_file(
        br#"[
            {"name": {"common": "France"}},
            {"name": {"common": "Germany"}},
            {"name": {"common": "Japan"}}
        ]"#,
    );

    let dataset = CountryDataset::load(file.path());
    assert_eq!(dataset.len(), 3);

    let names: Vec<&str> = dataset.records().iter().map(|r| r.common_name()).collect();
    assert_eq!(names, vec!["France", "Germany", "Japan"]);
}

#[test]
fn test_load_missing_file_degrades_to_empty() {
    let dataset = CountryDataset::load(std::path::Path::new("no/such/file.json"));
    assert!(dataset.is_empty());
}

#[test]
fn test_load_non_utf8_file_degrades_to_empty() {
    let file = dataset_file(&[0xff, 0xfe, 0x80, 0x81]);
    let dataset = CountryDataset::load(file.path());
    assert!(dataset.is_empty());
}

#[test]
fn test_load_malformed_json_degrades_to_empty() {
    let file = dataset_file(b"[{\"name\": ");
    let dataset = CountryDataset::load(file.path());
    assert!(dataset.is_empty());
}

#[test]
fn test_load_twice_is_deterministic() {
    let file = dataset_file(
        br#"[
            {"name": {"common": "France"}, "cca2": "FR"},
            {"name": {"common": "Germany"}, "cca2": "DE"}
        ]"#,
    );

    let first = CountryDataset::load(file.path());
    let second = CountryDataset::load(file.path());

    assert_eq!(first.len(), second.len());
    assert_eq!(first.records(), second.records());
}

#[tokio::test]
async fn test_file_to_http_round_trip() {
    // The dataset file is an array of records.
    let array = format!("[{}]", common::WAKANDA_JSON);
    let file = dataset_file(array.as_bytes());

    let config = ServerConfig::builder()
        .data_path(file.path())
        .build()
        .unwrap();

    let server = ApiServer::new(config).unwrap();
    assert_eq!(server.state().dataset.len(), 1);

    let app = server.build_router();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/search?country=wakanda")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["country"], "Wakanda");
    assert_eq!(body["currency"]["code"], "WKD");
}

#[tokio::test]
async fn test_server_with_missing_file_serves_no_data() {
    let config = ServerConfig::builder()
        .data_path("definitely/not/here.json")
        .build()
        .unwrap();

    let server = ApiServer::new(config).unwrap();
    let app = server.build_router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/random")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body, serde_json::json!({"error": "No data available"}));
}
