//! Shared helpers for integration tests

use axum::body::Body;
use axum::Router;

use http_body_util::BodyExt;

use terra::config::ServerConfig;
use terra::dataset::{CountryDataset, CountryRecord};
use terra::server::ApiServer;

/// The end-to-end fixture record used across tests
pub const WAKANDA_JSON: &str = r#"{
    "name": {"common": "Wakanda"},
    "cca2": "WK",
    "continents": ["Africa"],
    "capital": ["Birnin Zana"],
    "population": 6000000,
    "timezones": ["UTC+1"],
    "currencies": {"WKD": {"name": "Wakandan Dollar", "symbol": "W"}},
    "flags": {"png": "http://x/w.png"}
}"#;

/// Parse a record from JSON
pub fn record(json: &str) -> CountryRecord {
    serde_json::from_str(json).expect("test record should parse")
}

/// Record with only a common name
pub fn bare_record(name: &str) -> CountryRecord {
    record(&format!(r#"{{"name": {{"common": "{name}"}}}}"#))
}

/// Build the app router around a fabricated dataset
pub fn test_app(records: Vec<CountryRecord>) -> Router {
    let config = ServerConfig::default();
    let dataset = CountryDataset::from_records(records);
    ApiServer::with_dataset(config, dataset).build_router()
}

/// Read a response body as JSON
pub async fn body_json(response: axum::http::Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}
