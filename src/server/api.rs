//! REST API handlers for the country service
//!
//! This module defines the API routes, the request-time error taxonomy,
//! and the query-string handling for the two lookup endpoints.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dataset::CountryView;

use super::server::AppState;

// ============================================================================
// API Error Types
// ============================================================================

/// Query-time failures, all recovered locally into structured JSON responses
///
/// The display strings are the externally observable error messages and
/// must not change.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Caller omitted the required country name
    #[error("No country name provided")]
    MissingCountryName,

    /// Valid input, no matching record
    #[error("Country '{name}' not found")]
    CountryNotFound { name: String },

    /// Valid request, but the backing dataset is empty
    #[error("No data available")]
    NoData,
}

impl ApiError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingCountryName => StatusCode::BAD_REQUEST,
            Self::CountryNotFound { .. } => StatusCode::NOT_FOUND,
            Self::NoData => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse::new(self.to_string()));
        (self.status_code(), body).into_response()
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

// ============================================================================
// API Routes
// ============================================================================

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/search", get(search_country))
        .route("/random", get(random_country))
        .with_state(state)
}

// ============================================================================
// Handlers
// ============================================================================

/// Root handler - service index
async fn root_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": "terra Country Information Service",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "search": "GET /search?country=<name>",
            "random": "GET /random",
            "health": "GET /health"
        }
    }))
}

/// Query parameters of the search endpoint
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    country: Option<String>,
}

/// Search for a country by its common name
///
/// The name is normalized (first character uppercased, remainder
/// unchanged) before a case-insensitive comparison; the normalized form is
/// what a not-found response echoes back.
async fn search_country(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<CountryView>, ApiError> {
    let raw = params.country.as_deref().unwrap_or("");
    if raw.is_empty() {
        return Err(ApiError::MissingCountryName);
    }

    let name = capitalize_first(raw);

    match state.dataset.find_by_common_name(&name) {
        Some(record) => Ok(Json(CountryView::from_record(record))),
        None => Err(ApiError::CountryNotFound { name }),
    }
}

/// Return one country picked uniformly at random
async fn random_country(State(state): State<AppState>) -> Result<Json<CountryView>, ApiError> {
    let record = state.dataset.pick_random().ok_or(ApiError::NoData)?;
    Ok(Json(CountryView::from_record(record)))
}

/// Uppercase the first character, leave the remainder unchanged
///
/// Not full title-casing: "new zealand" becomes "New zealand".
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("wakanda"), "Wakanda");
        assert_eq!(capitalize_first("Wakanda"), "Wakanda");
        assert_eq!(capitalize_first("new zealand"), "New zealand");
        assert_eq!(capitalize_first("wAKANDA"), "WAKANDA");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_capitalize_first_non_ascii() {
        assert_eq!(capitalize_first("åland Islands"), "Åland Islands");
        assert_eq!(capitalize_first("éire"), "Éire");
    }

    #[test]
    fn test_api_error_status_codes() {
        assert_eq!(
            ApiError::MissingCountryName.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::CountryNotFound {
                name: "Narnia".to_string()
            }
            .status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::NoData.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_api_error_messages() {
        assert_eq!(
            ApiError::MissingCountryName.to_string(),
            "No country name provided"
        );
        assert_eq!(
            ApiError::CountryNotFound {
                name: "Narnia".to_string()
            }
            .to_string(),
            "Country 'Narnia' not found"
        );
        assert_eq!(ApiError::NoData.to_string(), "No data available");
    }

    #[test]
    fn test_error_response_shape() {
        let body = serde_json::to_value(ErrorResponse::new("No data available")).unwrap();
        assert_eq!(body, serde_json::json!({"error": "No data available"}));
    }
}
