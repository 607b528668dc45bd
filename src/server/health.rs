//! Health check endpoints
//!
//! Liveness reports that the process is running; readiness and the full
//! health check report the state of the loaded dataset. An empty dataset
//! is degraded rather than unhealthy: the service still serves
//! deterministic responses, so traffic is never blocked.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use super::server::AppState;

// ============================================================================
// Health Status Types
// ============================================================================

/// Overall health status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "healthy",
            HealthStatus::Degraded => "degraded",
            HealthStatus::Unhealthy => "unhealthy",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            HealthStatus::Healthy => StatusCode::OK,
            HealthStatus::Degraded => StatusCode::OK, // still serving traffic
            HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

/// Component health check result
#[derive(Debug, Clone, Serialize)]
pub struct ComponentHealth {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Liveness probe response
#[derive(Debug, Serialize)]
pub struct LivenessResponse {
    pub status: HealthStatus,
    pub timestamp: String,
}

/// Readiness probe response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: HealthStatus,
    pub timestamp: String,
    pub checks: Vec<ComponentHealth>,
}

/// Comprehensive health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub uptime_secs: u64,
    pub timestamp: String,
    pub checks: Vec<ComponentHealth>,
}

// ============================================================================
// Health Check Router
// ============================================================================

/// Create health check router
pub fn create_health_router(state: AppState) -> Router {
    Router::new()
        .route("/health/live", get(liveness_probe))
        .route("/health/ready", get(readiness_probe))
        .route("/health", get(health_check))
        .with_state(state)
}

// ============================================================================
// Health Check Handlers
// ============================================================================

/// Liveness probe handler
///
/// Returns 200 if the application process is running.
async fn liveness_probe() -> impl IntoResponse {
    let response = LivenessResponse {
        status: HealthStatus::Healthy,
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    (StatusCode::OK, Json(response))
}

/// Readiness probe handler
///
/// Degraded with an empty dataset, healthy otherwise; both keep serving.
async fn readiness_probe(State(state): State<AppState>) -> impl IntoResponse {
    let dataset_check = check_dataset(&state);
    let overall_status = dataset_check.status;

    let response = ReadinessResponse {
        status: overall_status,
        timestamp: chrono::Utc::now().to_rfc3339(),
        checks: vec![dataset_check],
    };

    (overall_status.status_code(), Json(response))
}

/// Comprehensive health check handler
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let dataset_check = check_dataset(&state);
    let overall_status = dataset_check.status;

    let response = HealthResponse {
        status: overall_status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        checks: vec![dataset_check],
    };

    (overall_status.status_code(), Json(response))
}

/// Dataset component check
fn check_dataset(state: &AppState) -> ComponentHealth {
    let count = state.dataset.len();

    let (status, message) = if count > 0 {
        (HealthStatus::Healthy, format!("{count} countries loaded"))
    } else {
        (HealthStatus::Degraded, "dataset empty".to_string())
    };

    ComponentHealth {
        name: "dataset".to_string(),
        status,
        message: Some(message),
    }
}

// ============================================================================
// Tests
// ============================================================================
