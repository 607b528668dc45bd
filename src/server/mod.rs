//! HTTP surface of the country service
//!
//! This module assembles the query endpoints, health probes, and
//! middleware into a runnable axum server.
//!
//! # Endpoints
//!
//! ```text
//! GET /                - Service index
//! GET /search?country= - Exact-match search by common name
//! GET /random          - Uniformly random country
//! GET /health/live     - Liveness probe
//! GET /health/ready    - Readiness probe
//! GET /health          - Comprehensive health check
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use terra::config::ServerConfig;
//! use terra::server::ApiServer;
//!
//! let config = ServerConfig::default();
//! let server = ApiServer::new(config)?;
//! server.start().await?;
//! ```

pub mod api;
pub mod health;
pub mod server;

// Re-export main types
pub use api::{ApiError, ErrorResponse};
pub use health::HealthStatus;
pub use server::{ApiServer, AppState, ServerError, ServerInfo};
