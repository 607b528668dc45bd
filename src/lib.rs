//! terra - Country Information Service
//!
//! A small HTTP service that answers queries over an in-memory list of
//! country records loaded once from a static JSON file.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`config`] - Configuration management and settings
//! - [`dataset`] - Country records, the startup loader, and query operations
//! - [`server`] - HTTP surface (API routes, health probes, server assembly)
//!
//! The dataset is loaded exactly once before the server binds and is never
//! mutated afterwards, so request handlers read it concurrently without
//! any locking.
//!
//! # Example
//!
//! ```no_run
//! use terra::config::ServerConfig;
//! use terra::server::ApiServer;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::default();
//!     let server = ApiServer::new(config)?;
//!     server.start().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod dataset;
pub mod server;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::ServerConfig;
    pub use crate::dataset::{CountryDataset, CountryRecord, CountryView};
    pub use crate::server::{ApiServer, AppState};
}

// Direct re-exports for convenience
pub use dataset::{CountryDataset, CountryRecord, CountryView};
