//! Configuration management for the terra service
//!
//! This module handles loading and validating configuration from
//! environment variables, TOML files, and command-line arguments.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Default dataset path, matching the file the service ships with
const DEFAULT_DATA_PATH: &str = "all_countries.json";

/// Configuration for the API server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server bind address
    pub bind_address: SocketAddr,

    /// Path of the static JSON dataset loaded at startup
    pub data_path: PathBuf,

    /// Enable CORS for browser-based clients
    pub enable_cors: bool,

    /// Enable request logging
    pub enable_request_logging: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".parse().unwrap(),
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            enable_cors: true,
            enable_request_logging: true,
        }
    }
}

impl ServerConfig {
    /// Create a new config builder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_address = match std::env::var("TERRA_BIND_ADDRESS") {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                field: "TERRA_BIND_ADDRESS".to_string(),
                reason: format!("Invalid address: {value}"),
            })?,
            Err(_) => ServerConfig::default().bind_address,
        };

        let data_path = std::env::var("TERRA_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_PATH));

        let enable_cors = std::env::var("TERRA_ENABLE_CORS")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(true);

        let enable_request_logging = std::env::var("TERRA_REQUEST_LOGGING")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(true);

        let config = Self {
            bind_address,
            data_path,
            enable_cors,
            enable_request_logging,
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "data_path".to_string(),
                reason: "Dataset path must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for [`ServerConfig`]
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    bind_address: Option<SocketAddr>,
    data_path: Option<PathBuf>,
    enable_cors: Option<bool>,
    enable_request_logging: Option<bool>,
}

impl ServerConfigBuilder {
    /// Set bind address
    pub fn bind_address(mut self, addr: SocketAddr) -> Self {
        self.bind_address = Some(addr);
        self
    }

    /// Set bind address from string
    pub fn bind_address_str(mut self, addr: &str) -> Result<Self, ConfigError> {
        self.bind_address = Some(addr.parse().map_err(|_| ConfigError::InvalidValue {
            field: "bind_address".to_string(),
            reason: format!("Invalid address: {addr}"),
        })?);
        Ok(self)
    }

    /// Set dataset path
    pub fn data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = Some(path.into());
        self
    }

    /// Enable/disable CORS
    pub fn enable_cors(mut self, enable: bool) -> Self {
        self.enable_cors = Some(enable);
        self
    }

    /// Enable/disable request logging
    pub fn enable_request_logging(mut self, enable: bool) -> Self {
        self.enable_request_logging = Some(enable);
        self
    }

    /// Build the config
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let defaults = ServerConfig::default();

        let config = ServerConfig {
            bind_address: self.bind_address.unwrap_or(defaults.bind_address),
            data_path: self.data_path.unwrap_or(defaults.data_path),
            enable_cors: self.enable_cors.unwrap_or(defaults.enable_cors),
            enable_request_logging: self
                .enable_request_logging
                .unwrap_or(defaults.enable_request_logging),
        };

        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A configuration value failed validation
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    /// Config file could not be read
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Config file could not be parsed as TOML
    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.enable_cors);
        assert_eq!(config.data_path, PathBuf::from("all_countries.json"));
    }

    #[test]
    fn test_config_builder() {
        let config = ServerConfig::builder()
            .data_path("fixtures/countries.json")
            .enable_cors(false)
            .build()
            .unwrap();

        assert_eq!(config.data_path, PathBuf::from("fixtures/countries.json"));
        assert!(!config.enable_cors);
        assert!(config.enable_request_logging);
    }

    #[test]
    fn test_config_builder_with_address() {
        let config = ServerConfig::builder()
            .bind_address_str("127.0.0.1:9000")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(config.bind_address.port(), 9000);
    }

    #[test]
    fn test_invalid_address_rejected() {
        let result = ServerConfig::builder().bind_address_str("not-an-address");
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_data_path_rejected() {
        let result = ServerConfig::builder().data_path("").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"
bind_address = "127.0.0.1:3000"
data_path = "countries.json"
enable_cors = false
enable_request_logging = true
"#,
        )
        .unwrap();

        let config = ServerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.bind_address.port(), 3000);
        assert_eq!(config.data_path, PathBuf::from("countries.json"));
        assert!(!config.enable_cors);
    }

    #[test]
    fn test_from_file_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"bind_address = [broken").unwrap();

        let result = ServerConfig::from_file(file.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_from_file_missing() {
        let result = ServerConfig::from_file(Path::new("no/such/config.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
