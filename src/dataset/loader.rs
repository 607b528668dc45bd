//! Startup loader for the country dataset
//!
//! Loading is a boot-time concern: failures are logged for operators and
//! degrade the service to the empty dataset, they are never surfaced to an
//! HTTP caller.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::record::CountryRecord;

/// Errors that can occur while loading the dataset file
#[derive(Error, Debug)]
pub enum LoadError {
    /// Dataset file does not exist
    #[error("{} not found", .0.display())]
    NotFound(PathBuf),

    /// Dataset file could not be read
    #[error("Failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset file is not valid UTF-8 text
    #[error("Unicode error while reading file: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Dataset file is not a valid JSON array of records
    #[error("Error decoding JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read and parse the dataset file into an ordered record list
///
/// The distinct error variants preserve which stage failed (missing file,
/// unreadable bytes, non-UTF-8 text, malformed JSON) so the startup
/// diagnostic names the actual problem.
pub fn read_records(path: &Path) -> Result<Vec<CountryRecord>, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let bytes = std::fs::read(path)?;
    let text = String::from_utf8(bytes)?;
    let records = serde_json::from_str(&text)?;

    Ok(records)
}
