//! Country dataset: records, startup loader, and query operations
//!
//! The dataset is an ordered sequence of country records loaded exactly
//! once at process startup. It is never mutated afterwards, so request
//! handlers read it concurrently without locking. A failed load degrades
//! to the empty dataset; every query behaves deterministically against
//! that state (search always misses, random selection reports no data).

pub mod loader;
pub mod record;

// Re-export main types
pub use loader::LoadError;
pub use record::{
    CountryRecord, CountryView, Currency, CurrencyView, Flags, Population, NOT_AVAILABLE,
};

use std::path::Path;

use rand::seq::SliceRandom;

/// The full in-memory ordered collection of country records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountryDataset {
    records: Vec<CountryRecord>,
}

impl CountryDataset {
    /// Create an empty dataset
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a dataset from already-constructed records
    ///
    /// Used by tests to inject fabricated datasets without touching disk.
    pub fn from_records(records: Vec<CountryRecord>) -> Self {
        Self { records }
    }

    /// Load the dataset from a JSON file
    ///
    /// Runs once at startup. Any failure is logged and produces the empty
    /// dataset; the service still starts and serves deterministic
    /// "no data" responses.
    pub fn load(path: &Path) -> Self {
        tracing::info!(path = %path.display(), "Loading data from local JSON file");

        match loader::read_records(path) {
            Ok(records) => {
                tracing::info!(count = records.len(), "Loaded countries from the JSON file");
                Self { records }
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load dataset, starting with no data");
                Self::empty()
            }
        }
    }

    /// Number of records in the dataset
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in stored order
    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    /// Find the first record whose common name matches case-insensitively
    ///
    /// Linear scan in stored order; first match wins. No fuzzy or partial
    /// matching.
    pub fn find_by_common_name(&self, name: &str) -> Option<&CountryRecord> {
        let wanted = name.to_lowercase();
        self.records
            .iter()
            .find(|record| record.common_name().to_lowercase() == wanted)
    }

    /// Pick one record uniformly at random, or `None` when empty
    pub fn pick_random(&self) -> Option<&CountryRecord> {
        self.records.choose(&mut rand::thread_rng())
    }
}
