//! Country record types and the normalized response projection
//!
//! The source dataset is semi-structured: most fields are optional and a
//! few are nested. [`CountryRecord`] types that shape explicitly, and
//! [`CountryView`] is the flattened, defaulted shape returned to clients.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Placeholder for fields missing from a source record
pub const NOT_AVAILABLE: &str = "N/A";

// ============================================================================
// Source Record Types
// ============================================================================

/// One entry of the source dataset describing a country
///
/// Unknown fields in the source JSON are ignored; only the fields the
/// service projects are modeled.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountryRecord {
    /// Country name container
    pub name: CountryName,

    /// Two-letter country code
    pub cca2: Option<String>,

    /// Continent names
    pub continents: Option<Vec<String>>,

    /// Capital city names (may be present but empty)
    pub capital: Option<Vec<String>>,

    /// Population count
    pub population: Option<u64>,

    /// Timezone identifiers
    pub timezones: Option<Vec<String>>,

    /// Currency code -> currency details, in source order
    pub currencies: Option<IndexMap<String, Currency>>,

    /// Flag image URLs
    pub flags: Option<Flags>,
}

/// Name container of a country record
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountryName {
    /// Common name, the key the search endpoint matches against
    pub common: String,
}

/// Currency details within a record's currency map
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Currency {
    /// Currency name
    pub name: Option<String>,

    /// Currency symbol
    pub symbol: Option<String>,
}

/// Flag image URLs of a record
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Flags {
    /// PNG flag image URL
    pub png: Option<String>,
}

impl CountryRecord {
    /// Common name of the country
    pub fn common_name(&self) -> &str {
        &self.name.common
    }
}

// ============================================================================
// Normalized Response View
// ============================================================================

/// Flattened, defaulted response shape derived from a [`CountryRecord`]
///
/// This is a pure projection recomputed per request. Missing fields default
/// to `"N/A"`, except the currency symbol which defaults to the empty
/// string and the timezone list which defaults to empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryView {
    pub country: String,
    pub country_code: String,
    pub continent: String,
    pub capital: String,
    pub population: Population,
    pub timezones: Vec<String>,
    pub currency: CurrencyView,
    pub flag_url: String,
}

/// Population field of the response: an integer when known, the literal
/// string `"N/A"` otherwise
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Population {
    Known(u64),
    Unknown(String),
}

/// Currency section of the response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrencyView {
    pub code: String,
    pub name: String,
    pub symbol: String,
}

impl CurrencyView {
    /// View for a record without a usable currency map
    fn unavailable() -> Self {
        Self {
            code: NOT_AVAILABLE.to_string(),
            name: NOT_AVAILABLE.to_string(),
            symbol: String::new(),
        }
    }
}

impl CountryView {
    /// Project a source record into the normalized response shape
    pub fn from_record(record: &CountryRecord) -> Self {
        // First key of the currency map in stored order wins; name and
        // symbol default independently (symbol to "" rather than "N/A").
        let currency = record
            .currencies
            .as_ref()
            .and_then(|map| map.first())
            .map(|(code, info)| CurrencyView {
                code: code.clone(),
                name: info
                    .name
                    .clone()
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                symbol: info.symbol.clone().unwrap_or_default(),
            })
            .unwrap_or_else(CurrencyView::unavailable);

        Self {
            country: record.name.common.clone(),
            country_code: record
                .cca2
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            continent: first_or_unavailable(record.continents.as_deref()),
            capital: first_or_unavailable(record.capital.as_deref()),
            population: record
                .population
                .map(Population::Known)
                .unwrap_or_else(|| Population::Unknown(NOT_AVAILABLE.to_string())),
            timezones: record.timezones.clone().unwrap_or_default(),
            currency,
            flag_url: record
                .flags
                .as_ref()
                .and_then(|flags| flags.png.clone())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        }
    }
}

/// First element of an optional list, or `"N/A"` when absent or empty
fn first_or_unavailable(list: Option<&[String]>) -> String {
    list.and_then(|entries| entries.first())
        .cloned()
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

// ============================================================================
// Tests
// ============================================================================
