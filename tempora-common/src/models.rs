//! Shared record types for the tour catalog

use serde::{Deserialize, Serialize};

/// A bookable heritage tour, as stored in the `tours` table.
///
/// `era` and `civilization` are free-text labels filled by the ingestion
/// process; either may be missing. `locations` is a comma-separated string
/// ("Rome, Italy"), kept in its stored form because the filter engine's
/// matching policy operates on the raw text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub era: Option<String>,
    pub civilization: Option<String>,
    pub locations: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

/// A named historical era, as stored in the `eras` table.
///
/// Read-only reference data: created and updated by the ingestion process,
/// never by the filter engine. Negative years are BCE.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Era {
    pub id: i64,
    pub name: String,
    pub start_year: Option<i64>,
    pub end_year: Option<i64>,
    pub key_figures: Option<String>,
    pub period: Option<String>,
}

/// Coarse historical period buckets for top-level browsing.
///
/// Fixed enumeration; `Custom` pairs with a user-entered date range instead
/// of a seeded era set.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Ancient,
    Classical,
    Medieval,
    Renaissance,
    EarlyModern,
    Modern,
    Custom,
}

impl Period {
    /// All periods in display order
    pub const ALL: [Period; 7] = [
        Period::Ancient,
        Period::Classical,
        Period::Medieval,
        Period::Renaissance,
        Period::EarlyModern,
        Period::Modern,
        Period::Custom,
    ];

    /// Stable identifier used in config files and query parameters
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Ancient => "ancient",
            Period::Classical => "classical",
            Period::Medieval => "medieval",
            Period::Renaissance => "renaissance",
            Period::EarlyModern => "early_modern",
            Period::Modern => "modern",
            Period::Custom => "custom",
        }
    }

    /// Parse a period identifier, case-insensitively.
    ///
    /// Returns `None` for unrecognized identifiers; callers treat unknown
    /// periods as contributing nothing rather than as errors.
    pub fn parse(s: &str) -> Option<Period> {
        match s.trim().to_lowercase().as_str() {
            "ancient" => Some(Period::Ancient),
            "classical" => Some(Period::Classical),
            "medieval" => Some(Period::Medieval),
            "renaissance" => Some(Period::Renaissance),
            "early_modern" => Some(Period::EarlyModern),
            "modern" => Some(Period::Modern),
            "custom" => Some(Period::Custom),
            _ => None,
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
