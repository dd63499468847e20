//! Facet catalog: immutable lookup tables for the cascading filters
//!
//! One canonical table set backs both the availability computation (which
//! eras/locations are selectable given the current periods/eras) and the
//! evaluator's keyword matching. The tables are seeded from fixed
//! configuration at process start and never mutated.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tempora_common::Period;

static EMPTY_SET: Lazy<BTreeSet<String>> = Lazy::new(BTreeSet::new);

/// Serde form of the catalog tables, loadable from TOML.
///
/// Keys under `periods` are period identifiers ("ancient", "early_modern");
/// keys under `eras` are era display names ("Ancient Egypt"). Keyword and
/// alias entries are matched case-insensitively regardless of the case they
/// are written in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Table version, bumped whenever the seeded data changes
    pub version: u32,
    #[serde(default)]
    pub periods: BTreeMap<Period, PeriodEntry>,
    #[serde(default)]
    pub eras: BTreeMap<String, EraEntry>,
}

/// Per-period configuration: member eras, associated locations, and the
/// substring keywords the evaluator matches tour era text against.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PeriodEntry {
    #[serde(default)]
    pub eras: Vec<String>,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Per-era configuration: associated locations and special-cased alias
/// keywords for civilizations that do not textually contain the era name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EraEntry {
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// Immutable facet lookup tables.
///
/// All query operations are total: unknown periods or era names return the
/// empty set rather than an error, since the seeded mapping is open-ended
/// and deliberately incomplete (e.g. the `custom` period owns no eras).
#[derive(Debug, Clone)]
pub struct FacetCatalog {
    period_eras: BTreeMap<Period, BTreeSet<String>>,
    period_locations: BTreeMap<Period, BTreeSet<String>>,
    period_keywords: BTreeMap<Period, Vec<String>>,
    // Keyed by lower-cased era name; lookups canonicalize the same way
    era_locations: BTreeMap<String, BTreeSet<String>>,
    era_aliases: BTreeMap<String, Vec<String>>,
    all_eras: BTreeSet<String>,
    all_locations: BTreeSet<String>,
}

impl FacetCatalog {
    /// Build a catalog from configuration tables.
    ///
    /// Keywords and alias entries are lower-cased once here so the evaluator
    /// can compare without re-canonicalizing on every tour.
    pub fn from_config(config: &CatalogConfig) -> FacetCatalog {
        let mut period_eras = BTreeMap::new();
        let mut period_locations = BTreeMap::new();
        let mut period_keywords = BTreeMap::new();
        let mut era_locations = BTreeMap::new();
        let mut era_aliases = BTreeMap::new();
        let mut all_eras = BTreeSet::new();
        let mut all_locations = BTreeSet::new();

        for (period, entry) in &config.periods {
            let eras: BTreeSet<String> = entry.eras.iter().cloned().collect();
            all_eras.extend(eras.iter().cloned());
            period_eras.insert(*period, eras);

            let locations: BTreeSet<String> = entry.locations.iter().cloned().collect();
            all_locations.extend(locations.iter().cloned());
            period_locations.insert(*period, locations);

            period_keywords.insert(
                *period,
                entry.keywords.iter().map(|k| k.to_lowercase()).collect(),
            );
        }

        for (era_name, entry) in &config.eras {
            let key = era_name.to_lowercase();
            let locations: BTreeSet<String> = entry.locations.iter().cloned().collect();
            all_locations.extend(locations.iter().cloned());
            era_locations.insert(key.clone(), locations);
            era_aliases.insert(
                key,
                entry.aliases.iter().map(|a| a.to_lowercase()).collect(),
            );
        }

        FacetCatalog {
            period_eras,
            period_locations,
            period_keywords,
            era_locations,
            era_aliases,
            all_eras,
            all_locations,
        }
    }

    /// The canonical seeded catalog
    pub fn builtin() -> FacetCatalog {
        FacetCatalog::from_config(&builtin_config())
    }

    /// Process-wide shared instance of the builtin catalog
    pub fn shared() -> &'static FacetCatalog {
        static SHARED: Lazy<FacetCatalog> = Lazy::new(FacetCatalog::builtin);
        &SHARED
    }

    /// Era names belonging to a period; empty for periods with no entry
    pub fn eras_for_period(&self, period: Period) -> &BTreeSet<String> {
        self.period_eras.get(&period).unwrap_or(&EMPTY_SET)
    }

    /// Location tokens associated with a period; empty for periods with no entry
    pub fn locations_for_period(&self, period: Period) -> &BTreeSet<String> {
        self.period_locations.get(&period).unwrap_or(&EMPTY_SET)
    }

    /// Location tokens associated with an era, looked up case-insensitively;
    /// empty if the era has no registered entry
    pub fn locations_for_era(&self, era_name: &str) -> &BTreeSet<String> {
        self.era_locations
            .get(&era_name.to_lowercase())
            .unwrap_or(&EMPTY_SET)
    }

    /// Lower-cased substring keywords the evaluator matches for a period
    pub fn period_keywords(&self, period: Period) -> &[String] {
        self.period_keywords
            .get(&period)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Lower-cased alias keywords for an era, looked up case-insensitively.
    /// Eras without an alias entry fall back to bidirectional substring
    /// matching only.
    pub fn era_alias_keywords(&self, era_name: &str) -> &[String] {
        self.era_aliases
            .get(&era_name.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every era name appearing in any period's era set
    pub fn all_eras(&self) -> &BTreeSet<String> {
        &self.all_eras
    }

    /// Every location token appearing in any period or era entry
    pub fn all_locations(&self) -> &BTreeSet<String> {
        &self.all_locations
    }
}

fn period_entry(
    eras: &[&str],
    locations: &[&str],
    keywords: &[&str],
) -> PeriodEntry {
    PeriodEntry {
        eras: eras.iter().map(|s| s.to_string()).collect(),
        locations: locations.iter().map(|s| s.to_string()).collect(),
        keywords: keywords.iter().map(|s| s.to_string()).collect(),
    }
}

fn era_entry(locations: &[&str], aliases: &[&str]) -> EraEntry {
    EraEntry {
        locations: locations.iter().map(|s| s.to_string()).collect(),
        aliases: aliases.iter().map(|s| s.to_string()).collect(),
    }
}

/// The canonical seeded catalog tables.
///
/// Version history:
/// - v1: initial consolidation of the period/era keyword tables into a
///   single source of truth
pub fn builtin_config() -> CatalogConfig {
    let mut periods = BTreeMap::new();

    periods.insert(
        Period::Ancient,
        period_entry(
            &[
                "Ancient Near Eastern",
                "Ancient Egypt",
                "Ancient Greece",
                "Ancient Rome",
            ],
            &["Egypt", "Iraq", "Greece", "Italy", "Turkey", "Iran"],
            &[
                "ancient", "egypt", "pharaoh", "mesopotam", "babylon", "sumer", "akkad", "nile",
            ],
        ),
    );
    periods.insert(
        Period::Classical,
        period_entry(
            &[
                "Ancient Greece",
                "Ancient Rome",
                "Hellenistic World",
                "Achaemenid Persia",
            ],
            &["Greece", "Italy", "Turkey", "Iran"],
            &[
                "classical",
                "greek",
                "greece",
                "roman",
                "rome",
                "hellenistic",
                "achaemenid",
            ],
        ),
    );
    periods.insert(
        Period::Medieval,
        period_entry(
            &[
                "Byzantine Empire",
                "Viking Age",
                "Islamic Golden Age",
                "Medieval Europe",
                "Sasanian Persia",
            ],
            &[
                "Constantinople",
                "Turkey",
                "Scandinavia",
                "France",
                "Spain",
                "Iran",
            ],
            &["byzantine", "medieval", "viking", "sasanian", "islamic", "crusad"],
        ),
    );
    periods.insert(
        Period::Renaissance,
        period_entry(
            &["Renaissance Italy", "Ottoman Empire"],
            &["Italy", "France", "Turkey"],
            &["renaissance", "medici", "ottoman"],
        ),
    );
    periods.insert(
        Period::EarlyModern,
        period_entry(
            &["Ottoman Empire", "Mughal India", "Age of Exploration"],
            &["Turkey", "India", "Spain", "Portugal"],
            &["ottoman", "mughal", "colonial", "exploration", "early modern"],
        ),
    );
    periods.insert(
        Period::Modern,
        period_entry(
            &["Victorian Britain", "Industrial Age"],
            &["England", "France", "Germany"],
            &["victorian", "industrial", "modern"],
        ),
    );
    // Date-range browsing only; owns no seeded eras or keywords
    periods.insert(Period::Custom, PeriodEntry::default());

    let mut eras = BTreeMap::new();
    eras.insert(
        "Ancient Near Eastern".to_string(),
        era_entry(
            &["Iraq", "Babylon", "Iran", "Syria"],
            &["mesopotam", "babylon", "assyria", "persian", "hittite"],
        ),
    );
    eras.insert(
        "Ancient Egypt".to_string(),
        era_entry(
            &["Egypt", "Cairo", "Luxor", "Giza"],
            &["egypt", "pharaoh", "nile"],
        ),
    );
    eras.insert(
        "Ancient Greece".to_string(),
        era_entry(
            &["Greece", "Athens", "Crete"],
            &["greek", "hellen", "minoan", "mycenae"],
        ),
    );
    eras.insert(
        "Ancient Rome".to_string(),
        era_entry(
            &["Italy", "Rome", "Pompeii"],
            &["roman", "etruscan", "latin"],
        ),
    );
    eras.insert(
        "Byzantine Empire".to_string(),
        era_entry(
            &["Constantinople", "Istanbul", "Turkey", "Greece"],
            &["byzantine", "byzantium", "constantinople"],
        ),
    );
    eras.insert(
        "Viking Age".to_string(),
        era_entry(
            &["Norway", "Denmark", "Sweden", "Iceland"],
            &["viking", "norse", "scandinav"],
        ),
    );
    eras.insert(
        "Islamic Golden Age".to_string(),
        era_entry(
            &["Baghdad", "Cordoba", "Cairo"],
            &["islamic", "abbasid", "umayyad", "caliphate"],
        ),
    );
    eras.insert(
        "Medieval Europe".to_string(),
        era_entry(
            &["France", "England", "Germany", "Spain"],
            &["medieval", "frankish", "norman", "carolingian"],
        ),
    );
    eras.insert(
        "Sasanian Persia".to_string(),
        era_entry(&["Iran", "Ctesiphon"], &["sasanian", "sassanid", "persian"]),
    );
    eras.insert(
        "Hellenistic World".to_string(),
        era_entry(
            &["Greece", "Egypt", "Turkey", "Syria"],
            &["hellenistic", "ptolemaic", "seleucid", "macedon"],
        ),
    );
    eras.insert(
        "Achaemenid Persia".to_string(),
        era_entry(&["Iran", "Persepolis"], &["achaemenid", "persian"]),
    );
    eras.insert(
        "Ottoman Empire".to_string(),
        era_entry(&["Turkey", "Istanbul"], &["ottoman"]),
    );
    eras.insert(
        "Renaissance Italy".to_string(),
        era_entry(
            &["Italy", "Florence", "Venice", "Rome"],
            &["renaissance", "medici"],
        ),
    );
    eras.insert(
        "Mughal India".to_string(),
        era_entry(&["India", "Agra", "Delhi"], &["mughal"]),
    );
    eras.insert(
        "Age of Exploration".to_string(),
        era_entry(&["Spain", "Portugal", "Lisbon"], &["exploration", "colonial"]),
    );
    eras.insert(
        "Victorian Britain".to_string(),
        era_entry(&["England", "London"], &["victorian"]),
    );
    eras.insert(
        "Industrial Age".to_string(),
        era_entry(&["England", "Germany", "Manchester"], &["industrial"]),
    );

    CatalogConfig {
        version: 1,
        periods,
        eras,
    }
}
