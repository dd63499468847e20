//! Query parameter to selection state translation
//!
//! Facet parameters are comma-separated lists ("periods=ancient,medieval").
//! Unknown period identifiers are dropped rather than rejected: the engine's
//! fail-open policy means a bad facet narrows to nothing, it never errors.

use serde::Deserialize;
use tempora_common::Period;
use tempora_filter::SelectionState;
use tracing::debug;

/// Facet query parameters shared by the tours and facets endpoints
#[derive(Debug, Default, Deserialize)]
pub struct FacetParams {
    /// Comma-separated period identifiers
    pub periods: Option<String>,
    /// Comma-separated era names
    pub eras: Option<String>,
    /// Comma-separated location tokens
    pub locations: Option<String>,
    /// Comma-separated ruler names
    pub rulers: Option<String>,
}

impl FacetParams {
    /// Build a per-request selection state from the query parameters.
    ///
    /// The state machine's toggles are not used here: query parameters are a
    /// complete selection snapshot, not a transition, so fields are filled
    /// directly and the cascade rules do not apply.
    pub fn to_selection(&self) -> SelectionState {
        let mut state = SelectionState::new();

        for token in split_list(&self.periods) {
            match Period::parse(&token) {
                Some(period) => {
                    state.selected_periods.insert(period);
                }
                None => debug!(period = %token, "ignoring unknown period parameter"),
            }
        }
        state.selected_eras.extend(split_list(&self.eras));
        state.selected_locations.extend(split_list(&self.locations));
        state.selected_rulers.extend(split_list(&self.rulers));

        state
    }
}

fn split_list(raw: &Option<String>) -> Vec<String> {
    raw.as_deref()
        .unwrap_or("")
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_separated_facets() {
        let params = FacetParams {
            periods: Some("ancient,medieval".to_string()),
            eras: Some("Ancient Egypt, Viking Age".to_string()),
            locations: None,
            rulers: None,
        };
        let state = params.to_selection();
        assert_eq!(state.selected_periods.len(), 2);
        assert!(state.selected_eras.contains("Ancient Egypt"));
        assert!(state.selected_eras.contains("Viking Age"));
    }

    #[test]
    fn test_unknown_periods_dropped() {
        let params = FacetParams {
            periods: Some("ancient,jurassic".to_string()),
            ..Default::default()
        };
        let state = params.to_selection();
        assert_eq!(state.selected_periods.len(), 1);
        assert!(state.selected_periods.contains(&Period::Ancient));
    }

    #[test]
    fn test_blank_and_empty_entries_dropped() {
        let params = FacetParams {
            locations: Some(" , Rome, ,".to_string()),
            ..Default::default()
        };
        let state = params.to_selection();
        assert_eq!(state.selected_locations.len(), 1);
        assert!(state.selected_locations.contains("Rome"));
    }
}
