//! Filter evaluator: the tour visibility predicate
//!
//! Five independent dimensions, ANDed; an empty dimension is trivially
//! satisfied. The matching deliberately mixes exact and substring rules
//! (tours carry free-text era/civilization labels, so "Byzantine Empire"
//! must match the medieval period via the "byzantine" keyword). The fuzziness
//! is occasionally asymmetric and non-transitive; that is the shipped
//! behavior tours' visibility depends on, so it is reproduced here rather
//! than tightened.
//!
//! Fail-open-to-empty: unknown facet values never error, they just match
//! nothing. The evaluator preserves input order and never resorts.

use tempora_common::Tour;
use tracing::debug;

use crate::catalog::FacetCatalog;
use crate::selection::SelectionState;

/// Return the visible subset of `tours` under the current selections,
/// preserving input order.
pub fn filter_tours(
    tours: &[Tour],
    state: &SelectionState,
    search_query: Option<&str>,
    catalog: &FacetCatalog,
) -> Vec<Tour> {
    let visible: Vec<Tour> = tours
        .iter()
        .filter(|tour| tour_matches(tour, state, search_query, catalog))
        .cloned()
        .collect();
    debug!(
        total = tours.len(),
        visible = visible.len(),
        "evaluated tour filter"
    );
    visible
}

/// The full AND-composed predicate for a single tour
pub fn tour_matches(
    tour: &Tour,
    state: &SelectionState,
    search_query: Option<&str>,
    catalog: &FacetCatalog,
) -> bool {
    matches_periods(tour, state, catalog)
        && matches_eras(tour, state, catalog)
        && matches_locations(tour, state)
        && matches_rulers(tour, state)
        && matches_search(tour, search_query)
}

/// The tour's era-like text fields, lower-cased, empties dropped.
///
/// `civilization` is used interchangeably with `era` by the ingestion
/// process, so both participate in period and era matching.
fn era_texts(tour: &Tour) -> Vec<String> {
    [tour.era.as_deref(), tour.civilization.as_deref()]
        .into_iter()
        .flatten()
        .map(str::to_lowercase)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Period dimension: the tour's era/civilization text must contain at least
/// one keyword of at least one selected period. A selected period with no
/// keywords (unknown or `custom`) contributes nothing.
fn matches_periods(tour: &Tour, state: &SelectionState, catalog: &FacetCatalog) -> bool {
    if state.selected_periods.is_empty() {
        return true;
    }
    let texts = era_texts(tour);
    state.selected_periods.iter().any(|period| {
        catalog
            .period_keywords(*period)
            .iter()
            .any(|keyword| texts.iter().any(|text| text.contains(keyword)))
    })
}

/// Era dimension: bidirectional substring between the selected era name and
/// the tour's era/civilization text, or a hit on the era's alias keyword
/// table ("Ancient Near Eastern" matches "Neo-Babylonian" via "babylon").
fn matches_eras(tour: &Tour, state: &SelectionState, catalog: &FacetCatalog) -> bool {
    if state.selected_eras.is_empty() {
        return true;
    }
    let texts = era_texts(tour);
    state.selected_eras.iter().any(|era_name| {
        let selected = era_name.to_lowercase();
        let substring_hit = texts
            .iter()
            .any(|text| text.contains(&selected) || selected.contains(text.as_str()));
        substring_hit
            || catalog
                .era_alias_keywords(era_name)
                .iter()
                .any(|keyword| texts.iter().any(|text| text.contains(keyword)))
    })
}

/// Location dimension: the tour's comma-separated locations text must
/// contain a selected location, or a selected location must contain the
/// tour's first location token ("Rome" selected matches a tour whose
/// locations lead with "Rome").
fn matches_locations(tour: &Tour, state: &SelectionState) -> bool {
    if state.selected_locations.is_empty() {
        return true;
    }
    let locations = match tour.locations.as_deref() {
        Some(text) if !text.trim().is_empty() => text.to_lowercase(),
        _ => return false,
    };
    let first_token = locations
        .split(',')
        .next()
        .map(str::trim)
        .unwrap_or("");
    state.selected_locations.iter().any(|selected| {
        let selected = selected.to_lowercase();
        locations.contains(&selected)
            || (!first_token.is_empty() && selected.contains(first_token))
    })
}

/// Ruler dimension: any selected ruler name appears in the title,
/// description, or highlights. Separate facet, never cascaded.
fn matches_rulers(tour: &Tour, state: &SelectionState) -> bool {
    if state.selected_rulers.is_empty() {
        return true;
    }
    let title = tour.title.to_lowercase();
    let description = tour.description.to_lowercase();
    state.selected_rulers.iter().any(|ruler| {
        let ruler = ruler.to_lowercase();
        if ruler.is_empty() {
            return false;
        }
        title.contains(&ruler)
            || description.contains(&ruler)
            || tour
                .highlights
                .iter()
                .any(|h| h.to_lowercase().contains(&ruler))
    })
}

/// Free-text dimension: the query appears in title, description, era, or
/// locations. Blank queries filter nothing.
fn matches_search(tour: &Tour, search_query: Option<&str>) -> bool {
    let query = match search_query {
        Some(q) if !q.trim().is_empty() => q.trim().to_lowercase(),
        _ => return true,
    };
    tour.title.to_lowercase().contains(&query)
        || tour.description.to_lowercase().contains(&query)
        || tour
            .era
            .as_deref()
            .is_some_and(|e| e.to_lowercase().contains(&query))
        || tour
            .locations
            .as_deref()
            .is_some_and(|l| l.to_lowercase().contains(&query))
}
