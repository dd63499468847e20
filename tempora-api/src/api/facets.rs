//! Facet availability endpoint: which eras/locations are selectable
//!
//! Drives the UI's button enabling. Pure derivation from the catalog tables
//! and the requested selections; no database access.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::params::FacetParams;
use crate::AppState;

/// Query parameters for facet availability
#[derive(Debug, Deserialize)]
pub struct FacetsQuery {
    /// Comma-separated period identifiers
    pub periods: Option<String>,
    /// Comma-separated era names
    pub eras: Option<String>,
}

/// Availability response, sorted for stable output
#[derive(Debug, Serialize)]
pub struct FacetsResponse {
    pub enabled_eras: Vec<String>,
    pub enabled_locations: Vec<String>,
}

/// GET /api/facets?periods=&eras=
///
/// Returns the era and location names currently selectable given the
/// requested periods and eras. Era-level location scoping takes priority
/// over period-level when both are present.
pub async fn facet_availability(
    State(state): State<AppState>,
    Query(query): Query<FacetsQuery>,
) -> Json<FacetsResponse> {
    let selection = FacetParams {
        periods: query.periods,
        eras: query.eras,
        locations: None,
        rulers: None,
    }
    .to_selection();

    Json(FacetsResponse {
        enabled_eras: selection.enabled_eras(&state.catalog).into_iter().collect(),
        enabled_locations: selection
            .enabled_locations(&state.catalog)
            .into_iter()
            .collect(),
    })
}
