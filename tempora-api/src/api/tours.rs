//! Tour listing endpoint: facet filtering plus free-text search

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tempora_common::Tour;
use tempora_filter::filter_tours;

use crate::api::params::FacetParams;
use crate::pagination::{calculate_pagination, PAGE_SIZE};
use crate::{db, AppState};

/// Query parameters for the tour list
///
/// Facet fields are flat rather than nested: `serde_urlencoded` cannot
/// combine `flatten` with typed fields like `page`.
#[derive(Debug, Deserialize)]
pub struct ToursQuery {
    /// Comma-separated period identifiers
    pub periods: Option<String>,
    /// Comma-separated era names
    pub eras: Option<String>,
    /// Comma-separated location tokens
    pub locations: Option<String>,
    /// Comma-separated ruler names
    pub rulers: Option<String>,

    /// Free-text search over title, description, era, and locations
    pub q: Option<String>,

    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: usize,
}

impl ToursQuery {
    fn facets(&self) -> FacetParams {
        FacetParams {
            periods: self.periods.clone(),
            eras: self.eras.clone(),
            locations: self.locations.clone(),
            rulers: self.rulers.clone(),
        }
    }
}

fn default_page() -> usize {
    1
}

/// Tour list response with pagination metadata
#[derive(Debug, Serialize)]
pub struct ToursResponse {
    pub total_results: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub tours: Vec<Tour>,
}

/// GET /api/tours?periods=&eras=&locations=&rulers=&q=&page=
///
/// Returns the visible subset of the catalog under the requested facets, in
/// stable id order, paginated after filtering.
pub async fn list_tours(
    State(state): State<AppState>,
    Query(query): Query<ToursQuery>,
) -> Result<Json<ToursResponse>, ToursError> {
    let tours = db::load_tours(&state.db)
        .await
        .map_err(|e| ToursError::DatabaseError(e.to_string()))?;

    let selection = query.facets().to_selection();
    let visible = filter_tours(&tours, &selection, query.q.as_deref(), &state.catalog);

    let total_results = visible.len();
    let p = calculate_pagination(total_results, query.page);
    let page_tours: Vec<Tour> = visible
        .into_iter()
        .skip(p.offset)
        .take(PAGE_SIZE)
        .collect();

    Ok(Json(ToursResponse {
        total_results,
        page: p.page,
        page_size: PAGE_SIZE,
        total_pages: p.total_pages,
        tours: page_tours,
    }))
}

/// Tour listing errors
#[derive(Debug)]
pub enum ToursError {
    DatabaseError(String),
}

impl IntoResponse for ToursError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ToursError::DatabaseError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", msg),
            ),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
