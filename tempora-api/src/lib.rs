//! tempora-api library - read-only tour browse service
//!
//! Serves the tour catalog over HTTP. Handlers load rows from the SQLite
//! store and delegate every visibility decision to `tempora-filter`; nothing
//! here writes to the database or holds per-session state.

use axum::Router;
use sqlx::SqlitePool;
use std::sync::Arc;
use tempora_filter::FacetCatalog;

pub mod api;
pub mod db;
pub mod pagination;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (read-only)
    pub db: SqlitePool,
    /// Seeded facet tables, shared by every request
    pub catalog: Arc<FacetCatalog>,
}

impl AppState {
    /// Create new application state with the builtin catalog
    pub fn new(db: SqlitePool) -> Self {
        Self {
            db,
            catalog: Arc::new(FacetCatalog::builtin()),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;
    use tower_http::trace::TraceLayer;

    Router::new()
        .route("/api/tours", get(api::list_tours))
        .route("/api/facets", get(api::facet_availability))
        .route("/api/eras", get(api::list_eras))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
