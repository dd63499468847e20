//! Era reference data endpoint

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use tempora_common::Era;

use crate::{db, AppState};

/// Era list response
#[derive(Debug, Serialize)]
pub struct ErasResponse {
    pub total: usize,
    pub eras: Vec<Era>,
}

/// GET /api/eras
///
/// Returns the full era reference table in stable id order. Read-only
/// ingestion-owned data; small enough that it is never paginated.
pub async fn list_eras(State(state): State<AppState>) -> Result<Json<ErasResponse>, ErasError> {
    let eras = db::load_eras(&state.db)
        .await
        .map_err(|e| ErasError::DatabaseError(e.to_string()))?;

    Ok(Json(ErasResponse {
        total: eras.len(),
        eras,
    }))
}

/// Era listing errors
#[derive(Debug)]
pub enum ErasError {
    DatabaseError(String),
}

impl IntoResponse for ErasError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ErasError::DatabaseError(msg) => (
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
