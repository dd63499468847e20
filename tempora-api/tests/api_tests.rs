//! Integration tests for tempora-api endpoints
//!
//! Tests cover:
//! - Tour listing with facet filtering, search, and pagination
//! - Facet availability derivation (era-over-period precedence)
//! - Era reference listing
//! - Health endpoint
//!
//! Each test seeds its own in-memory SQLite database, so tests are
//! independent and need no on-disk fixture.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::util::ServiceExt; // for `oneshot` method

use tempora_api::{build_router, AppState};

/// Test helper: create and seed an in-memory database.
///
/// A single connection keeps the in-memory database alive and shared for
/// the whole test.
async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Should open in-memory database");

    sqlx::query(
        "CREATE TABLE tours (
            id INTEGER PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            era TEXT,
            civilization TEXT,
            locations TEXT,
            highlights TEXT
        )",
    )
    .execute(&pool)
    .await
    .expect("Should create tours table");

    sqlx::query(
        "CREATE TABLE eras (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            start_year INTEGER,
            end_year INTEGER,
            key_figures TEXT,
            period TEXT
        )",
    )
    .execute(&pool)
    .await
    .expect("Should create eras table");

    let tours: Vec<(i64, &str, &str, Option<&str>, Option<&str>, Option<&str>, Option<&str>)> = vec![
        (
            1,
            "Ziggurats of Ur",
            "Sumerian temple platforms",
            Some("Ancient Near Eastern"),
            None,
            Some("Ur, Iraq"),
            None,
        ),
        (
            2,
            "Theodosian Walls",
            "Walk the land walls of Constantinople",
            Some("Byzantine Empire"),
            None,
            Some("Constantinople, Greece"),
            Some(r#"["Commissioned under Theodosius II"]"#),
        ),
        (
            3,
            "Florence workshops",
            "Guild crafts of the quattrocento",
            Some("Renaissance"),
            None,
            Some("Florence, Italy"),
            None,
        ),
        (
            4,
            "Gates of Babylon",
            "The Ishtar Gate processional way",
            None,
            Some("Neo-Babylonian"),
            Some("Babylon, Iraq"),
            None,
        ),
    ];
    for (id, title, description, era, civilization, locations, highlights) in tours {
        sqlx::query(
            "INSERT INTO tours (id, title, description, era, civilization, locations, highlights)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(era)
        .bind(civilization)
        .bind(locations)
        .bind(highlights)
        .execute(&pool)
        .await
        .expect("Should insert tour");
    }

    sqlx::query(
        "INSERT INTO eras (id, name, start_year, end_year, key_figures, period)
         VALUES (1, 'Ancient Egypt', -3100, -30, 'Ramesses II, Cleopatra VII', 'ancient'),
                (2, 'Byzantine Empire', 330, 1453, 'Justinian I', 'medieval')",
    )
    .execute(&pool)
    .await
    .expect("Should insert eras");

    pool
}

/// Test helper: create app over a seeded pool
fn setup_app(db: SqlitePool) -> axum::Router {
    build_router(AppState::new(db))
}

/// Test helper: create GET request
fn test_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Test helper: extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

fn tour_ids(body: &Value) -> Vec<i64> {
    body["tours"]
        .as_array()
        .expect("tours should be an array")
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect()
}

// =============================================================================
// Health Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_app(setup_test_db().await);

    let response = app.oneshot(test_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "tempora-api");
    assert!(body["version"].is_string());
}

// =============================================================================
// Tour Listing Tests
// =============================================================================

#[tokio::test]
async fn test_tours_unfiltered_returns_all_in_id_order() {
    let app = setup_app(setup_test_db().await);

    let response = app.oneshot(test_request("/api/tours")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["total_results"], 4);
    assert_eq!(body["page"], 1);
    assert_eq!(tour_ids(&body), vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_tours_period_filter() {
    let app = setup_app(setup_test_db().await);

    // "ancient" admits the Near Eastern and Neo-Babylonian tours only
    let response = app
        .oneshot(test_request("/api/tours?periods=ancient"))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(tour_ids(&body), vec![1, 4]);
}

#[tokio::test]
async fn test_tours_era_alias_filter() {
    let app = setup_app(setup_test_db().await);

    // "Neo-Babylonian" is admitted by the era's "babylon" alias keyword
    let response = app
        .oneshot(test_request("/api/tours?eras=Ancient%20Near%20Eastern"))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(tour_ids(&body), vec![1, 4]);
}

#[tokio::test]
async fn test_tours_period_and_location_compose() {
    let app = setup_app(setup_test_db().await);

    let response = app
        .oneshot(test_request("/api/tours?periods=medieval&locations=Greece"))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(tour_ids(&body), vec![2]);

    // A location the tour does not mention excludes it
    let app = setup_app(setup_test_db().await);
    let response = app
        .oneshot(test_request("/api/tours?periods=medieval&locations=Rome"))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["total_results"], 0);
}

#[tokio::test]
async fn test_tours_search_query() {
    let app = setup_app(setup_test_db().await);

    let response = app
        .oneshot(test_request("/api/tours?q=babylon"))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    // Hits tour 4 in both title and locations; "Ur, Iraq" does not contain it
    assert_eq!(tour_ids(&body), vec![4]);
}

#[tokio::test]
async fn test_tours_unknown_period_is_ignored() {
    let app = setup_app(setup_test_db().await);

    let response = app
        .oneshot(test_request("/api/tours?periods=jurassic"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    // Dropped without error; no period constraint remains
    assert_eq!(body["total_results"], 4);
}

#[tokio::test]
async fn test_tours_unknown_era_yields_empty_result() {
    let app = setup_app(setup_test_db().await);

    let response = app
        .oneshot(test_request("/api/tours?eras=Atlantis"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["total_results"], 0);
}

#[tokio::test]
async fn test_tours_page_clamped() {
    let app = setup_app(setup_test_db().await);

    let response = app
        .oneshot(test_request("/api/tours?page=99"))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    // 4 results fit on one page; out-of-range page is clamped
    assert_eq!(body["page"], 1);
    assert_eq!(body["total_pages"], 1);
    assert_eq!(tour_ids(&body).len(), 4);
}

#[tokio::test]
async fn test_tours_highlights_parsed_from_json_column() {
    let app = setup_app(setup_test_db().await);

    let response = app
        .oneshot(test_request("/api/tours?q=theodosian"))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(tour_ids(&body), vec![2]);
    assert_eq!(
        body["tours"][0]["highlights"][0],
        "Commissioned under Theodosius II"
    );
}

// =============================================================================
// Facet Availability Tests
// =============================================================================

#[tokio::test]
async fn test_facets_all_enabled_when_nothing_selected() {
    let app = setup_app(setup_test_db().await);

    let response = app.oneshot(test_request("/api/facets")).await.unwrap();
    let body = extract_json(response.into_body()).await;
    let eras = body["enabled_eras"].as_array().unwrap();
    assert!(eras.iter().any(|e| e == "Ancient Egypt"));
    assert!(eras.iter().any(|e| e == "Viking Age"));
}

#[tokio::test]
async fn test_facets_scoped_by_period() {
    let app = setup_app(setup_test_db().await);

    let response = app
        .oneshot(test_request("/api/facets?periods=ancient"))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    let eras = body["enabled_eras"].as_array().unwrap();
    assert!(eras.iter().any(|e| e == "Ancient Egypt"));
    assert!(!eras.iter().any(|e| e == "Viking Age"));
}

#[tokio::test]
async fn test_facets_era_takes_priority_over_period() {
    let app = setup_app(setup_test_db().await);

    let response = app
        .oneshot(test_request(
            "/api/facets?periods=ancient&eras=Ancient%20Egypt",
        ))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    let locations = body["enabled_locations"].as_array().unwrap();
    // Era-level associations only, not the whole ancient period set
    assert!(locations.iter().any(|l| l == "Luxor"));
    assert!(!locations.iter().any(|l| l == "Iran"));
}

// =============================================================================
// Era Reference Tests
// =============================================================================

#[tokio::test]
async fn test_eras_listing() {
    let app = setup_app(setup_test_db().await);

    let response = app.oneshot(test_request("/api/eras")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["total"], 2);
    assert_eq!(body["eras"][0]["name"], "Ancient Egypt");
    assert_eq!(body["eras"][0]["start_year"], -3100);
    assert_eq!(body["eras"][1]["key_figures"], "Justinian I");
}
