//! Database access layer for tempora-api
//!
//! All connections are read-only; the catalog is written by the separate
//! ingestion process, never by this service.

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use std::path::Path;
use tempora_common::{Era, Tour};

/// Connect to the catalog database in read-only mode
///
/// Safety: Uses SQLite mode=ro to prevent any write operations
pub async fn connect_readonly(db_path: &Path) -> Result<SqlitePool> {
    if !db_path.exists() {
        anyhow::bail!(
            "Database not found: {}\nRun the catalog ingestion first to create it.",
            db_path.display()
        );
    }

    // mode=ro: read-only mode
    // immutable=1: additional safety (SQLite won't write even for internal operations)
    let db_url = format!("sqlite://{}?mode=ro&immutable=1", db_path.display());

    let pool = SqlitePool::connect(&db_url)
        .await
        .context("Failed to connect to database in read-only mode")?;

    // Verify read-only by attempting a write (should fail)
    #[cfg(debug_assertions)]
    {
        let write_test = sqlx::query("CREATE TABLE _test_write (id INTEGER)")
            .execute(&pool)
            .await;
        if write_test.is_ok() {
            panic!("SAFETY VIOLATION: Database connection is not read-only!");
        }
    }

    Ok(pool)
}

/// Load the full tour list in stable id order.
///
/// `highlights` is stored as a JSON array of strings; rows with missing or
/// malformed highlights come back with an empty list rather than an error.
pub async fn load_tours(pool: &SqlitePool) -> Result<Vec<Tour>> {
    let rows = sqlx::query_as::<
        _,
        (
            i64,
            String,
            String,
            Option<String>,
            Option<String>,
            Option<String>,
            Option<String>,
        ),
    >(
        "SELECT id, title, description, era, civilization, locations, highlights
         FROM tours
         ORDER BY id",
    )
    .fetch_all(pool)
    .await
    .context("Failed to load tours")?;

    Ok(rows
        .into_iter()
        .map(
            |(id, title, description, era, civilization, locations, highlights)| Tour {
                id,
                title,
                description,
                era,
                civilization,
                locations,
                highlights: highlights
                    .as_deref()
                    .and_then(|h| serde_json::from_str(h).ok())
                    .unwrap_or_default(),
            },
        )
        .collect())
}

/// Load the era reference table in stable id order
pub async fn load_eras(pool: &SqlitePool) -> Result<Vec<Era>> {
    let rows = sqlx::query_as::<
        _,
        (
            i64,
            String,
            Option<i64>,
            Option<i64>,
            Option<String>,
            Option<String>,
        ),
    >(
        "SELECT id, name, start_year, end_year, key_figures, period
         FROM eras
         ORDER BY id",
    )
    .fetch_all(pool)
    .await
    .context("Failed to load eras")?;

    Ok(rows
        .into_iter()
        .map(|(id, name, start_year, end_year, key_figures, period)| Era {
            id,
            name,
            start_year,
            end_year,
            key_figures,
            period,
        })
        .collect())
}
