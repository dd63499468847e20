//! tempora-api - Read-only tour catalog browse service
//!
//! Serves the heritage tour catalog with cascading facet filtering and
//! free-text search. The database is written by the separate ingestion
//! process; this service opens it read-only.

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use tempora_api::{build_router, db, AppState};
use tempora_common::config;

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "tempora-api", about = "Tempora tour catalog browse service")]
struct Args {
    /// Root folder holding tempora.db (overrides TEMPORA_ROOT and config file)
    #[arg(long)]
    root_folder: Option<String>,

    /// Port to listen on
    #[arg(long, env = "TEMPORA_PORT", default_value_t = 5740)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    info!(
        "Starting Tempora browse service (tempora-api) v{}",
        env!("CARGO_PKG_VERSION")
    );

    // 4-tier resolution: CLI arg, env var, config file, OS default
    let root_folder = config::resolve_root_folder(args.root_folder.as_deref(), "TEMPORA_ROOT");
    let db_path = config::database_path(&root_folder);
    info!("Database path: {}", db_path.display());

    let pool = match db::connect_readonly(&db_path).await {
        Ok(pool) => {
            info!("✓ Connected to database (read-only)");
            pool
        }
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e);
        }
    };

    // Create application state and router
    let state = AppState::new(pool);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", args.port)).await?;
    info!("tempora-api listening on http://127.0.0.1:{}", args.port);
    info!("Health check: http://127.0.0.1:{}/health", args.port);

    axum::serve(listener, app).await?;

    Ok(())
}
