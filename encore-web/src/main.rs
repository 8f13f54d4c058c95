//! encore-web - Booking board web service
//!
//! Lists venues and artists, schedules shows pairing them, and serves the
//! browse/search pages. Single service over a SQLite database.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use encore_common::config::{resolve_database_path, DEFAULT_PORT};
use encore_common::db::init_database;
use encore_web::{build_router, AppState};

/// Command-line arguments for encore-web
#[derive(Parser, Debug)]
#[command(name = "encore-web")]
#[command(about = "Booking board for venues, artists, and shows")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "ENCORE_PORT")]
    port: u16,

    /// Database file (defaults to ENCORE_DB, the config file, then the
    /// platform data directory)
    #[arg(short, long)]
    database: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "encore_web=info,encore_common=info,tower_http=info".into()),
        )
        .init();

    let args = Args::parse();

    info!("Starting encore-web v{}", env!("CARGO_PKG_VERSION"));

    let db_path = resolve_database_path(args.database.as_deref());
    info!("Database: {}", db_path.display());

    let pool = init_database(&db_path).await?;
    info!("Database connection established");

    let state = AppState::new(pool);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", args.port)).await?;
    info!("Listening on http://0.0.0.0:{}", args.port);

    axum::serve(listener, app).await?;

    Ok(())
}
