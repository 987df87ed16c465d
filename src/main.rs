// src/main.rs
//
// Ski Station HTTP server
//
// Environment:
// - SKI_STATION_CONFIG: path to a TOML config file (default: ./ski-station.toml if present)
// - HOST, PORT, SKI_STATION_DB: override the config file
// - RUST_LOG: log filter (default: info)

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use ski_station::db::{create_connection_pool, get_connection, initialize_database};
use ski_station::{create_router, AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. LOGGING
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("Starting Ski Station server");

    // 2. CONFIGURATION
    let config = AppConfig::load()?;
    let addr = config.bind_address()?;

    // 3. DATABASE
    let pool = Arc::new(create_connection_pool(&config.database)?);
    {
        let conn = get_connection(&pool)?;
        initialize_database(&conn)?;
    }
    info!("Database ready");

    // 4. HTTP
    let app = create_router(AppState::new(pool));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
