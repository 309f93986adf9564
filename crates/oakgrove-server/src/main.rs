//! Action API entry point for the Oakgrove forest game.
//!
//! Startup sequence:
//!
//! 1. Initialize structured logging.
//! 2. Load `oakgrove-config.yaml` (stock defaults when missing).
//! 3. Build the forest clock from the validated time configuration.
//! 4. Connect to `PostgreSQL`, ping it, and run migrations -- an
//!    unreachable store is fatal and the process exits before serving.
//! 5. Assemble the application state and serve the router.

use std::path::Path;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use oakgrove_core::{ForestClock, GameConfig};
use oakgrove_db::{PostgresConfig, PostgresPool};
use oakgrove_server::{AppState, build_router};

/// Path of the configuration file, relative to the working directory.
const CONFIG_PATH: &str = "oakgrove-config.yaml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Structured logging first, so everything after is visible.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("oakgrove-server starting");

    // 2. Configuration: the stock game when the file is absent.
    let config_path = Path::new(CONFIG_PATH);
    let config = if config_path.exists() {
        GameConfig::from_file(config_path)?
    } else {
        let mut config = GameConfig::default();
        config.infrastructure.apply_env_overrides();
        config
    };
    info!(
        cycle_secs = config.time.cycle_secs,
        days_per_cycle = config.time.days_per_cycle,
        night_after_day = config.time.night_after_day,
        "configuration loaded"
    );

    // 3. Forest clock, validated against the time configuration.
    let clock = ForestClock::new(&config.time)?;

    // 4. Store connection. Unreachable store is fatal by design: the
    //    process must not start serving actions it cannot persist.
    let pg_config = PostgresConfig::new(&config.infrastructure.postgres_url);
    let pool = PostgresPool::connect(&pg_config).await?;
    pool.ping().await?;
    pool.run_migrations().await?;

    // 5. State, router, serve.
    let addr = format!(
        "{}:{}",
        config.infrastructure.bind_host, config.infrastructure.bind_port
    );
    let state = Arc::new(AppState::new(pool, clock, config));
    let router = build_router(state);

    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "action API listening");

    axum::serve(listener, router).await?;

    Ok(())
}
