use ab_auth::Argon2PasswordHasher;
use ab_config::Config;
use ab_server::{AppState, build_router, cors_layer, logger};

use std::error::Error;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load .env file if present (development)
    let _ = dotenvy::dotenv();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let log_dir = Config::config_dir()?.join(&config.logging.dir);
        std::fs::create_dir_all(&log_dir)?;
        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting ab-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Open database and run migrations
    let database_path = config.database_path()?;
    info!("Opening database: {}", database_path.display());
    let pool = ab_db::open_pool(&database_path).await?;

    let app_state = AppState::new(
        pool,
        &config.auth,
        Arc::new(Argon2PasswordHasher::new()),
    )?;

    if config.auth.enabled {
        info!("Accident endpoints require a bearer token");
    } else {
        warn!("Accident endpoints are open - set auth.enabled to require sign-in");
    }

    let app = build_router(app_state).layer(cors_layer(&config.cors)?);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            // Keep serving; the process can still be stopped externally
            std::future::pending::<()>().await;
        }
    }
}
