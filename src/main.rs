use std::sync::Arc;

use tracing::info;

use doorkeep::auth::{pool_loader, SessionManager};
use doorkeep::web::{AppState, WebServer};
use doorkeep::{Config, Database};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load_with_env("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    // Initialize logging
    if let Err(e) = doorkeep::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        doorkeep::logging::init_console_only(&config.logging.level);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Invalid configuration: {e}");
        std::process::exit(1);
    }

    let db = match Database::open(&config.database.path).await {
        Ok(db) => Arc::new(db),
        Err(e) => {
            tracing::error!("Failed to open database: {e}");
            std::process::exit(1);
        }
    };

    let sessions = Arc::new(SessionManager::new(
        &config.session.secret,
        config.session.ttl_secs,
        pool_loader(db.pool().clone()),
    ));

    let state = AppState::new(
        db,
        sessions,
        config.download.path.clone(),
        config.registration.max_name_length,
    );

    info!("doorkeep - membership site");

    if let Err(e) = WebServer::new(&config.server, state).run().await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}
