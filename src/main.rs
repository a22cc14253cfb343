//! Factory Management System API
//!
//! Serves list and create endpoints for products, orders, customers and
//! production records, with generated OpenAPI documentation.

use std::sync::Arc;

use tokio::net::TcpListener;

mod api;
mod config;
mod domain;
mod error;
mod logging;

use crate::api::build_router;
use crate::config::Config;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Configuration loaded at startup.
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if present)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Note: No .env file loaded ({e})");
    }

    logging::init();

    tracing::info!("Starting Factory API v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load().map_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    tracing::info!(
        host = %config.server.host,
        port = %config.server.port,
        strict_validation = %config.api.strict_validation,
        "Configuration loaded"
    );

    let config = Arc::new(config);
    let app = build_router(Arc::clone(&config));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!(address = %addr, "Server listening");
    tracing::info!(
        "Swagger UI available at http://{}{}/",
        addr,
        config.docs.swagger_path
    );

    axum::serve(listener, app).await?;

    Ok(())
}
