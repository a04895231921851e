//! User API Library
//!
//! This crate provides the HTTP REST API over the in-memory user store.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use tracing::info;

use common::{AppError, AppResult};

use crate::config::ApiConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: ApiConfig) -> AppResult<()> {
    let addr = config.service.addr();
    info!(
        "Starting {} (id strategy: {})",
        config.service.service_name, config.store.id_strategy
    );

    // Store starts empty and lives as long as the router
    let state = AppState::from_config(config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}
