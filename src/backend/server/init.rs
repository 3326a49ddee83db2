/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including database loading, state creation, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Connect to PostgreSQL and run migrations
 * 2. Create the application state
 * 3. Create and configure the router
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// This function sets up the Axum HTTP server with:
/// - Database connection pool and migrations
/// - Route configuration under `/api/v1`
///
/// # Returns
///
/// Configured Axum Router ready to serve requests, or an error if the
/// database cannot be reached.
pub async fn create_app() -> Result<Router<()>, Box<dyn std::error::Error>> {
    tracing::info!("Initializing Inkpost backend server");

    let db_pool = load_database().await?;

    let app_state = AppState { db_pool };

    Ok(create_router(app_state))
}
