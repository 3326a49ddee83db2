/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. API routes (user flow, blog flow)
 * 2. Request tracing layer
 * 3. Fallback handler (404)
 */

use axum::{http::StatusCode, Router};
use tower_http::trace::TraceLayer;

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the database pool
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();

    // Add API routes
    let router = configure_api_routes(router);

    // Request-level tracing
    let router = router.layer(TraceLayer::new_for_http());

    // Fallback handler for 404
    let router = router.fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") });

    // Use AppState as router state
    router.with_state(app_state)
}
