/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct is the central state container for the
 * application. It holds the PostgreSQL connection pool and nothing
 * else: every request is a short-lived, stateless cycle that checks a
 * connection out of the pool for the duration of its queries.
 *
 * # State Extraction
 *
 * The `FromRef` implementation allows Axum handlers to extract the
 * pool directly with `State(pool): State<PgPool>` without needing the
 * entire `AppState`.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

/// Application state shared across all request handlers
///
/// # Fields
///
/// * `db_pool` - PostgreSQL database connection pool
///
/// # Thread Safety
///
/// `PgPool` is internally reference-counted and safe to clone per
/// request.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: PgPool,
}

/// Implement FromRef for PgPool
///
/// This allows Axum handlers to extract the database pool directly
/// from `AppState` using `State(pool): State<PgPool>`.
impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}
