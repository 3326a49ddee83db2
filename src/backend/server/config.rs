/**
 * Server Configuration
 *
 * This module handles loading of server configuration, focusing on the
 * PostgreSQL database connection.
 *
 * # Configuration Sources
 *
 * Configuration is loaded from environment variables. `DATABASE_URL`
 * is required: unlike optional integrations, the API cannot serve any
 * request without its store, so a missing or unreachable database is a
 * startup failure rather than a degraded mode.
 */

use sqlx::PgPool;

/// Load and initialize the database connection pool
///
/// This function:
/// 1. Reads `DATABASE_URL` from the environment
/// 2. Creates a PostgreSQL connection pool
/// 3. Runs embedded database migrations
///
/// # Returns
///
/// The connected pool, or an error if the URL is missing, the
/// connection fails, or migrations cannot be applied.
pub async fn load_database() -> Result<PgPool, Box<dyn std::error::Error>> {
    let database_url = std::env::var("DATABASE_URL").map_err(|e| {
        tracing::error!("DATABASE_URL not set");
        e
    })?;

    tracing::info!("Connecting to database...");

    let pool = PgPool::connect(&database_url).await.map_err(|e| {
        tracing::error!("Failed to create database connection pool: {:?}", e);
        e
    })?;

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await.map_err(|e| {
        tracing::error!("Failed to run database migrations: {:?}", e);
        e
    })?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
