//! Database test fixtures and utilities
//!
//! Provides utilities for setting up a test database, running
//! migrations, and clearing test data between tests.

use sqlx::PgPool;

/// Whether a test database is configured for this run
///
/// Integration tests that need PostgreSQL skip themselves when
/// `DATABASE_URL` is not set.
pub fn configured() -> bool {
    std::env::var("DATABASE_URL").is_ok()
}

/// Create a test database connection pool from `DATABASE_URL`
pub async fn create_test_pool() -> PgPool {
    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

    PgPool::connect(&database_url)
        .await
        .expect("Failed to create test database pool")
}

/// Run database migrations for testing
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Remove all test data while preserving the schema
pub async fn cleanup_test_data(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("TRUNCATE TABLE posts, users CASCADE")
        .execute(pool)
        .await?;
    Ok(())
}

/// Test database fixture
///
/// Connects, migrates, and starts every test from an empty dataset.
/// Tests touching the database run serially (see `serial_test`), so a
/// single shared database is safe.
pub struct TestDatabase {
    pool: PgPool,
}

impl TestDatabase {
    /// Create a new test database fixture
    pub async fn new() -> Self {
        let pool = create_test_pool().await;
        run_migrations(&pool).await.expect("Failed to run migrations");
        cleanup_test_data(&pool)
            .await
            .expect("Failed to clear test data");
        Self { pool }
    }

    /// Get the database pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
