//! Authentication test helpers
//!
//! Provides utilities for creating test users, generating tokens,
//! and building Authorization headers.

use axum::http::HeaderValue;
use sqlx::PgPool;
use uuid::Uuid;

use inkpost::backend::auth::create_token;
use inkpost::backend::auth::users::insert_user;

/// Test user credentials
pub struct TestUser {
    pub id: Uuid,
    pub username: String,
    pub password: String,
    pub token: String,
}

/// Create a test user in the database with a valid session token
pub async fn create_test_user(
    pool: &PgPool,
    username: &str,
    password: &str,
) -> Result<TestUser, Box<dyn std::error::Error>> {
    let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;

    let user = insert_user(pool, username, &password_hash, "Test User").await?;

    let token = create_token(user.id)?;

    Ok(TestUser {
        id: user.id,
        username: user.username,
        password: password.to_string(),
        token,
    })
}

/// Create a test user with a unique username
pub async fn create_unique_test_user(
    pool: &PgPool,
) -> Result<TestUser, Box<dyn std::error::Error>> {
    let username = format!("test_{}", Uuid::new_v4().simple());
    create_test_user(pool, &username, "test_password_123").await
}

/// Build an Authorization header value for a token
pub fn auth_header(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {}", token)).expect("valid header value")
}
