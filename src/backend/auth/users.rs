/**
 * User Model and Database Operations
 *
 * This module handles user data and database operations.
 */

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// User struct representing a user in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Username (unique)
    pub username: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Display name
    pub name: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `username` - User's chosen username
/// * `password_hash` - Hashed password
/// * `name` - Display name
///
/// # Returns
/// Created user, or the underlying error (including unique-constraint
/// violations on `username`)
pub async fn insert_user(
    pool: &PgPool,
    username: &str,
    password_hash: &str,
    name: &str,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();

    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, username, password_hash, name)
        VALUES ($1, $2, $3, $4)
        RETURNING id, username, password_hash, name, created_at
        "#,
    )
    .bind(id)
    .bind(username)
    .bind(password_hash)
    .bind(name)
    .fetch_one(pool)
    .await
}

/// Get user by username
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `username` - Username
///
/// # Returns
/// User or None if not found
pub async fn find_user_by_username(
    pool: &PgPool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, name, created_at
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}
