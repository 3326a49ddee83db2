/**
 * Signup Handler
 *
 * This module implements the user registration handler for
 * POST /api/v1/user/signup.
 *
 * # Registration Process
 *
 * 1. Hash the password with bcrypt
 * 2. Insert the user row
 * 3. Issue a JWT token for the new user id
 * 4. Return the token as a bare text body
 *
 * # Failure Contract
 *
 * Every failure (duplicate username, store error, hashing error)
 * collapses into 400 with the bare text body `Invalid`. The endpoint
 * deliberately does not distinguish duplicate usernames from other
 * failures.
 */

use axum::{extract::State, Json};
use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;

use crate::backend::auth::handlers::types::SignupRequest;
use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::insert_user;
use crate::backend::error::ApiError;

/// Sign up handler
///
/// Creates a user account and returns a JWT token for immediate
/// authentication. The token is the entire response body, not a JSON
/// wrapper.
///
/// # Errors
///
/// * `400 Bad Request` with text `Invalid` on any failure
pub async fn signup(
    State(pool): State<PgPool>,
    Json(request): Json<SignupRequest>,
) -> Result<String, ApiError> {
    tracing::info!("Signup request for username: {}", request.username);

    let password_hash = hash(&request.password, DEFAULT_COST).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        ApiError::InvalidSignup
    })?;

    let user = insert_user(&pool, &request.username, &password_hash, &request.name)
        .await
        .map_err(|e| {
            tracing::warn!("Failed to create user {}: {:?}", request.username, e);
            ApiError::InvalidSignup
        })?;

    let token = create_token(user.id).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        ApiError::InvalidSignup
    })?;

    tracing::info!("User created successfully: {} ({})", user.username, user.id);

    Ok(token)
}
