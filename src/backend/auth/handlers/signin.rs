/**
 * Signin Handler
 *
 * This module implements the user authentication handler for
 * POST /api/v1/user/signin.
 *
 * # Authentication Process
 *
 * 1. Look up the user by username
 * 2. Verify the password using bcrypt
 * 3. Issue a JWT token
 * 4. Return the token as a bare text body
 *
 * # Security
 *
 * Unknown usernames and wrong passwords return the same 403 response
 * so the endpoint cannot be used for account enumeration.
 */

use axum::{extract::State, Json};
use bcrypt::verify;
use sqlx::PgPool;

use crate::backend::auth::handlers::types::SigninRequest;
use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::find_user_by_username;
use crate::backend::error::ApiError;

/// Sign in handler
///
/// Verifies the username and password, and returns a JWT token if
/// authentication succeeds. The token is the entire response body.
///
/// # Errors
///
/// * `403 Forbidden` with `{"message": "Incorrect creds"}` on unknown
///   user or wrong password
/// * `500 Internal Server Error` on store failure
pub async fn signin(
    State(pool): State<PgPool>,
    Json(request): Json<SigninRequest>,
) -> Result<String, ApiError> {
    tracing::info!("Signin request for username: {}", request.username);

    let user = find_user_by_username(&pool, &request.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Signin for unknown username: {}", request.username);
            ApiError::IncorrectCredentials
        })?;

    let valid = verify(&request.password, &user.password_hash).map_err(|e| {
        tracing::error!("Password verification error: {:?}", e);
        ApiError::Store(e.to_string())
    })?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", request.username);
        return Err(ApiError::IncorrectCredentials);
    }

    let token = create_token(user.id).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        ApiError::Store(e.to_string())
    })?;

    tracing::info!("User signed in successfully: {}", user.username);

    Ok(token)
}
