/**
 * Authentication Middleware
 *
 * This module provides the gate applied to protected route groups. It
 * extracts and verifies JWT tokens from the Authorization header and
 * binds the authenticated user id to the request for handlers.
 *
 * # Contract
 *
 * - The bearer token is taken from `Authorization: Bearer <token>`.
 *   An absent or malformed header yields the empty string, which can
 *   never verify.
 * - On success the claim's user id is inserted into the request
 *   extensions and the request proceeds.
 * - On any verification failure the request is rejected with 403 and
 *   `{"message": "unauthorized"}` before any handler logic runs.
 *
 * The gate never distinguishes malformed, tampered, and expired tokens
 * in its response.
 */

use axum::{
    extract::{FromRequestParts, Request},
    http::header::AUTHORIZATION,
    http::request::Parts,
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::backend::auth::sessions::verify_token;
use crate::backend::error::ApiError;

/// Authenticated user data bound to the request by the middleware
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Extract the bearer token from the request headers
///
/// Returns the empty string when the header is absent or not in
/// `Bearer <token>` form; the empty string always fails verification.
fn bearer_token(headers: &HeaderMap) -> &str {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .unwrap_or("")
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the JWT token from the Authorization header
/// 2. Verifies signature and expiry
/// 3. Binds the claim's user id to the request extensions
///
/// Returns 403 with `{"message": "unauthorized"}` if the token is
/// missing or invalid; the handler never runs in that case.
pub async fn auth_middleware(mut request: Request, next: Next) -> Response {
    let token = bearer_token(request.headers());

    match verify_token(token) {
        Ok(claims) => {
            request
                .extensions_mut()
                .insert(AuthenticatedUser { user_id: claims.id });
            next.run(request).await
        }
        Err(e) => {
            tracing::warn!("Rejected request to protected route: {:?}", e);
            ApiError::Unauthorized.into_response()
        }
    }
}

/// Axum extractor for the authenticated user
///
/// Handlers behind the auth middleware take this as a parameter to
/// receive the verified user id explicitly. A missing binding rejects
/// with 401; it is only reachable on a route that skipped the gate.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::MissingUser
            })
    }
}
