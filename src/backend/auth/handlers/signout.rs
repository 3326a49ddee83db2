/**
 * Signout Handler
 *
 * This module implements the sign-out handler for
 * POST /api/v1/user/signout.
 *
 * # Contract
 *
 * Sign-out only checks that the Authorization header is present and
 * well-formed (`Bearer <token>`, token non-empty). The token's
 * signature is NOT verified and no server-side state changes: tokens
 * are stateless and remain valid until expiry. The 200 response is a
 * hint to the client to discard the token locally.
 */

use axum::http::{header::AUTHORIZATION, HeaderMap};
use axum::Json;

use crate::backend::auth::handlers::types::SignoutResponse;
use crate::backend::error::ApiError;

/// Sign out handler
///
/// # Errors
///
/// * `400 Bad Request` if the Authorization header is missing,
///   malformed, or carries an empty token
pub async fn signout(headers: HeaderMap) -> Result<Json<SignoutResponse>, ApiError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("");

    let Some(token) = auth_header.strip_prefix("Bearer ") else {
        return Err(ApiError::Validation(
            "Authorization header with Bearer token is required".to_string(),
        ));
    };

    if token.is_empty() {
        return Err(ApiError::Validation("Token is required".to_string()));
    }

    Ok(Json(SignoutResponse {
        message: "Successfully signed out".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[tokio::test]
    async fn test_signout_with_bearer_header() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer some-token"));

        let response = signout(headers).await.unwrap();
        assert_eq!(response.message, "Successfully signed out");
    }

    #[tokio::test]
    async fn test_signout_does_not_verify_token() {
        // Any non-empty token is acknowledged, even an unverifiable one
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer not.a.jwt"));

        assert!(signout(headers).await.is_ok());
    }

    #[tokio::test]
    async fn test_signout_missing_header() {
        let headers = HeaderMap::new();
        let err = signout(headers).await.unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_signout_malformed_header() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Token abc"));

        let err = signout(headers).await.unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_signout_empty_token() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer "));

        let err = signout(headers).await.unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
    }
}
