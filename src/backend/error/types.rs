/**
 * Backend Error Types
 *
 * This module defines the error taxonomy for the HTTP API. Every
 * failure a handler can produce maps onto one of these variants, and
 * each variant maps onto a fixed status code and client-safe message.
 *
 * # Taxonomy
 *
 * - `Unauthorized`         - missing/invalid/expired bearer token (403)
 * - `MissingUser`          - no authenticated user bound to the request (401)
 * - `IncorrectCredentials` - signin with unknown user or wrong password (403)
 * - `InvalidSignup`        - signup rejected, reason deliberately opaque (400)
 * - `Validation`           - malformed client input (400)
 * - `NotFound`             - referenced row absent (404)
 * - `Forbidden`            - ownership or published-state violation (403)
 * - `Store`                - persistence or crypto failure (500)
 *
 * All token verification failures (malformed, bad signature, expired)
 * collapse into `Unauthorized` so clients cannot distinguish them.
 * `Store` carries internal detail for logs only; clients receive a
 * generic message.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Backend-specific error type returned by HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bearer token missing, malformed, tampered, or expired
    #[error("unauthorized")]
    Unauthorized,

    /// No authenticated user bound to the request
    #[error("Unauthorized. Please log in.")]
    MissingUser,

    /// Signin with unknown username or wrong password
    #[error("Incorrect creds")]
    IncorrectCredentials,

    /// Signup rejected; duplicate usernames are not distinguished from
    /// other failures
    #[error("Invalid")]
    InvalidSignup,

    /// Malformed client input (bad pagination, bad id format)
    #[error("{0}")]
    Validation(String),

    /// Referenced post absent
    #[error("{0}")]
    NotFound(String),

    /// Ownership or published-state violation
    #[error("{0}")]
    Forbidden(String),

    /// Underlying persistence or crypto failure; detail is logged,
    /// never sent to the client
    #[error("store failure: {0}")]
    Store(String),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::FORBIDDEN,
            Self::MissingUser => StatusCode::UNAUTHORIZED,
            Self::IncorrectCredentials => StatusCode::FORBIDDEN,
            Self::InvalidSignup => StatusCode::BAD_REQUEST,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message sent to the client
    ///
    /// For `Store` this is a fixed generic message; the wrapped detail
    /// stays in the server logs.
    pub fn message(&self) -> String {
        match self {
            Self::Store(_) => "An unexpected error occurred.".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(ApiError::Unauthorized.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::MissingUser.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::IncorrectCredentials.status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::InvalidSignup.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Validation("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("gone".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Forbidden("no".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::Store("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_message_does_not_leak_detail() {
        let error = ApiError::Store("connection refused on 10.0.0.5".into());
        assert_eq!(error.message(), "An unexpected error occurred.");
    }

    #[test]
    fn test_unauthorized_message() {
        assert_eq!(ApiError::Unauthorized.message(), "unauthorized");
    }

    #[test]
    fn test_validation_message_passthrough() {
        let error = ApiError::Validation("Invalid post ID.".into());
        assert_eq!(error.message(), "Invalid post ID.");
    }
}
