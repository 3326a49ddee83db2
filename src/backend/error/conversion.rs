/**
 * Error Conversion
 *
 * This module provides conversion implementations for backend errors,
 * allowing them to be converted to HTTP responses and produced from
 * lower-level error types with `?`.
 *
 * # Response Format
 *
 * Errors are rendered as JSON:
 * ```json
 * { "message": "Incorrect creds" }
 * ```
 *
 * The one exception is `InvalidSignup`, which renders as the bare text
 * body `Invalid` to match the signup endpoint's text-based contract.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::ApiError;

impl IntoResponse for ApiError {
    /// Convert a backend error into an HTTP response
    ///
    /// Most variants become a JSON body `{"message": ...}` with the
    /// variant's status code. `InvalidSignup` becomes a plain-text 400.
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Internal error: {}", self);
        }

        match self {
            ApiError::InvalidSignup => (status, message).into_response(),
            _ => {
                let body = serde_json::json!({ "message": message });
                (status, Json(body)).into_response()
            }
        }
    }
}

/// Translate sqlx errors at the handler boundary
///
/// Lets handlers use `?` on store calls; the resulting 500 carries a
/// generic message while the detail goes to the logs.
impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        ApiError::Store(e.to_string())
    }
}
