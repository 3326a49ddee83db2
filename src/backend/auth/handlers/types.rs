/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * authentication handlers.
 */

use serde::{Deserialize, Serialize};

/// Sign up request
///
/// Contains the username, password and display name for user
/// registration.
#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    /// User's chosen username
    pub username: String,
    /// User's password (hashed before storage)
    pub password: String,
    /// Display name
    pub name: String,
}

/// Sign in request
#[derive(Deserialize, Serialize, Debug)]
pub struct SigninRequest {
    /// User's username
    pub username: String,
    /// User's password (verified against the stored hash)
    pub password: String,
}

/// Sign out acknowledgment
///
/// Sign-out is stateless; this body is a hint to the client to discard
/// its token locally.
#[derive(Serialize, Debug)]
pub struct SignoutResponse {
    /// Acknowledgment message
    pub message: String,
}
