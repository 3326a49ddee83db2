/**
 * Session Tokens
 *
 * This module handles JWT token generation and verification for user
 * sessions. Tokens are stateless: nothing is persisted server-side,
 * and a token stays valid until its expiry regardless of sign-out.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Token lifetime: 30 days
const TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// JWT claims structure
///
/// The only application claim is the user id; downstream authorization
/// derives the acting identity from it and never from client-supplied
/// fields.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub id: Uuid,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Get the JWT signing secret from the environment
fn jwt_secret() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|_| {
        tracing::warn!("JWT_SECRET not set, using development default");
        "inkpost-dev-secret-change-in-production".to_string()
    })
}

/// Create a JWT token for a user
///
/// # Arguments
/// * `user_id` - User ID (UUID)
///
/// # Returns
/// Signed token string
pub fn create_token(user_id: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let claims = Claims {
        id: user_id,
        iat: now,
        exp: now + TOKEN_TTL_SECS,
    };

    let key = EncodingKey::from_secret(jwt_secret().as_ref());

    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a JWT token
///
/// Checks the signature and expiry. Malformed tokens, bad signatures,
/// and expired tokens all fail here; callers must treat every failure
/// identically so clients cannot tell them apart.
///
/// # Arguments
/// * `token` - JWT token string
///
/// # Returns
/// Decoded claims or error
pub fn verify_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(jwt_secret().as_ref());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &key, &validation)?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_token() {
        let user_id = Uuid::new_v4();
        let token = create_token(user_id).unwrap();
        assert!(!token.is_empty());
    }

    #[test]
    fn test_verify_token_round_trip() {
        let user_id = Uuid::new_v4();
        let token = create_token(user_id).unwrap();

        let claims = verify_token(&token).unwrap();
        assert_eq!(claims.id, user_id);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_verify_empty_token_fails() {
        // Missing or malformed Authorization headers reduce to an empty
        // token string; it must never verify.
        assert!(verify_token("").is_err());
    }

    #[test]
    fn test_verify_garbage_token_fails() {
        assert!(verify_token("invalid.token.here").is_err());
    }

    #[test]
    fn test_verify_tampered_token_fails() {
        let token = create_token(Uuid::new_v4()).unwrap();
        let tampered = format!("{}x", token);
        assert!(verify_token(&tampered).is_err());
    }

    #[test]
    fn test_verify_wrong_key_fails() {
        let claims = Claims {
            id: Uuid::new_v4(),
            iat: 0,
            exp: u64::MAX / 2,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"some-other-secret"),
        )
        .unwrap();
        assert!(verify_token(&token).is_err());
    }

    #[test]
    fn test_verify_expired_token_fails() {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        // Expired well past the default validation leeway
        let claims = Claims {
            id: Uuid::new_v4(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(jwt_secret().as_ref()),
        )
        .unwrap();
        assert!(verify_token(&token).is_err());
    }
}
