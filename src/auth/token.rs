// JWT issuing and verification

use crate::auth::error::AuthError;
use chrono::Utc;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

/// Token lifetime: one hour.
const TOKEN_LIFETIME_SECS: i64 = 3600;

/// JWT claims. `sub` is the user id; the token carries nothing else.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and verifies bearer tokens.
///
/// The signing secret is injected at construction so it can be rotated by
/// restarting with new configuration and swapped out entirely in tests.
pub struct TokenService {
    secret: String,
    lifetime: i64,
}

impl TokenService {
    pub fn new(secret: String) -> Self {
        Self {
            secret,
            lifetime: TOKEN_LIFETIME_SECS,
        }
    }

    /// Issue a token for a user id, expiring one hour from now.
    pub fn issue(&self, user_id: i32) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id,
            iat: now,
            exp: now + self.lifetime,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AuthError::TokenCreation(e.to_string()))
    }

    /// Verify signature and expiry, returning the claims.
    ///
    /// Rejections are distinguished so the caller can log them apart, even
    /// though they all surface as the same 401 to the client.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
            ErrorKind::InvalidSignature => AuthError::BadSignature,
            _ => AuthError::MalformedToken,
        })
    }
}
