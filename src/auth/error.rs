// Authentication error types and their HTTP mappings

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Everything that can go wrong in the auth subsystem.
///
/// Token rejections keep their distinct reasons (`MalformedToken`,
/// `BadSignature`, `ExpiredToken`) so callers and tests can tell them apart,
/// but all three collapse to the same client-facing 401 message.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("{0}")]
    Validation(String),

    /// Duplicate email on sign-up.
    #[error("User exists")]
    UserExists,

    /// Unknown email on sign-in. Deliberately distinct from
    /// `InvalidCredentials` (404 vs 401) to preserve the original API
    /// contract, even though it leaks account existence.
    #[error("User not found")]
    UserNotFound,

    /// Known email, wrong password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No Authorization header, or no token fragment after the scheme.
    #[error("You must be logged in to translate")]
    MissingToken,

    /// Token is not a parseable JWT.
    #[error("Invalid or expired token")]
    MalformedToken,

    /// Token parsed but the signature does not match our secret.
    #[error("Invalid or expired token")]
    BadSignature,

    /// Token parsed and verified but its expiry has passed.
    #[error("Invalid or expired token")]
    ExpiredToken,

    /// Token verified but the user row it points at is gone.
    #[error("User not found")]
    TokenUserGone,

    #[error("database error: {0}")]
    Database(String),

    #[error("password hashing error: {0}")]
    Hash(String),

    #[error("token signing error: {0}")]
    TokenCreation(String),
}

impl AuthError {
    /// HTTP status code this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::UserExists => StatusCode::CONFLICT,
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::MissingToken
            | AuthError::MalformedToken
            | AuthError::BadSignature
            | AuthError::ExpiredToken
            | AuthError::TokenUserGone => StatusCode::UNAUTHORIZED,
            AuthError::Database(_) | AuthError::Hash(_) | AuthError::TokenCreation(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to send to clients. Internal failures all collapse to
    /// "Server error"; the detail only goes to the log.
    pub fn client_message(&self) -> String {
        match self {
            AuthError::Database(_) | AuthError::Hash(_) | AuthError::TokenCreation(_) => {
                "Server error".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match &self {
            AuthError::Database(msg) => error!("database error in auth: {}", msg),
            AuthError::Hash(msg) => error!("password hashing error: {}", msg),
            AuthError::TokenCreation(msg) => error!("token signing error: {}", msg),
            AuthError::MalformedToken | AuthError::BadSignature | AuthError::ExpiredToken => {
                warn!("rejected token: {:?}", self)
            }
            AuthError::MissingToken => warn!("request to protected route without token"),
            AuthError::TokenUserGone => warn!("valid token for a user that no longer exists"),
            _ => {}
        }

        let body = Json(json!({ "message": self.client_message() }));
        (self.status_code(), body).into_response()
    }
}
