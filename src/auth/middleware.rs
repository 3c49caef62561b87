// Token gate: extracts and verifies the bearer token on protected routes

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use tracing::debug;

use crate::auth::error::AuthError;
use crate::AppState;

/// Per-request authenticated identity, attached only after the token gate
/// accepts. Handlers taking this extractor are never invoked on failure;
/// the 401 response has already been produced.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i32,
    pub name: String,
    pub email: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);

        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or(AuthError::MissingToken)?
            .to_str()
            .map_err(|_| AuthError::MissingToken)?;

        // "Bearer <token>": the fragment after the scheme is the token;
        // a header with no fragment is treated the same as no header.
        let token = auth_header
            .split_whitespace()
            .nth(1)
            .ok_or(AuthError::MissingToken)?;

        let claims = state.tokens.verify(token)?;

        // Tokens carry no revocation, so re-fetch the user: a valid token
        // for a deleted account must not pass the gate.
        let user = state
            .store
            .find_by_id(claims.sub)
            .await?
            .ok_or(AuthError::TokenUserGone)?;

        debug!("authenticated request for user {}", user.id);
        Ok(CurrentUser {
            id: user.id,
            name: user.name,
            email: user.email,
        })
    }
}
