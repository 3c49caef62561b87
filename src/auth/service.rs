// Auth service: sign-up and sign-in orchestration

use crate::auth::{
    error::AuthError,
    models::UserResponse,
    password::PasswordService,
    repository::UserStore,
    token::TokenService,
};
use std::sync::Arc;
use tracing::info;

/// Coordinates the credential store, password hasher and token issuer.
///
/// Inputs are assumed to have passed the request validators already;
/// validation errors never reach this layer.
pub struct AuthService {
    store: Arc<dyn UserStore>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(store: Arc<dyn UserStore>, tokens: Arc<TokenService>) -> Self {
        Self { store, tokens }
    }

    /// Register a new user: check the email is free, hash the password,
    /// persist, issue a token. Exactly one row is inserted on success and
    /// none on any failure.
    pub async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(UserResponse, String), AuthError> {
        if self.store.find_by_email(email).await?.is_some() {
            return Err(AuthError::UserExists);
        }

        let password_hash = PasswordService::hash_password(password)?;

        // The pre-check above can race with a concurrent sign-up; the
        // store's unique index settles it and the loser gets UserExists.
        let user = self.store.create_user(name, email, &password_hash).await?;
        let token = self.tokens.issue(user.id)?;

        info!("created user {} ({})", user.id, user.email);
        Ok((UserResponse::from(user), token))
    }

    /// Authenticate an existing user and issue a fresh token, independent
    /// of any token issued before.
    pub async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(UserResponse, String), AuthError> {
        let user = self
            .store
            .find_by_email(email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !PasswordService::verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(user.id)?;

        info!("user {} signed in", user.id);
        Ok((UserResponse::from(user), token))
    }
}
