// Credential store: the user table behind a trait

use crate::auth::{error::AuthError, models::User};
use axum::async_trait;
use sqlx::PgPool;

/// Persistent user lookup and creation.
///
/// Handlers and the auth service talk to this trait; production wires in
/// [`PgUserStore`], tests an in-memory store. Email lookups are exact-match
/// on the stored value.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user. A duplicate email fails with
    /// [`AuthError::UserExists`]; concurrent sign-ups racing on the same
    /// email are settled by the store's unique index, so exactly one wins.
    async fn create_user(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, AuthError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, AuthError>;
}

/// PostgreSQL-backed user store.
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create_user(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, AuthError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, password_hash) VALUES ($1, $2, $3) \
             RETURNING id, name, email, password_hash, created_at",
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AuthError::UserExists;
                }
            }
            AuthError::Database(e.to_string())
        })
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        sqlx::query_as::<_, User>(
            "SELECT id, name, email, password_hash, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::Database(e.to_string()))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, AuthError> {
        sqlx::query_as::<_, User>(
            "SELECT id, name, email, password_hash, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::Database(e.to_string()))
    }
}

/// In-memory user store for tests. Mirrors the Postgres behavior including
/// the unique-email constraint and serial ids.
#[cfg(test)]
pub mod memory {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MemoryUserStore {
        users: Mutex<Vec<User>>,
    }

    impl MemoryUserStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Delete a user out from under any issued tokens, to exercise the
        /// vanished-account path in the token gate.
        pub fn remove_user(&self, id: i32) {
            self.users.lock().unwrap().retain(|u| u.id != id);
        }

        pub fn user_count(&self) -> usize {
            self.users.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl UserStore for MemoryUserStore {
        async fn create_user(
            &self,
            name: &str,
            email: &str,
            password_hash: &str,
        ) -> Result<User, AuthError> {
            let mut users = self.users.lock().unwrap();
            if users.iter().any(|u| u.email == email) {
                return Err(AuthError::UserExists);
            }

            let user = User {
                id: users.len() as i32 + 1,
                name: name.to_string(),
                email: email.to_string(),
                password_hash: password_hash.to_string(),
                created_at: chrono::Utc::now(),
            };
            users.push(user.clone());
            Ok(user)
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
            let users = self.users.lock().unwrap();
            Ok(users.iter().find(|u| u.email == email).cloned())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<User>, AuthError> {
            let users = self.users.lock().unwrap();
            Ok(users.iter().find(|u| u.id == id).cloned())
        }
    }
}
