// Auth data models, request/response DTOs and the request validators

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::auth::error::AuthError;

/// User database row. The password hash never leaves this type; every
/// outward-facing response goes through [`UserResponse`].
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Public user fields, safe to serialize in responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Sign-up request body.
///
/// Fields are `Option` so that a missing field deserializes instead of
/// failing in the JSON extractor: the validator owns the "All fields are
/// required" response, and its messages are part of the API contract.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SignUpRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: Option<String>,
}

/// Sign-up fields after validation, borrowed from the request.
#[derive(Debug)]
pub struct ValidSignUp<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

impl SignUpRequest {
    /// Ordered validation: presence of all four fields, then password
    /// length, then the confirmation match. The first failing check wins
    /// and the service layer is never reached.
    pub fn validate(&self) -> Result<ValidSignUp<'_>, AuthError> {
        let name = non_empty(&self.name);
        let email = non_empty(&self.email);
        let password = non_empty(&self.password);
        let confirm = non_empty(&self.confirm_password);

        let (name, email, password, confirm) = match (name, email, password, confirm) {
            (Some(n), Some(e), Some(p), Some(c)) => (n, e, p, c),
            _ => {
                return Err(AuthError::Validation("All fields are required".to_string()));
            }
        };

        if password.len() < 6 {
            return Err(AuthError::Validation(
                "Password must be at least 6 characters long".to_string(),
            ));
        }

        if password != confirm {
            return Err(AuthError::Validation("Passwords do not match".to_string()));
        }

        Ok(ValidSignUp {
            name,
            email,
            password,
        })
    }
}

/// Sign-in request body.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SignInRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Sign-in fields after validation.
#[derive(Debug)]
pub struct ValidSignIn<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

impl SignInRequest {
    pub fn validate(&self) -> Result<ValidSignIn<'_>, AuthError> {
        match (non_empty(&self.email), non_empty(&self.password)) {
            (Some(email), Some(password)) => Ok(ValidSignIn { email, password }),
            _ => Err(AuthError::Validation(
                "Email and password are required".to_string(),
            )),
        }
    }
}

/// Successful sign-up / sign-in response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub message: String,
    pub user: UserResponse,
    pub token: String,
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(
        name: Option<&str>,
        email: Option<&str>,
        password: Option<&str>,
        confirm: Option<&str>,
    ) -> SignUpRequest {
        SignUpRequest {
            name: name.map(String::from),
            email: email.map(String::from),
            password: password.map(String::from),
            confirm_password: confirm.map(String::from),
        }
    }

    fn validation_message(err: AuthError) -> String {
        match err {
            AuthError::Validation(msg) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn valid_signup_passes_through() {
        let req = signup(Some("Ann"), Some("a@x.com"), Some("secret1"), Some("secret1"));
        let valid = req.validate().unwrap();
        assert_eq!(valid.name, "Ann");
        assert_eq!(valid.email, "a@x.com");
        assert_eq!(valid.password, "secret1");
    }

    #[test]
    fn missing_fields_are_caught_first() {
        // Even with a short, mismatched password the presence check wins.
        let req = signup(None, Some("a@x.com"), Some("abc"), Some("xyz"));
        assert_eq!(
            validation_message(req.validate().unwrap_err()),
            "All fields are required"
        );
    }

    #[test]
    fn empty_string_counts_as_missing() {
        let req = signup(Some(""), Some("a@x.com"), Some("secret1"), Some("secret1"));
        assert_eq!(
            validation_message(req.validate().unwrap_err()),
            "All fields are required"
        );
    }

    #[test]
    fn short_password_checked_before_match() {
        let req = signup(Some("Ann"), Some("a@x.com"), Some("abc"), Some("xyz"));
        assert_eq!(
            validation_message(req.validate().unwrap_err()),
            "Password must be at least 6 characters long"
        );
    }

    #[test]
    fn password_of_length_five_is_rejected() {
        let req = signup(Some("Ann"), Some("a@x.com"), Some("abcde"), Some("abcde"));
        assert_eq!(
            validation_message(req.validate().unwrap_err()),
            "Password must be at least 6 characters long"
        );
    }

    #[test]
    fn password_of_length_six_is_accepted() {
        let req = signup(Some("Ann"), Some("a@x.com"), Some("abcdef"), Some("abcdef"));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn mismatched_confirmation_is_rejected() {
        let req = signup(Some("Ann"), Some("a@x.com"), Some("secret1"), Some("secret2"));
        assert_eq!(
            validation_message(req.validate().unwrap_err()),
            "Passwords do not match"
        );
    }

    #[test]
    fn signin_requires_both_fields() {
        let req = SignInRequest {
            email: Some("a@x.com".to_string()),
            password: None,
        };
        assert_eq!(
            validation_message(req.validate().unwrap_err()),
            "Email and password are required"
        );

        let req = SignInRequest {
            email: None,
            password: Some("secret1".to_string()),
        };
        assert!(req.validate().is_err());

        let req = SignInRequest {
            email: Some("a@x.com".to_string()),
            password: Some("secret1".to_string()),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn user_response_drops_the_hash() {
        let user = User {
            id: 7,
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            password_hash: "$2b$10$abcdefghijklmnopqrstuv".to_string(),
            created_at: chrono::Utc::now(),
        };

        let body = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert_eq!(body["email"], "a@x.com");
        assert!(body.get("passwordHash").is_none());
        assert!(body.get("password_hash").is_none());
    }
}
