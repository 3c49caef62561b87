// Translation endpoint error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("Text and target language are required")]
    MissingFields,

    #[error("Text is too long. Maximum 5000 characters allowed.")]
    TextTooLong,

    /// Upstream rejected the request as malformed.
    #[error("Invalid translation request. Please check your input.")]
    BadRequest,

    /// Upstream throttled us.
    #[error("Too many requests. Please wait a moment and try again.")]
    RateLimited,

    /// Upstream is down.
    #[error("Translation service temporarily unavailable. Please try again later.")]
    Unavailable,

    #[error("upstream failure: {0}")]
    Upstream(String),
}

impl TranslationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            TranslationError::MissingFields | TranslationError::TextTooLong => {
                StatusCode::BAD_REQUEST
            }
            TranslationError::BadRequest => StatusCode::BAD_REQUEST,
            TranslationError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            TranslationError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            TranslationError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for TranslationError {
    fn into_response(self) -> Response {
        let message = match &self {
            TranslationError::Upstream(detail) => {
                error!("translation upstream failure: {}", detail);
                "Translation failed. Please try again.".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(json!({ "message": message }));
        (self.status_code(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_upstream_failures() {
        assert_eq!(TranslationError::MissingFields.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(TranslationError::TextTooLong.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            TranslationError::RateLimited.status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            TranslationError::Unavailable.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            TranslationError::Upstream("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
