// HTTP handler for the protected translation endpoint

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;
use validator::Validate;

use crate::auth::CurrentUser;
use crate::translation::error::TranslationError;
use crate::AppState;

/// Translation request body.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TranslateRequest {
    #[validate(length(max = 5000))]
    pub text: Option<String>,
    #[serde(rename = "targetLang")]
    pub target_lang: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TranslateResponse {
    #[serde(rename = "translatedText")]
    pub translated_text: String,
    #[serde(rename = "detectedLanguage")]
    pub detected_language: String,
}

/// Handler for POST /translate
///
/// Protected: taking [`CurrentUser`] means the token gate has already run
/// and rejected anonymous requests before this body executes.
#[utoipa::path(
    post,
    path = "/translate",
    request_body = TranslateRequest,
    responses(
        (status = 200, description = "Translation result", body = TranslateResponse),
        (status = 400, description = "Missing or oversized input", body = String, example = json!({"message": "Text and target language are required"})),
        (status = 401, description = "Missing or invalid token", body = String, example = json!({"message": "You must be logged in to translate"})),
        (status = 429, description = "Upstream rate limit", body = String),
        (status = 503, description = "Upstream unavailable", body = String)
    ),
    tag = "translation",
    security(("bearer_token" = []))
)]
pub async fn translate(
    user: CurrentUser,
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, TranslationError> {
    let (text, target_lang) = match (request.text.as_deref(), request.target_lang.as_deref()) {
        (Some(text), Some(lang)) if !text.is_empty() && !lang.is_empty() => (text, lang),
        _ => return Err(TranslationError::MissingFields),
    };

    // Only one schema rule exists, so any validator failure is the length cap.
    request
        .validate()
        .map_err(|_| TranslationError::TextTooLong)?;

    debug!(
        "user {} translating {} chars to {}",
        user.id,
        text.len(),
        target_lang
    );

    let translation = state.translator.translate(text, target_lang).await?;

    Ok(Json(TranslateResponse {
        translated_text: translation.text,
        detected_language: translation.detected_language,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_cap_is_five_thousand_chars() {
        let at_limit = TranslateRequest {
            text: Some("a".repeat(5000)),
            target_lang: Some("es".to_string()),
        };
        assert!(at_limit.validate().is_ok());

        let over_limit = TranslateRequest {
            text: Some("a".repeat(5001)),
            target_lang: Some("es".to_string()),
        };
        assert!(over_limit.validate().is_err());
    }
}
