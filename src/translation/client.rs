// Translation upstream client

use axum::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use crate::translation::error::TranslationError;

/// A completed translation.
#[derive(Debug, Clone)]
pub struct Translation {
    pub text: String,
    /// ISO code of the detected source language, or "unknown".
    pub detected_language: String,
}

/// External translation service boundary.
///
/// The handler depends on this trait so the real HTTP upstream can be
/// swapped for a stub in tests.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, target_lang: &str)
        -> Result<Translation, TranslationError>;
}

/// Google Translate client using the unauthenticated gtx endpoint.
pub struct GoogleTranslator {
    http: reqwest::Client,
}

impl GoogleTranslator {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }
}

impl Default for GoogleTranslator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        target_lang: &str,
    ) -> Result<Translation, TranslationError> {
        let response = self
            .http
            .get("https://translate.googleapis.com/translate_a/single")
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target_lang),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| TranslationError::Upstream(e.to_string()))?;

        match response.status() {
            StatusCode::BAD_REQUEST => return Err(TranslationError::BadRequest),
            StatusCode::TOO_MANY_REQUESTS => return Err(TranslationError::RateLimited),
            StatusCode::SERVICE_UNAVAILABLE => return Err(TranslationError::Unavailable),
            status if !status.is_success() => {
                return Err(TranslationError::Upstream(format!(
                    "unexpected status {}",
                    status
                )));
            }
            _ => {}
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| TranslationError::Upstream(e.to_string()))?;

        parse_gtx_response(&body)
    }
}

/// The gtx endpoint answers with nested arrays: segment pairs under index 0
/// and the detected source language under index 2.
fn parse_gtx_response(body: &Value) -> Result<Translation, TranslationError> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslationError::Upstream("malformed upstream body".to_string()))?;

    let text: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    let detected_language = body
        .get(2)
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string();

    Ok(Translation {
        text,
        detected_language,
    })
}

/// Test double: echoes the input with a fixed marker instead of calling out.
#[cfg(test)]
#[derive(Default)]
pub struct StubTranslator;

#[cfg(test)]
#[async_trait]
impl Translator for StubTranslator {
    async fn translate(
        &self,
        text: &str,
        target_lang: &str,
    ) -> Result<Translation, TranslationError> {
        Ok(Translation {
            text: format!("[{}] {}", target_lang, text),
            detected_language: "en".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_a_single_segment_response() {
        let body = json!([[["Hola", "Hello", null, null, 10]], null, "en"]);
        let translation = parse_gtx_response(&body).unwrap();
        assert_eq!(translation.text, "Hola");
        assert_eq!(translation.detected_language, "en");
    }

    #[test]
    fn concatenates_multiple_segments() {
        let body = json!([
            [["Hola. ", "Hello. ", null], ["Adios.", "Goodbye.", null]],
            null,
            "en"
        ]);
        let translation = parse_gtx_response(&body).unwrap();
        assert_eq!(translation.text, "Hola. Adios.");
    }

    #[test]
    fn missing_language_falls_back_to_unknown() {
        let body = json!([[["Hola", "Hello", null]]]);
        let translation = parse_gtx_response(&body).unwrap();
        assert_eq!(translation.detected_language, "unknown");
    }

    #[test]
    fn malformed_body_is_an_upstream_error() {
        let err = parse_gtx_response(&json!({"unexpected": "shape"})).unwrap_err();
        assert!(matches!(err, TranslationError::Upstream(_)));
    }
}
