use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;

use super::{TranslateError, Translator};
use crate::language::Language;

/// The public endpoint rejects longer query strings.
const MAX_CHARS: usize = 5000;

/// Client for the public Google Translate `translate_a/single` endpoint.
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    client: Client,
    endpoint: String,
}

impl GoogleTranslator {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    fn url(&self, text: &str, target: &Language) -> Result<Url, TranslateError> {
        let base = format!(
            "{}/translate_a/single",
            self.endpoint.trim_end_matches('/')
        );
        Url::parse_with_params(
            &base,
            &[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target.code),
                ("dt", "t"),
                ("q", text),
            ],
        )
        .map_err(|e| TranslateError::InvalidResponse(format!("invalid endpoint {base}: {e}")))
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, target: &Language) -> Result<String, TranslateError> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        let len = text.chars().count();
        if len > MAX_CHARS {
            return Err(TranslateError::TooLong {
                len,
                limit: MAX_CHARS,
            });
        }

        let url = self.url(text, target)?;
        tracing::debug!(target_language = target.code, "requesting web translation");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TranslateError::Status { status, body });
        }

        let body: Value = response.json().await?;
        parse_segments(&body)
    }
}

/// Joins the translated segments of a `translate_a/single` response.
///
/// The payload looks like `[[["Hello", "Bonjour", ...], ["world", "monde", ...]], null, "fr", ...]`.
fn parse_segments(body: &Value) -> Result<String, TranslateError> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslateError::InvalidResponse("missing segment list".to_string()))?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.trim().is_empty() {
        return Err(TranslateError::InvalidResponse(
            "no translated text".to_string(),
        ));
    }

    Ok(translated)
}
