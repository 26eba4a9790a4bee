use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use thiserror::Error;

use crate::config::ProviderSettings;

/// Failures talking to the chat-completion provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No API key was configured; detected before any request is sent.
    #[error("No API key configured for provider '{provider}'")]
    MissingCredential {
        provider: String,
        api_key_env: Option<String>,
    },

    #[error("Failed to connect to API endpoint {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("API request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Invalid response from API: {0}")]
    InvalidResponse(String),

    #[error("API response contained no completion text")]
    EmptyCompletion,
}

/// A chat-completion backend that turns a system and user instruction into text.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Fails with [`ProviderError::MissingCredential`] when no API key is available.
    fn check_credential(&self) -> Result<(), ProviderError>;

    /// Returns the first choice's content, trimmed.
    async fn complete(&self, system: &str, user: &str) -> Result<String, ProviderError>;
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Client for `<endpoint>/v1/chat/completions`.
///
/// Built once from the resolved provider settings; cloning shares the
/// underlying connection pool. No timeout or retry is applied beyond
/// reqwest's defaults.
#[derive(Debug, Clone)]
pub struct ChatClient {
    client: Client,
    settings: ProviderSettings,
}

impl ChatClient {
    pub fn new(settings: ProviderSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    fn url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.settings.endpoint.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl CompletionProvider for ChatClient {
    fn check_credential(&self) -> Result<(), ProviderError> {
        match self.settings.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(()),
            _ => Err(ProviderError::MissingCredential {
                provider: self.settings.name.clone(),
                api_key_env: self.settings.api_key_env.clone(),
            }),
        }
    }

    async fn complete(&self, system: &str, user: &str) -> Result<String, ProviderError> {
        self.check_credential()?;
        let api_key = self.settings.api_key.as_deref().unwrap_or_default();

        let url = self.url();
        let chat_request = ChatCompletionRequest {
            model: &self.settings.model,
            messages: vec![
                Message {
                    role: "system",
                    content: Cow::Borrowed(system),
                },
                Message {
                    role: "user",
                    content: Cow::Borrowed(user),
                },
            ],
            temperature: self.settings.temperature,
            stream: false,
        };

        tracing::debug!(%url, model = %self.settings.model, "sending chat completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&chat_request)
            .send()
            .await
            .map_err(|source| ProviderError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status { status, body });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(ProviderError::EmptyCompletion)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings(endpoint: &str, api_key: Option<&str>) -> ProviderSettings {
        ProviderSettings {
            name: "test".to_string(),
            endpoint: endpoint.to_string(),
            model: "test-model".to_string(),
            api_key: api_key.map(str::to_string),
            api_key_env: Some("TEST_API_KEY".to_string()),
            temperature: 0.5,
        }
    }

    fn completion_body(content: &str) -> serde_json::Value {
        json!({
            "choices": [
                {"message": {"role": "assistant", "content": content}},
                {"message": {"role": "assistant", "content": "second choice"}}
            ]
        })
    }

    #[tokio::test]
    async fn test_complete_returns_first_choice_trimmed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer secret"))
            .and(body_partial_json(json!({
                "model": "test-model",
                "temperature": 0.5,
                "stream": false,
                "messages": [
                    {"role": "system", "content": "sys"},
                    {"role": "user", "content": "usr"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("\n  Dear Sir,\n")))
            .expect(1)
            .mount(&server)
            .await;

        let client = ChatClient::new(settings(&server.uri(), Some("secret")));
        let text = client.complete("sys", "usr").await.unwrap();

        assert_eq!(text, "Dear Sir,");
    }

    #[tokio::test]
    async fn test_complete_trailing_slash_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("ok")))
            .expect(1)
            .mount(&server)
            .await;

        let client = ChatClient::new(settings(&format!("{}/", server.uri()), Some("k")));
        assert_eq!(client.complete("s", "u").await.unwrap(), "ok");
    }

    #[tokio::test]
    async fn test_complete_missing_credential_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("ok")))
            .expect(0)
            .mount(&server)
            .await;

        let client = ChatClient::new(settings(&server.uri(), None));
        let err = client.complete("s", "u").await.unwrap_err();

        assert!(matches!(err, ProviderError::MissingCredential { .. }));
    }

    #[tokio::test]
    async fn test_complete_blank_credential_is_missing() {
        let client = ChatClient::new(settings("http://127.0.0.1:9", Some("   ")));
        assert!(matches!(
            client.check_credential(),
            Err(ProviderError::MissingCredential { .. })
        ));
    }

    #[tokio::test]
    async fn test_complete_error_status_includes_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .mount(&server)
            .await;

        let client = ChatClient::new(settings(&server.uri(), Some("bad")));
        let err = client.complete("s", "u").await.unwrap_err();

        let message = err.to_string();
        assert!(message.contains("401"));
        assert!(message.contains("invalid api key"));
    }

    #[tokio::test]
    async fn test_complete_no_choices() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        let client = ChatClient::new(settings(&server.uri(), Some("k")));
        let err = client.complete("s", "u").await.unwrap_err();

        assert!(matches!(err, ProviderError::EmptyCompletion));
    }

    #[tokio::test]
    async fn test_complete_malformed_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = ChatClient::new(settings(&server.uri(), Some("k")));
        let err = client.complete("s", "u").await.unwrap_err();

        assert!(matches!(err, ProviderError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_complete_connection_refused() {
        let client = ChatClient::new(settings("http://127.0.0.1:9", Some("k")));
        let err = client.complete("s", "u").await.unwrap_err();

        assert!(matches!(err, ProviderError::Transport { .. }));
        assert!(err.to_string().contains("127.0.0.1:9"));
    }
}
