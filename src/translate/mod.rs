//! Translation services: a public web translator and an LLM-backed one.

mod google;
mod llm;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::{TranslationBackend, TranslationSettings};
use crate::language::Language;
use crate::provider::{ChatClient, ProviderError};

pub use google::GoogleTranslator;
pub use llm::{LlmTranslator, SYSTEM_PROMPT_TEMPLATE, build_system_prompt};

/// Failures from a translation backend.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("Translation request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Translation service returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Unexpected translation response: {0}")]
    InvalidResponse(String),

    #[error("Text is too long to translate ({len} characters, limit {limit})")]
    TooLong { len: usize, limit: usize },

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Translates text into a target language; the source language is auto-detected.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, target: &Language) -> Result<String, TranslateError>;
}

/// Builds the configured translation backend.
///
/// The LLM backend reuses the drafting provider's client and credential.
pub fn build_translator(settings: &TranslationSettings, chat: &ChatClient) -> Box<dyn Translator> {
    match settings.backend {
        TranslationBackend::Google => Box::new(GoogleTranslator::new(settings.endpoint.clone())),
        TranslationBackend::Llm => Box::new(LlmTranslator::new(chat.clone())),
    }
}
