use async_trait::async_trait;

use super::{TranslateError, Translator};
use crate::language::Language;
use crate::provider::CompletionProvider;

pub const SYSTEM_PROMPT_TEMPLATE: &str = "You are a translator. Translate the following text to {target_language}. \
     Detect the source language automatically. \
     Output only the translated text without any explanations. \
     Preserve the original formatting including blank lines and whitespace.";

#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_system_prompt(target_language: &str) -> String {
    // {target_language} is a placeholder for string replacement, not a format argument
    SYSTEM_PROMPT_TEMPLATE.replace("{target_language}", target_language)
}

/// Translator that asks the chat-completion provider to translate.
#[derive(Debug, Clone)]
pub struct LlmTranslator<P> {
    provider: P,
}

impl<P: CompletionProvider> LlmTranslator<P> {
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl<P: CompletionProvider> Translator for LlmTranslator<P> {
    async fn translate(&self, text: &str, target: &Language) -> Result<String, TranslateError> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        let system_prompt = build_system_prompt(target.name);
        tracing::debug!(target_language = target.code, "requesting LLM translation");

        Ok(self.provider.complete(&system_prompt, text).await?)
    }
}
