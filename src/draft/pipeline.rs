use crate::language::LanguageDetector;
use crate::provider::CompletionProvider;
use crate::translate::Translator;

use super::error::DraftError;
use super::model::{DraftResult, SubmissionForm};
use super::normalize::normalize_input;
use super::preview::preview;
use super::prompt::compose_prompts;
use super::review::unsupported_figures;

/// Runs one submission from raw form input to a finished draft.
///
/// Holds borrowed, already-configured services; it keeps no state between
/// runs, so every call to [`DraftPipeline::run`] starts from scratch.
pub struct DraftPipeline<'a> {
    detector: &'a dyn LanguageDetector,
    translator: &'a dyn Translator,
    provider: &'a dyn CompletionProvider,
}

impl<'a> DraftPipeline<'a> {
    pub fn new(
        detector: &'a dyn LanguageDetector,
        translator: &'a dyn Translator,
        provider: &'a dyn CompletionProvider,
    ) -> Self {
        Self {
            detector,
            translator,
            provider,
        }
    }

    /// Detects and translates the input, drafts the email, and back-translates it.
    ///
    /// Halts with [`DraftError::MissingCredential`] before any other call when
    /// the provider has no credential, and with [`DraftError::Provider`] when
    /// drafting fails. Detection and translation failures never halt.
    pub async fn run(&self, form: &SubmissionForm) -> Result<DraftResult, DraftError> {
        self.provider.check_credential()?;

        let normalized = normalize_input(&form.native_text, self.detector, self.translator).await;
        let prompts = compose_prompts(form, &normalized);

        tracing::info!(tone = %form.tone, language = ?normalized.detected.code(), "drafting email");
        let english_email = self.provider.complete(&prompts.system, &prompts.user).await?;

        let preview = preview(&english_email, normalized.detected, self.translator).await;
        if preview.is_fallback() {
            tracing::info!("preview translation failed; showing English");
        }

        let unsupported = unsupported_figures(
            &english_email,
            &[
                form.thread_text.as_str(),
                form.notes.as_str(),
                form.native_text.as_str(),
                normalized.english_text.as_str(),
                form.details.as_str(),
            ],
        );

        Ok(DraftResult {
            preview_fallback: preview.is_fallback(),
            preview_text: preview.into_inner(),
            english_email,
            detected: normalized.detected,
            unsupported_figures: unsupported,
        })
    }
}
