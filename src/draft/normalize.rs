use crate::language::{DetectedLanguage, ENGLISH, LanguageDetector};
use crate::translate::Translator;

use super::fallback::BestEffort;
use super::model::NormalizedInput;

/// Detects the language of the native input and brings it into English.
///
/// Never fails: a detection failure yields [`DetectedLanguage::Unknown`] and
/// the text passes through; a translation failure passes the original text
/// through without telling the user.
pub async fn normalize_input(
    native_text: &str,
    detector: &dyn LanguageDetector,
    translator: &dyn Translator,
) -> NormalizedInput {
    if native_text.trim().is_empty() {
        return NormalizedInput {
            detected: DetectedLanguage::NotAttempted,
            english_text: String::new(),
        };
    }

    let detected = BestEffort::attempt(
        detector.detect(native_text).map(DetectedLanguage::Known),
        "language detection",
        || DetectedLanguage::Unknown,
    )
    .into_inner();

    tracing::debug!(language = ?detected.code(), "detected native input language");

    let Some(language) = detected.foreign() else {
        return NormalizedInput {
            detected,
            english_text: native_text.to_string(),
        };
    };

    let english = BestEffort::attempt(
        translator.translate(native_text, &ENGLISH).await,
        "input translation",
        || native_text.to_string(),
    );
    if english.is_fallback() {
        tracing::debug!(from = language.code, "input translation fell back to original text");
    }

    NormalizedInput {
        detected,
        english_text: english.into_inner(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::draft::testing::{FakeDetector, FakeTranslator};

    #[tokio::test]
    async fn test_empty_input_skips_detection_and_translation() {
        let detector = FakeDetector::returning("fr");
        let translator = FakeTranslator::ok("never");

        let normalized = normalize_input("   \n", &detector, &translator).await;

        assert_eq!(normalized.detected, DetectedLanguage::NotAttempted);
        assert_eq!(normalized.english_text, "");
        assert_eq!(detector.calls(), 0);
        assert_eq!(translator.calls(), 0);
    }

    #[tokio::test]
    async fn test_english_input_passes_through() {
        let detector = FakeDetector::returning("en");
        let translator = FakeTranslator::ok("never");

        let normalized = normalize_input("Please call me.", &detector, &translator).await;

        assert_eq!(normalized.detected.code(), Some("en"));
        assert_eq!(normalized.english_text, "Please call me.");
        assert_eq!(translator.calls(), 0);
    }

    #[tokio::test]
    async fn test_detection_failure_is_unknown_and_passes_through() {
        let detector = FakeDetector::failing();
        let translator = FakeTranslator::ok("never");

        let normalized = normalize_input("???", &detector, &translator).await;

        assert_eq!(normalized.detected, DetectedLanguage::Unknown);
        assert_eq!(normalized.detected.code(), Some("unknown"));
        assert_eq!(normalized.english_text, "???");
        assert_eq!(translator.calls(), 0);
    }

    #[tokio::test]
    async fn test_foreign_input_is_translated_to_english() {
        let detector = FakeDetector::returning("fr");
        let translator = FakeTranslator::ok("Hello, I would like to cancel.");

        let normalized =
            normalize_input("Bonjour, je voudrais annuler.", &detector, &translator).await;

        assert_eq!(normalized.detected.code(), Some("fr"));
        assert_eq!(normalized.english_text, "Hello, I would like to cancel.");
        assert_eq!(
            translator.requests(),
            vec![("Bonjour, je voudrais annuler.".to_string(), "en".to_string())]
        );
    }

    #[tokio::test]
    async fn test_translation_failure_falls_back_to_original() {
        let detector = FakeDetector::returning("de");
        let translator = FakeTranslator::failing();

        let normalized = normalize_input("Guten Tag", &detector, &translator).await;

        assert_eq!(normalized.detected.code(), Some("de"));
        assert_eq!(normalized.english_text, "Guten Tag");
        assert_eq!(translator.calls(), 1);
    }
}
