use crate::language::DetectedLanguage;
use crate::translate::Translator;

use super::fallback::BestEffort;

/// Shown above the English text when the back-translation failed.
pub const PREVIEW_FALLBACK_NOTICE: &str = "(Could not translate preview. Showing English.)";

/// Back-translates the drafted email into the user's detected language.
///
/// English, empty, or undetected input gets the English text unchanged. A
/// failed translation yields the notice followed by the English text, so the
/// preview is never blank.
pub async fn preview(
    english_email: &str,
    detected: DetectedLanguage,
    translator: &dyn Translator,
) -> BestEffort<String> {
    let Some(language) = detected.foreign() else {
        return BestEffort::Ok(english_email.to_string());
    };

    BestEffort::attempt(
        translator.translate(english_email, language).await,
        "preview translation",
        || format!("{PREVIEW_FALLBACK_NOTICE}\n\n{english_email}"),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::draft::testing::FakeTranslator;
    use crate::language::{ENGLISH, find_language};

    #[tokio::test]
    async fn test_preview_translates_into_detected_language() {
        let translator = FakeTranslator::ok("Bonjour");
        let detected = DetectedLanguage::Known(find_language("fr").unwrap());

        let result = preview("Hello", detected, &translator).await;

        assert_eq!(result, BestEffort::Ok("Bonjour".to_string()));
        assert_eq!(
            translator.requests(),
            vec![("Hello".to_string(), "fr".to_string())]
        );
    }

    #[tokio::test]
    async fn test_preview_is_english_when_not_foreign() {
        let translator = FakeTranslator::ok("never");

        for detected in [
            DetectedLanguage::NotAttempted,
            DetectedLanguage::Unknown,
            DetectedLanguage::Known(&ENGLISH),
        ] {
            let result = preview("Hello", detected, &translator).await;
            assert_eq!(result, BestEffort::Ok("Hello".to_string()));
        }
        assert_eq!(translator.calls(), 0);
    }

    #[tokio::test]
    async fn test_preview_failure_shows_notice_and_english() {
        let translator = FakeTranslator::failing();
        let detected = DetectedLanguage::Known(find_language("es").unwrap());

        let result = preview("Dear team,", detected, &translator).await;

        assert!(result.is_fallback());
        assert_eq!(
            result.into_inner(),
            "(Could not translate preview. Showing English.)\n\nDear team,"
        );
    }
}
