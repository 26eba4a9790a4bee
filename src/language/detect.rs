//! Language detection for the native-language input.

use thiserror::Error;

use super::table::{ENGLISH, Language, find_by_iso639_3};

/// Code reported when detection was attempted but failed.
pub const UNKNOWN_CODE: &str = "unknown";

/// Why a detector could not name a recognised language.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DetectError {
    /// The text carries no usable signal (too short, digits, punctuation).
    #[error("could not detect a language")]
    NoSignal,
    /// The detector named a language outside the recognised table.
    #[error("detected language '{0}' is not supported")]
    Unsupported(String),
}

/// Detects the language of a piece of text.
pub trait LanguageDetector: Send + Sync {
    fn detect(&self, text: &str) -> Result<&'static Language, DetectError>;
}

/// Guesses below this confidence are treated as no signal. Short English
/// phrases otherwise come back as arbitrary languages.
const MIN_CONFIDENCE: f64 = 0.1;

/// Detector backed by the `whatlang` trigram models.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhatlangDetector;

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Result<&'static Language, DetectError> {
        let info = whatlang::detect(text).ok_or(DetectError::NoSignal)?;
        if info.confidence() < MIN_CONFIDENCE {
            tracing::debug!(
                guess = info.lang().code(),
                confidence = info.confidence(),
                "ignoring low-confidence language guess"
            );
            return Err(DetectError::NoSignal);
        }
        let code = info.lang().code();
        find_by_iso639_3(code).ok_or_else(|| DetectError::Unsupported(code.to_string()))
    }
}

/// Outcome of detecting the native input's language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectedLanguage {
    /// The input was empty, so detection never ran.
    NotAttempted,
    /// Detection ran and failed.
    Unknown,
    /// Detection named a recognised language.
    Known(&'static Language),
}

impl DetectedLanguage {
    /// The detected code: `None` when not attempted, `"unknown"` on failure.
    pub const fn code(&self) -> Option<&'static str> {
        match self {
            Self::NotAttempted => None,
            Self::Unknown => Some(UNKNOWN_CODE),
            Self::Known(language) => Some(language.code),
        }
    }

    /// The recognised non-English language, if any.
    ///
    /// Only these inputs are translated to English and get a back-translated preview.
    pub fn foreign(&self) -> Option<&'static Language> {
        match *self {
            Self::Known(language) if language.code != ENGLISH.code => Some(language),
            _ => None,
        }
    }
}
