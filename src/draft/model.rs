use crate::language::DetectedLanguage;

use super::tone::Tone;

/// Everything the user entered for one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionForm {
    /// Free text in the user's own language.
    pub native_text: String,
    /// A previous email or thread being replied to.
    pub thread_text: String,
    /// Extra notes or keywords, already in English.
    pub notes: String,
    pub tone: Tone,
    /// Addresses, reference numbers, dates to mention.
    pub details: String,
}

/// The native input after detection and translation to English.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedInput {
    pub detected: DetectedLanguage,
    pub english_text: String,
}

/// The instructions sent to the language model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

/// A finished draft and its preview in the user's language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftResult {
    pub english_email: String,
    /// The email back-translated for the user; equal to `english_email` when
    /// the input was English, empty, or of unknown language.
    pub preview_text: String,
    pub detected: DetectedLanguage,
    /// True when back-translation failed and the preview carries the notice.
    pub preview_fallback: bool,
    /// Numbers in the email that appear in none of the inputs.
    pub unsupported_figures: Vec<String>,
}
