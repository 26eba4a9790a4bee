//! Language detection and the recognised-language table.

mod detect;
mod table;

pub use detect::{DetectError, DetectedLanguage, LanguageDetector, UNKNOWN_CODE, WhatlangDetector};
pub use table::{
    ENGLISH, Language, SUPPORTED_LANGUAGES, find_by_iso639_3, find_language, language_name,
    print_languages,
};
