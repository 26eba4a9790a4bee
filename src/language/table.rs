//! Recognised languages and their codes.

use crate::ui::Style;

/// A language the detector can report and the translators can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 code (e.g., "fr"), used by the translation services.
    pub code: &'static str,
    /// ISO 639-3 code as reported by the detector (e.g., "fra").
    pub iso639_3: &'static str,
    /// English name, used in prompts and listings.
    pub name: &'static str,
}

const fn lang(code: &'static str, iso639_3: &'static str, name: &'static str) -> Language {
    Language {
        code,
        iso639_3,
        name,
    }
}

pub const ENGLISH: Language = lang("en", "eng", "English");

/// Recognised languages, ordered by ISO 639-1 code.
pub const SUPPORTED_LANGUAGES: &[Language] = &[
    lang("af", "afr", "Afrikaans"),
    lang("ak", "aka", "Akan"),
    lang("am", "amh", "Amharic"),
    lang("ar", "ara", "Arabic"),
    lang("az", "aze", "Azerbaijani"),
    lang("be", "bel", "Belarusian"),
    lang("bg", "bul", "Bulgarian"),
    lang("bn", "ben", "Bengali"),
    lang("ca", "cat", "Catalan"),
    lang("cs", "ces", "Czech"),
    lang("da", "dan", "Danish"),
    lang("de", "deu", "German"),
    lang("el", "ell", "Greek"),
    ENGLISH,
    lang("eo", "epo", "Esperanto"),
    lang("es", "spa", "Spanish"),
    lang("et", "est", "Estonian"),
    lang("fa", "pes", "Persian"),
    lang("fi", "fin", "Finnish"),
    lang("fr", "fra", "French"),
    lang("ga", "gle", "Irish"),
    lang("gu", "guj", "Gujarati"),
    lang("he", "heb", "Hebrew"),
    lang("hi", "hin", "Hindi"),
    lang("hr", "hrv", "Croatian"),
    lang("hu", "hun", "Hungarian"),
    lang("hy", "hye", "Armenian"),
    lang("id", "ind", "Indonesian"),
    lang("it", "ita", "Italian"),
    lang("ja", "jpn", "Japanese"),
    lang("jv", "jav", "Javanese"),
    lang("ka", "kat", "Georgian"),
    lang("km", "khm", "Khmer"),
    lang("kn", "kan", "Kannada"),
    lang("ko", "kor", "Korean"),
    lang("la", "lat", "Latin"),
    lang("lt", "lit", "Lithuanian"),
    lang("lv", "lav", "Latvian"),
    lang("mk", "mkd", "Macedonian"),
    lang("ml", "mal", "Malayalam"),
    lang("mr", "mar", "Marathi"),
    lang("my", "mya", "Myanmar (Burmese)"),
    lang("ne", "nep", "Nepali"),
    lang("nl", "nld", "Dutch"),
    lang("no", "nob", "Norwegian"),
    lang("or", "ori", "Odia"),
    lang("pa", "pan", "Punjabi"),
    lang("pl", "pol", "Polish"),
    lang("pt", "por", "Portuguese"),
    lang("ro", "ron", "Romanian"),
    lang("ru", "rus", "Russian"),
    lang("si", "sin", "Sinhala"),
    lang("sk", "slk", "Slovak"),
    lang("sl", "slv", "Slovenian"),
    lang("sn", "sna", "Shona"),
    lang("sr", "srp", "Serbian"),
    lang("sv", "swe", "Swedish"),
    lang("ta", "tam", "Tamil"),
    lang("te", "tel", "Telugu"),
    lang("th", "tha", "Thai"),
    lang("tk", "tuk", "Turkmen"),
    lang("tl", "tgl", "Tagalog"),
    lang("tr", "tur", "Turkish"),
    lang("uk", "ukr", "Ukrainian"),
    lang("ur", "urd", "Urdu"),
    lang("uz", "uzb", "Uzbek"),
    lang("vi", "vie", "Vietnamese"),
    lang("yi", "yid", "Yiddish"),
    lang("zh", "cmn", "Chinese"),
    lang("zu", "zul", "Zulu"),
];

/// Looks up a language by its ISO 639-1 code.
pub fn find_language(code: &str) -> Option<&'static Language> {
    SUPPORTED_LANGUAGES.iter().find(|l| l.code == code)
}

/// Looks up a language by the ISO 639-3 code a detector reports.
pub fn find_by_iso639_3(code: &str) -> Option<&'static Language> {
    SUPPORTED_LANGUAGES.iter().find(|l| l.iso639_3 == code)
}

/// Returns the English name for a code, or the code itself if unrecognised.
pub fn language_name(code: &str) -> &str {
    find_language(code).map_or(code, |l| l.name)
}

/// Prints all recognised language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Recognised languages (ISO 639-1)"));
    for language in SUPPORTED_LANGUAGES {
        println!(
            "  {:3} {}",
            Style::code(language.code),
            Style::secondary(language.name)
        );
    }
}
