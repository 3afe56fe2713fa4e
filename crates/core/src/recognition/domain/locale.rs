/// How recognition locales are chosen for a file.
///
/// One policy covers both observed pipeline shapes: a fixed locale list
/// (one transcript per locale) and a single locale detected once from a
/// leading sample and held for every chunk of the file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LocalePolicy {
    /// Transcribe every chunk once per listed locale.
    Fixed(Vec<String>),
    /// Probe the leading sample with `probe_locale`, identify the language
    /// of the resulting text, and hold the mapped locale for the whole
    /// file. Falls back to `fallback` when detection is inconclusive.
    DetectOnce {
        probe_locale: String,
        fallback: String,
    },
}

/// Detected-language-code prefix to recognition locale tag.
///
/// Prefix matching covers both two-letter and ISO 639-3 codes ("en" and
/// "eng", "ar" and "ara").
const LOCALE_TABLE: &[(&str, &str)] = &[
    ("en", "en-US"),
    ("ar", "ar-AR"),
    ("spa", "es-ES"),
    ("fra", "fr-FR"),
    ("deu", "de-DE"),
    ("por", "pt-PT"),
    ("rus", "ru-RU"),
    ("tur", "tr-TR"),
    ("hin", "hi-IN"),
];

/// Maps a detected language code to a recognition locale tag.
pub fn locale_for_code(code: &str) -> Option<&'static str> {
    LOCALE_TABLE
        .iter()
        .find(|(prefix, _)| code.starts_with(prefix))
        .map(|(_, locale)| *locale)
}

/// The primary language subtag, used as the output filename suffix
/// ("en-US" becomes "en").
pub fn short_code(locale: &str) -> &str {
    locale.split(['-', '_']).next().unwrap_or(locale)
}
