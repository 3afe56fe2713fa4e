/// Domain interface for text-based language identification.
pub trait LanguageDetector: Send {
    /// Returns an ISO 639-3 code (e.g. "eng", "ara"), or `None` when the
    /// text is too short or ambiguous to classify.
    fn detect(&self, text: &str) -> Option<String>;
}
