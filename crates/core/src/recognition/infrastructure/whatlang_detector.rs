use crate::recognition::domain::language_detector::LanguageDetector;

/// Text language identification via whatlang's trigram classifier.
pub struct WhatlangDetector;

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Option<String> {
        whatlang::detect(text).map(|info| info.lang().code().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_english_text() {
        let detector = WhatlangDetector;
        let code = detector.detect(
            "this is a longer piece of ordinary english text that any reasonable \
             classifier should have no trouble identifying as english",
        );
        assert_eq!(code.as_deref(), Some("eng"));
    }

    #[test]
    fn test_detects_arabic_text() {
        let detector = WhatlangDetector;
        let code = detector.detect("السلام عليكم ورحمة الله وبركاته كيف حالكم اليوم");
        assert_eq!(code.as_deref(), Some("ara"));
    }

    #[test]
    fn test_empty_text_is_inconclusive() {
        let detector = WhatlangDetector;
        assert_eq!(detector.detect(""), None);
    }
}
