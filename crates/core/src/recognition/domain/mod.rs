pub mod language_detector;
pub mod locale;
pub mod speech_recognizer;
