pub mod http_recognizer;
pub mod retrying_recognizer;
pub mod whatlang_detector;
