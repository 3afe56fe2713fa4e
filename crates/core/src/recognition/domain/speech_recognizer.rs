use std::path::Path;

use thiserror::Error;

/// Why a recognition call produced no text.
///
/// The split matters to the retry policy: `NoSpeech` is a final answer,
/// `Transport` is transient and eligible for retry.
#[derive(Error, Debug)]
pub enum RecognizeError {
    /// The service processed the audio but found no decodable speech.
    #[error("no speech recognized")]
    NoSpeech,
    /// Network, service, or timeout failure.
    #[error("recognition request failed: {0}")]
    Transport(String),
}

/// Domain interface for speech-to-text recognition of one chunk.
///
/// Implementations take the chunk's exported WAV file and return the
/// recognized text verbatim, trimmed of surrounding whitespace.
pub trait SpeechRecognizer: Send {
    fn recognize(&self, chunk_wav: &Path, locale: &str) -> Result<String, RecognizeError>;
}
