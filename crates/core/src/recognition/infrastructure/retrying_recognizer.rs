use std::path::Path;
use std::thread;
use std::time::Duration;

use crate::recognition::domain::speech_recognizer::{RecognizeError, SpeechRecognizer};
use crate::shared::constants::{MAX_RECOGNIZE_ATTEMPTS, RETRY_BASE_DELAY_SECS};

/// Injected so tests can observe delays instead of sleeping through them.
pub type SleepFn = Box<dyn Fn(Duration) + Send>;

/// Decorator adding bounded retry with exponential backoff to any
/// `SpeechRecognizer`.
///
/// `NoSpeech` is a final answer and immediately degrades to empty text.
/// Transport failures are retried with the delay doubling after each
/// failed attempt; once attempts are exhausted the chunk also degrades to
/// empty text, so one bad chunk never fails the whole file.
pub struct RetryingRecognizer {
    inner: Box<dyn SpeechRecognizer>,
    max_attempts: u32,
    base_delay: Duration,
    sleep: SleepFn,
}

impl RetryingRecognizer {
    pub fn new(inner: Box<dyn SpeechRecognizer>) -> Self {
        Self::with_policy(
            inner,
            MAX_RECOGNIZE_ATTEMPTS,
            Duration::from_secs(RETRY_BASE_DELAY_SECS),
            Box::new(thread::sleep),
        )
    }

    pub fn with_policy(
        inner: Box<dyn SpeechRecognizer>,
        max_attempts: u32,
        base_delay: Duration,
        sleep: SleepFn,
    ) -> Self {
        Self {
            inner,
            max_attempts,
            base_delay,
            sleep,
        }
    }
}

impl SpeechRecognizer for RetryingRecognizer {
    fn recognize(&self, chunk_wav: &Path, locale: &str) -> Result<String, RecognizeError> {
        let mut delay = self.base_delay;

        for attempt in 1..=self.max_attempts {
            match self.inner.recognize(chunk_wav, locale) {
                Ok(text) => return Ok(text),
                Err(RecognizeError::NoSpeech) => {
                    log::warn!("{}: speech not recognized", chunk_wav.display());
                    return Ok(String::new());
                }
                Err(RecognizeError::Transport(reason)) => {
                    if attempt < self.max_attempts {
                        log::warn!(
                            "{}: attempt {attempt} failed ({reason}), retrying in {}s",
                            chunk_wav.display(),
                            delay.as_secs()
                        );
                        (self.sleep)(delay);
                        delay *= 2;
                    } else {
                        log::error!(
                            "{}: failed after {} attempts: {reason}",
                            chunk_wav.display(),
                            self.max_attempts
                        );
                    }
                }
            }
        }

        Ok(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Fails with transport errors until `failures` calls have happened,
    /// then answers with `text`.
    struct FlakyRecognizer {
        failures: u32,
        text: &'static str,
        calls: Arc<Mutex<u32>>,
    }

    impl SpeechRecognizer for FlakyRecognizer {
        fn recognize(&self, _: &Path, _: &str) -> Result<String, RecognizeError> {
            let mut calls = self.calls.lock().unwrap();
            *calls += 1;
            if *calls <= self.failures {
                Err(RecognizeError::Transport("connection reset".to_string()))
            } else {
                Ok(self.text.to_string())
            }
        }
    }

    struct NoSpeechRecognizer {
        calls: Arc<Mutex<u32>>,
    }

    impl SpeechRecognizer for NoSpeechRecognizer {
        fn recognize(&self, _: &Path, _: &str) -> Result<String, RecognizeError> {
            *self.calls.lock().unwrap() += 1;
            Err(RecognizeError::NoSpeech)
        }
    }

    fn recording_sleep(delays: Arc<Mutex<Vec<Duration>>>) -> SleepFn {
        Box::new(move |d| delays.lock().unwrap().push(d))
    }

    fn retrying(inner: Box<dyn SpeechRecognizer>, delays: Arc<Mutex<Vec<Duration>>>) -> RetryingRecognizer {
        RetryingRecognizer::with_policy(
            inner,
            3,
            Duration::from_secs(5),
            recording_sleep(delays),
        )
    }

    #[test]
    fn test_succeeds_on_third_attempt_with_backoff() {
        let calls = Arc::new(Mutex::new(0));
        let delays = Arc::new(Mutex::new(Vec::new()));
        let recognizer = retrying(
            Box::new(FlakyRecognizer {
                failures: 2,
                text: "recovered text",
                calls: calls.clone(),
            }),
            delays.clone(),
        );

        let text = recognizer
            .recognize(Path::new("chunk0.wav"), "en-US")
            .unwrap();

        assert_eq!(text, "recovered text");
        assert_eq!(*calls.lock().unwrap(), 3);
        assert_eq!(
            *delays.lock().unwrap(),
            vec![Duration::from_secs(5), Duration::from_secs(10)]
        );
    }

    #[test]
    fn test_exhausted_attempts_degrade_to_empty_text() {
        let calls = Arc::new(Mutex::new(0));
        let delays = Arc::new(Mutex::new(Vec::new()));
        let recognizer = retrying(
            Box::new(FlakyRecognizer {
                failures: 99,
                text: "never",
                calls: calls.clone(),
            }),
            delays.clone(),
        );

        let text = recognizer
            .recognize(Path::new("chunk0.wav"), "en-US")
            .unwrap();

        assert_eq!(text, "");
        assert_eq!(*calls.lock().unwrap(), 3);
        // No sleep after the final attempt
        assert_eq!(delays.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_no_speech_returns_empty_without_retry() {
        let calls = Arc::new(Mutex::new(0));
        let delays = Arc::new(Mutex::new(Vec::new()));
        let recognizer = retrying(
            Box::new(NoSpeechRecognizer {
                calls: calls.clone(),
            }),
            delays.clone(),
        );

        let text = recognizer
            .recognize(Path::new("chunk0.wav"), "en-US")
            .unwrap();

        assert_eq!(text, "");
        assert_eq!(*calls.lock().unwrap(), 1);
        assert!(delays.lock().unwrap().is_empty());
    }

    #[test]
    fn test_first_attempt_success_does_not_sleep() {
        let calls = Arc::new(Mutex::new(0));
        let delays = Arc::new(Mutex::new(Vec::new()));
        let recognizer = retrying(
            Box::new(FlakyRecognizer {
                failures: 0,
                text: "immediate",
                calls: calls.clone(),
            }),
            delays.clone(),
        );

        let text = recognizer
            .recognize(Path::new("chunk0.wav"), "en-US")
            .unwrap();

        assert_eq!(text, "immediate");
        assert_eq!(*calls.lock().unwrap(), 1);
        assert!(delays.lock().unwrap().is_empty());
    }
}
