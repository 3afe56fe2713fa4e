use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::audio::infrastructure::wav_store;
use crate::recognition::domain::speech_recognizer::{RecognizeError, SpeechRecognizer};

/// Speech recognizer backed by a remote HTTP recognition service.
///
/// Speaks the Google-Speech-v2-style wire shape: raw 16-bit little-endian
/// PCM posted as `audio/l16` with `lang` (and optionally `key`) query
/// parameters; the response is one JSON object per line, where lines with
/// an empty `result` array may precede the line carrying the hypotheses.
pub struct HttpSpeechRecognizer {
    client: reqwest::blocking::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpSpeechRecognizer {
    pub fn new(
        endpoint: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, RecognizeError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RecognizeError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            api_key,
        })
    }
}

impl SpeechRecognizer for HttpSpeechRecognizer {
    fn recognize(&self, chunk_wav: &Path, locale: &str) -> Result<String, RecognizeError> {
        let (samples, sample_rate) = wav_store::read_pcm16(chunk_wav).map_err(|e| {
            RecognizeError::Transport(format!("failed to read {}: {e}", chunk_wav.display()))
        })?;

        let mut body = Vec::with_capacity(samples.len() * 2);
        for sample in &samples {
            body.extend_from_slice(&sample.to_le_bytes());
        }

        let mut request = self
            .client
            .post(&self.endpoint)
            .query(&[("client", "chromium"), ("lang", locale)])
            .header("Content-Type", format!("audio/l16; rate={sample_rate}"))
            .body(body);
        if let Some(ref key) = self.api_key {
            request = request.query(&[("key", key.as_str())]);
        }

        let response = request
            .send()
            .map_err(|e| RecognizeError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(RecognizeError::Transport(format!(
                "service returned {status}"
            )));
        }

        let body = response
            .text()
            .map_err(|e| RecognizeError::Transport(e.to_string()))?;
        parse_transcript(&body)
    }
}

#[derive(Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    result: Vec<RecognizeResult>,
}

#[derive(Deserialize)]
struct RecognizeResult {
    #[serde(default)]
    alternative: Vec<Alternative>,
}

#[derive(Deserialize)]
struct Alternative {
    transcript: Option<String>,
}

/// Extracts the first non-empty transcript from a line-delimited response
/// body. A body with no hypotheses at all means the service found no
/// decodable speech.
fn parse_transcript(body: &str) -> Result<String, RecognizeError> {
    for line in body.lines().filter(|line| !line.trim().is_empty()) {
        let response: RecognizeResponse = serde_json::from_str(line)
            .map_err(|e| RecognizeError::Transport(format!("malformed response: {e}")))?;
        for result in response.result {
            if let Some(text) = result.alternative.into_iter().find_map(|a| a.transcript) {
                let text = text.trim();
                if !text.is_empty() {
                    return Ok(text.to_string());
                }
            }
        }
    }
    Err(RecognizeError::NoSpeech)
}
