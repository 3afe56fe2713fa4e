use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use crate::audio::domain::audio_segment::AudioSegment;
use crate::audio::domain::chunker::{self, AudioChunk, ChunkWindow};
use crate::audio::domain::silence;
use crate::audio::infrastructure::wav_store;
use crate::recognition::domain::language_detector::LanguageDetector;
use crate::recognition::domain::locale::{self, LocalePolicy};
use crate::recognition::domain::speech_recognizer::SpeechRecognizer;
use crate::shared::constants::{
    DEFAULT_CHUNK_SECONDS, DEFAULT_LOCALES, DETECT_SAMPLE_SECONDS, INTER_REQUEST_DELAY_SECS,
    RECOGNIZER_SAMPLE_RATE,
};
use crate::transcript::domain::{assembler, srt};
use crate::video::domain::audio_extractor::AudioExtractor;

use super::video_transcriber::VideoTranscriber;

/// How chunk boundaries are chosen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChunkingMode {
    /// Fixed windows of the configured duration (the default).
    FixedWindows,
    /// One window per detected speech span.
    SpeechSpans {
        threshold: f32,
        min_silence_ms: u64,
    },
}

/// Settings for one per-file transcription run.
#[derive(Clone, Debug)]
pub struct TranscribeConfig {
    pub chunk_ms: u64,
    pub sample_rate: u32,
    pub locale_policy: LocalePolicy,
    pub chunking: ChunkingMode,
    /// Fixed pause between successive recognition requests.
    pub inter_request_delay: Duration,
}

impl Default for TranscribeConfig {
    fn default() -> Self {
        Self {
            chunk_ms: DEFAULT_CHUNK_SECONDS * 1000,
            sample_rate: RECOGNIZER_SAMPLE_RATE,
            locale_policy: LocalePolicy::Fixed(
                DEFAULT_LOCALES.iter().map(|l| l.to_string()).collect(),
            ),
            chunking: ChunkingMode::FixedWindows,
            inter_request_delay: Duration::from_secs(INTER_REQUEST_DELAY_SECS),
        }
    }
}

/// Per-file pipeline: extract audio, chunk it, recognize each chunk
/// sequentially, assemble time-aligned segments, and write SRT plus plain
/// text per locale.
///
/// Chunk WAVs and the language-probe sample live in a per-run temp
/// workspace that is removed when the run ends, on every exit path.
pub struct TranscribeVideoUseCase {
    extractor: Box<dyn AudioExtractor>,
    recognizer: Box<dyn SpeechRecognizer>,
    detector: Box<dyn LanguageDetector>,
    config: TranscribeConfig,
}

impl TranscribeVideoUseCase {
    pub fn new(
        extractor: Box<dyn AudioExtractor>,
        recognizer: Box<dyn SpeechRecognizer>,
        detector: Box<dyn LanguageDetector>,
        config: TranscribeConfig,
    ) -> Self {
        Self {
            extractor,
            recognizer,
            detector,
            config,
        }
    }

    fn resolve_locales(&self, audio: &AudioSegment, workspace: &Path) -> Vec<String> {
        match &self.config.locale_policy {
            LocalePolicy::Fixed(locales) => locales.clone(),
            LocalePolicy::DetectOnce {
                probe_locale,
                fallback,
            } => vec![self.detect_locale(audio, workspace, probe_locale, fallback)],
        }
    }

    /// Transcribes the leading sample and identifies its language. Any
    /// failure along the way falls back to the configured default; the
    /// decision is made once and held for every chunk of the file.
    fn detect_locale(
        &self,
        audio: &AudioSegment,
        workspace: &Path,
        probe_locale: &str,
        fallback: &str,
    ) -> String {
        let sample = audio.leading_ms(DETECT_SAMPLE_SECONDS * 1000);
        let sample_path = workspace.join("sample.wav");
        if let Err(e) = wav_store::write_wav(&sample_path, &sample) {
            log::warn!("failed to write language sample: {e}; using {fallback}");
            return fallback.to_string();
        }

        let text = match self.recognizer.recognize(&sample_path, probe_locale) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("language probe failed: {e}; using {fallback}");
                return fallback.to_string();
            }
        };

        match self
            .detector
            .detect(&text)
            .and_then(|code| locale::locale_for_code(&code))
        {
            Some(detected) => {
                log::info!("detected locale {detected}");
                detected.to_string()
            }
            None => {
                log::info!("language detection inconclusive, using {fallback}");
                fallback.to_string()
            }
        }
    }

    fn plan_windows(&self, audio: &AudioSegment) -> Vec<ChunkWindow> {
        match self.config.chunking {
            ChunkingMode::FixedWindows => {
                chunker::plan_windows(audio.duration_ms(), self.config.chunk_ms)
            }
            ChunkingMode::SpeechSpans {
                threshold,
                min_silence_ms,
            } => {
                let spans = silence::detect_speech_spans(audio, threshold, min_silence_ms);
                chunker::windows_from_spans(&spans)
            }
        }
    }

    fn export_chunks(
        &self,
        audio: &AudioSegment,
        windows: &[ChunkWindow],
        workspace: &Path,
    ) -> Result<Vec<AudioChunk>, Box<dyn std::error::Error>> {
        let mut chunks = Vec::with_capacity(windows.len());
        for window in windows {
            let slice = audio.slice_ms(window.start_ms, window.end_ms);
            let wav_path = workspace.join(format!("chunk{}.wav", window.index));
            wav_store::write_wav(&wav_path, &slice)?;
            chunks.push(AudioChunk {
                window: *window,
                wav_path,
            });
        }
        Ok(chunks)
    }

    /// Strictly sequential recognition loop with a fixed pause between
    /// successive requests. A chunk that still fails after the client's
    /// retry policy degrades to empty text rather than failing the file.
    fn transcribe_chunks(&self, chunks: &[AudioChunk], loc: &str) -> Vec<(ChunkWindow, String)> {
        let mut results = Vec::with_capacity(chunks.len());
        for (i, chunk) in chunks.iter().enumerate() {
            if i > 0 && !self.config.inter_request_delay.is_zero() {
                thread::sleep(self.config.inter_request_delay);
            }
            log::info!("transcribing chunk {}/{} ({loc})", i + 1, chunks.len());
            let text = match self.recognizer.recognize(&chunk.wav_path, loc) {
                Ok(text) => text,
                Err(e) => {
                    log::warn!("chunk {}: {e}", chunk.window.index);
                    String::new()
                }
            };
            results.push((chunk.window, text));
        }
        results
    }
}

impl VideoTranscriber for TranscribeVideoUseCase {
    fn transcribe(
        &self,
        video_path: &Path,
        output_dir: &Path,
    ) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
        let stem = video_path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| format!("invalid video path: {}", video_path.display()))?;

        log::info!("extracting audio from {}", video_path.display());
        let audio = self
            .extractor
            .extract(video_path, self.config.sample_rate)?
            .ok_or_else(|| format!("{}: no audio track", video_path.display()))?;

        // Removed on drop, on every exit path
        let workspace = tempfile::Builder::new().prefix("vidscribe-").tempdir()?;

        let locales = self.resolve_locales(&audio, workspace.path());
        let single_locale = locales.len() == 1;

        let windows = self.plan_windows(&audio);
        if windows.is_empty() {
            log::warn!("{}: no audio chunks to transcribe", video_path.display());
            return Ok(Vec::new());
        }
        log::info!(
            "split {:.2}s of audio into {} chunks",
            audio.duration_secs(),
            windows.len()
        );
        let chunks = self.export_chunks(&audio, &windows, workspace.path())?;

        fs::create_dir_all(output_dir)?;

        let mut written = Vec::new();
        for loc in &locales {
            let results = self.transcribe_chunks(&chunks, loc);
            let segments = assembler::assemble(&results);
            if segments.is_empty() {
                log::warn!("{stem}: no transcription produced for {loc}");
                continue;
            }

            let base = if single_locale {
                stem.to_string()
            } else {
                format!("{stem}_{}", locale::short_code(loc))
            };

            let srt_path = output_dir.join(format!("{base}.srt"));
            fs::write(&srt_path, srt::render_srt(&segments))?;
            let txt_path = output_dir.join(format!("{base}.txt"));
            fs::write(&txt_path, srt::render_plain(&segments))?;

            log::info!(
                "wrote {} segments to {} and {}",
                segments.len(),
                srt_path.display(),
                txt_path.display()
            );
            written.push(srt_path);
            written.push(txt_path);
        }

        Ok(written)
    }
}
