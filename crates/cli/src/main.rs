use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;

use vidscribe_core::audio::domain::silence::{DEFAULT_MIN_SILENCE_MS, DEFAULT_SILENCE_THRESHOLD};
use vidscribe_core::pipeline::process_directory_use_case::ProcessDirectoryUseCase;
use vidscribe_core::pipeline::transcribe_video_use_case::{
    ChunkingMode, TranscribeConfig, TranscribeVideoUseCase,
};
use vidscribe_core::recognition::domain::locale::LocalePolicy;
use vidscribe_core::recognition::infrastructure::http_recognizer::HttpSpeechRecognizer;
use vidscribe_core::recognition::infrastructure::retrying_recognizer::RetryingRecognizer;
use vidscribe_core::recognition::infrastructure::whatlang_detector::WhatlangDetector;
use vidscribe_core::shared::constants::{
    DEFAULT_CHUNK_SECONDS, DEFAULT_LOCALE, DEFAULT_RECOGNIZE_ENDPOINT, DETECT_CHUNK_SECONDS,
    INTER_REQUEST_DELAY_SECS, RECOGNIZER_SAMPLE_RATE,
};
use vidscribe_core::video::infrastructure::ffmpeg_audio_extractor::FfmpegAudioExtractor;

/// Batch speech transcription for video files: SRT and plain-text
/// transcripts, one pair per language.
#[derive(Parser)]
#[command(name = "vidscribe")]
struct Cli {
    /// Directory containing video files to transcribe.
    input_dir: PathBuf,

    /// Recognition locales; one transcript pair per locale.
    #[arg(long, value_delimiter = ',', default_value = "en-US,ar-AR")]
    languages: Vec<String>,

    /// Detect the language once from the first seconds of each file.
    #[arg(long, conflicts_with = "languages")]
    detect_language: bool,

    /// Chunk duration in seconds (30 by default, 10 with --detect-language).
    #[arg(long)]
    chunk_seconds: Option<u64>,

    /// Chunk at detected speech spans instead of fixed windows.
    #[arg(long)]
    silence_chunking: bool,

    /// RMS amplitude below which audio counts as silence (0.0-1.0).
    #[arg(long, default_value_t = DEFAULT_SILENCE_THRESHOLD)]
    silence_threshold: f32,

    /// Minimum silence in milliseconds that splits two speech spans.
    #[arg(long, default_value_t = DEFAULT_MIN_SILENCE_MS)]
    min_silence_ms: u64,

    /// Recognition service endpoint.
    #[arg(long, default_value = DEFAULT_RECOGNIZE_ENDPOINT)]
    endpoint: String,

    /// API key passed to the recognition service.
    #[arg(long)]
    api_key: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(long, default_value = "30")]
    timeout_seconds: u64,

    /// Fixed delay between recognition requests in seconds.
    #[arg(long, default_value_t = INTER_REQUEST_DELAY_SECS)]
    rate_limit_seconds: u64,

    /// Fallback locale when language detection is inconclusive.
    #[arg(long, default_value = DEFAULT_LOCALE)]
    default_locale: String,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let chunk_seconds = cli.chunk_seconds.unwrap_or(if cli.detect_language {
        DETECT_CHUNK_SECONDS
    } else {
        DEFAULT_CHUNK_SECONDS
    });

    let locale_policy = if cli.detect_language {
        LocalePolicy::DetectOnce {
            probe_locale: cli.default_locale.clone(),
            fallback: cli.default_locale.clone(),
        }
    } else {
        LocalePolicy::Fixed(cli.languages.clone())
    };

    let chunking = if cli.silence_chunking {
        ChunkingMode::SpeechSpans {
            threshold: cli.silence_threshold,
            min_silence_ms: cli.min_silence_ms,
        }
    } else {
        ChunkingMode::FixedWindows
    };

    let config = TranscribeConfig {
        chunk_ms: chunk_seconds * 1000,
        sample_rate: RECOGNIZER_SAMPLE_RATE,
        locale_policy,
        chunking,
        inter_request_delay: Duration::from_secs(cli.rate_limit_seconds),
    };

    let recognizer = RetryingRecognizer::new(Box::new(HttpSpeechRecognizer::new(
        &cli.endpoint,
        cli.api_key.clone(),
        Duration::from_secs(cli.timeout_seconds),
    )?));

    let transcriber = TranscribeVideoUseCase::new(
        Box::new(FfmpegAudioExtractor),
        Box::new(recognizer),
        Box::new(WhatlangDetector),
        config,
    );

    let driver = ProcessDirectoryUseCase::new(Box::new(transcriber));
    let report = driver.run(&cli.input_dir)?;

    log::info!(
        "{} of {} videos transcribed",
        report.succeeded,
        report.processed
    );
    for failed in &report.failed {
        log::warn!("no transcript for {}", failed.display());
    }
    if report.succeeded == 0 {
        return Err("no transcripts were produced".into());
    }
    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input_dir.is_dir() {
        return Err(format!("Input directory not found: {}", cli.input_dir.display()).into());
    }
    if !cli.detect_language {
        if cli.languages.is_empty() {
            return Err("--languages requires at least one locale".into());
        }
        if cli.languages.iter().any(|l| l.trim().is_empty()) {
            return Err("--languages entries must be non-empty".into());
        }
    }
    if cli.chunk_seconds == Some(0) {
        return Err("--chunk-seconds must be positive".into());
    }
    if !(0.0..=1.0).contains(&cli.silence_threshold) {
        return Err(format!(
            "Silence threshold must be between 0.0 and 1.0, got {}",
            cli.silence_threshold
        )
        .into());
    }
    if cli.min_silence_ms == 0 {
        return Err("--min-silence-ms must be positive".into());
    }
    if cli.default_locale.trim().is_empty() {
        return Err("--default-locale must be non-empty".into());
    }
    Ok(())
}
