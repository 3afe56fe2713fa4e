/// Video container extensions the directory driver picks up.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mov", "mkv"];

/// Name of the output subdirectory created inside the input directory.
pub const TRANSCRIPTS_DIR_NAME: &str = "transcripts";

/// Sample rate chunks are resampled to before recognition.
pub const RECOGNIZER_SAMPLE_RATE: u32 = 16000;

/// Fixed-window chunk duration for the multi-locale pipeline.
pub const DEFAULT_CHUNK_SECONDS: u64 = 30;

/// Fixed-window chunk duration when the locale is auto-detected.
pub const DETECT_CHUNK_SECONDS: u64 = 10;

/// Length of the leading sample used for language detection.
pub const DETECT_SAMPLE_SECONDS: u64 = 10;

/// Locale used when detection is inconclusive or disabled.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Locales of the fixed dual-language configuration.
pub const DEFAULT_LOCALES: &[&str] = &["en-US", "ar-AR"];

/// Total recognition attempts per chunk, first try included.
pub const MAX_RECOGNIZE_ATTEMPTS: u32 = 3;

/// First retry delay; doubles after each failed attempt.
pub const RETRY_BASE_DELAY_SECS: u64 = 5;

/// Fixed pause between successive recognition requests.
pub const INTER_REQUEST_DELAY_SECS: u64 = 2;

pub const DEFAULT_RECOGNIZE_ENDPOINT: &str = "http://www.google.com/speech-api/v2/recognize";
