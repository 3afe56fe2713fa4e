use std::path::{Path, PathBuf};

/// Per-file transcription boundary between the directory driver and the
/// pipeline, so drivers can be tested with stubs.
pub trait VideoTranscriber {
    /// Transcribe one video, writing transcript files into `output_dir`.
    ///
    /// Returns the files written; an empty list means no transcription
    /// was produced for any locale. `Err` means the file itself could not
    /// be processed (unreadable, no audio track).
    fn transcribe(
        &self,
        video_path: &Path,
        output_dir: &Path,
    ) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>>;
}
