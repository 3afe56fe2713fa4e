use std::fs;
use std::path::{Path, PathBuf};

use crate::shared::constants::{TRANSCRIPTS_DIR_NAME, VIDEO_EXTENSIONS};

use super::video_transcriber::VideoTranscriber;

/// Outcome of one directory batch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub succeeded: usize,
    pub failed: Vec<PathBuf>,
}

/// Drives the per-file pipeline across every video file in a directory.
///
/// Per-file failures are logged and the batch continues; only failing to
/// enumerate the directory (or finding no video files at all) aborts.
pub struct ProcessDirectoryUseCase {
    transcriber: Box<dyn VideoTranscriber>,
}

impl ProcessDirectoryUseCase {
    pub fn new(transcriber: Box<dyn VideoTranscriber>) -> Self {
        Self { transcriber }
    }

    pub fn run(&self, directory: &Path) -> Result<BatchReport, Box<dyn std::error::Error>> {
        let videos = find_video_files(directory)?;
        if videos.is_empty() {
            return Err(format!("no video files found in {}", directory.display()).into());
        }

        let output_dir = directory.join(TRANSCRIPTS_DIR_NAME);
        let mut report = BatchReport::default();

        for video in &videos {
            log::info!("processing {}", video.display());
            report.processed += 1;
            match self.transcriber.transcribe(video, &output_dir) {
                Ok(written) if !written.is_empty() => {
                    log::info!("finished {}", video.display());
                    report.succeeded += 1;
                }
                Ok(_) => {
                    log::error!("no transcription produced for {}", video.display());
                    report.failed.push(video.clone());
                }
                Err(e) => {
                    log::error!("failed to process {}: {e}", video.display());
                    report.failed.push(video.clone());
                }
            }
        }

        Ok(report)
    }
}

/// Enumerates video files by extension, sorted for deterministic order.
pub fn find_video_files(directory: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut videos: Vec<PathBuf> = fs::read_dir(directory)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && has_video_extension(path))
        .collect();
    videos.sort();
    Ok(videos)
}

fn has_video_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| VIDEO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
