use std::path::Path;

use crate::audio::domain::audio_segment::AudioSegment;

/// Domain interface for pulling the audio track out of a video container.
pub trait AudioExtractor: Send {
    /// Decode the best audio stream to mono PCM at the target sample rate.
    /// Returns `None` when the container has no audio stream; errors when
    /// the file cannot be opened or decoded.
    fn extract(
        &self,
        video_path: &Path,
        target_sample_rate: u32,
    ) -> Result<Option<AudioSegment>, Box<dyn std::error::Error>>;
}
