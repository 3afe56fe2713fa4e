/// A decoded waveform: interleaved PCM samples normalized to [-1.0, 1.0].
#[derive(Clone, Debug, PartialEq)]
pub struct AudioSegment {
    samples: Vec<f32>,
    sample_rate: u32,
    channels: u16,
}

impl AudioSegment {
    pub fn new(samples: Vec<f32>, sample_rate: u32, channels: u16) -> Self {
        Self {
            samples,
            sample_rate,
            channels,
        }
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / (self.sample_rate as f64 * self.channels as f64)
    }

    /// Total duration in whole milliseconds (truncated).
    pub fn duration_ms(&self) -> u64 {
        let frames = (self.samples.len() / self.channels as usize) as u64;
        frames * 1000 / self.sample_rate as u64
    }

    /// Interleaved sample index of the frame at `ms`, clamped to the end.
    fn sample_index_at_ms(&self, ms: u64) -> usize {
        let frame = (ms * self.sample_rate as u64 / 1000) as usize;
        (frame * self.channels as usize).min(self.samples.len())
    }

    /// Copies out the window `[start_ms, end_ms)`, clamped to the waveform.
    ///
    /// Boundaries are frame-aligned so channel interleaving is preserved.
    pub fn slice_ms(&self, start_ms: u64, end_ms: u64) -> AudioSegment {
        let start = self.sample_index_at_ms(start_ms);
        let end = self.sample_index_at_ms(end_ms.max(start_ms));
        AudioSegment::new(self.samples[start..end].to_vec(), self.sample_rate, self.channels)
    }

    /// The leading `min(len_ms, total)` of the waveform.
    pub fn leading_ms(&self, len_ms: u64) -> AudioSegment {
        self.slice_ms(0, len_ms.min(self.duration_ms()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_creates_segment_with_correct_fields() {
        let samples = vec![0.0f32; 16000];
        let seg = AudioSegment::new(samples.clone(), 16000, 1);
        assert_eq!(seg.samples(), &samples[..]);
        assert_eq!(seg.sample_rate(), 16000);
        assert_eq!(seg.channels(), 1);
    }

    #[test]
    fn test_duration_mono() {
        let seg = AudioSegment::new(vec![0.0; 48000], 16000, 1);
        assert_relative_eq!(seg.duration_secs(), 3.0);
        assert_eq!(seg.duration_ms(), 3000);
    }

    #[test]
    fn test_duration_stereo() {
        let seg = AudioSegment::new(vec![0.0; 96000], 48000, 2);
        assert_relative_eq!(seg.duration_secs(), 1.0);
        assert_eq!(seg.duration_ms(), 1000);
    }

    #[test]
    fn test_duration_ms_truncates_partial_millisecond() {
        // 24 frames at 16 kHz is 1.5 ms
        let seg = AudioSegment::new(vec![0.0; 24], 16000, 1);
        assert_eq!(seg.duration_ms(), 1);
    }

    #[test]
    fn test_slice_ms_copies_expected_samples() {
        let samples: Vec<f32> = (0..16000).map(|i| i as f32).collect();
        let seg = AudioSegment::new(samples, 16000, 1);
        let slice = seg.slice_ms(250, 500);
        assert_eq!(slice.samples().len(), 4000);
        assert_eq!(slice.samples()[0], 4000.0);
        assert_eq!(slice.duration_ms(), 250);
    }

    #[test]
    fn test_slice_ms_clamps_past_end() {
        let seg = AudioSegment::new(vec![0.0; 8000], 16000, 1);
        let slice = seg.slice_ms(0, 10_000);
        assert_eq!(slice.samples().len(), 8000);
    }

    #[test]
    fn test_slice_ms_is_frame_aligned_for_stereo() {
        let seg = AudioSegment::new(vec![0.0; 9000], 48000, 2);
        let slice = seg.slice_ms(1, 93);
        assert_eq!(slice.samples().len() % 2, 0);
        assert_eq!(slice.channels(), 2);
    }

    #[test]
    fn test_slice_ms_inverted_range_is_empty() {
        let seg = AudioSegment::new(vec![0.0; 16000], 16000, 1);
        assert!(seg.slice_ms(500, 250).is_empty());
    }

    #[test]
    fn test_leading_ms_shorter_waveform_returns_whole() {
        let seg = AudioSegment::new(vec![0.0; 8000], 16000, 1);
        let lead = seg.leading_ms(10_000);
        assert_eq!(lead.samples().len(), 8000);
    }

    #[test]
    fn test_leading_ms_truncates_long_waveform() {
        let seg = AudioSegment::new(vec![0.0; 320_000], 16000, 1);
        let lead = seg.leading_ms(10_000);
        assert_eq!(lead.duration_ms(), 10_000);
    }
}
