use super::audio_segment::AudioSegment;

/// RMS amplitude below which a frame counts as silence.
pub const DEFAULT_SILENCE_THRESHOLD: f32 = 0.01;

/// Silent run length that splits two speech spans.
pub const DEFAULT_MIN_SILENCE_MS: u64 = 500;

/// Analysis frame length. Spans resolve to this granularity.
const FRAME_MS: u64 = 10;

/// A non-silent run of the waveform, in integer milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpeechSpan {
    pub start_ms: u64,
    pub end_ms: u64,
}

/// Detects non-silent spans by scanning fixed-length frames against an
/// RMS amplitude threshold.
///
/// A span ends only after at least `min_silence_ms` of consecutive silent
/// frames; shorter pauses stay inside the surrounding span. A trailing
/// span still open at the end of the waveform is closed at the last
/// non-silent frame.
pub fn detect_speech_spans(
    audio: &AudioSegment,
    threshold: f32,
    min_silence_ms: u64,
) -> Vec<SpeechSpan> {
    let frame_len =
        (audio.sample_rate() as u64 * FRAME_MS / 1000) as usize * audio.channels() as usize;
    if frame_len == 0 || audio.is_empty() {
        return Vec::new();
    }

    let mut spans = Vec::new();
    let mut span_start: Option<u64> = None;
    let mut silence_start: Option<u64> = None;

    for (i, frame) in audio.samples().chunks(frame_len).enumerate() {
        let t = i as u64 * FRAME_MS;
        if rms(frame) >= threshold {
            if span_start.is_none() {
                span_start = Some(t);
            }
            silence_start = None;
        } else if let Some(start) = span_start {
            let run_start = *silence_start.get_or_insert(t);
            if t + FRAME_MS - run_start >= min_silence_ms {
                spans.push(SpeechSpan {
                    start_ms: start,
                    end_ms: run_start,
                });
                span_start = None;
                silence_start = None;
            }
        }
    }

    if let Some(start) = span_start {
        let end = silence_start.unwrap_or_else(|| audio.duration_ms());
        if end > start {
            spans.push(SpeechSpan {
                start_ms: start,
                end_ms: end,
            });
        }
    }

    spans
}

fn rms(frame: &[f32]) -> f32 {
    if frame.is_empty() {
        return 0.0;
    }
    let sum_squares: f64 = frame.iter().map(|s| (*s as f64) * (*s as f64)).sum();
    (sum_squares / frame.len() as f64).sqrt() as f32
}
