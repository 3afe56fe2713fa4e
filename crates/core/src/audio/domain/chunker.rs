use std::path::PathBuf;

use super::silence::SpeechSpan;

/// A contiguous time window within a waveform, in integer milliseconds.
///
/// Windows are planned in whole milliseconds so repeated boundary math
/// cannot drift.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkWindow {
    /// 0-based position in the planned sequence.
    pub index: usize,
    pub start_ms: u64,
    pub end_ms: u64,
}

impl ChunkWindow {
    pub fn start_secs(&self) -> f64 {
        self.start_ms as f64 / 1000.0
    }

    pub fn end_secs(&self) -> f64 {
        self.end_ms as f64 / 1000.0
    }

    pub fn duration_ms(&self) -> u64 {
        self.end_ms - self.start_ms
    }
}

/// A chunk materialized as an independent playable WAV file, the unit of
/// work sent to the recognition service.
#[derive(Clone, Debug)]
pub struct AudioChunk {
    pub window: ChunkWindow,
    pub wav_path: PathBuf,
}

/// Partitions `[0, total_ms)` into fixed windows of `chunk_ms`.
///
/// Windows are contiguous and non-overlapping; the final window may be
/// shorter. A waveform shorter than one chunk yields exactly one short
/// window. A zero-length waveform (or zero chunk duration) yields none;
/// no window may be empty.
pub fn plan_windows(total_ms: u64, chunk_ms: u64) -> Vec<ChunkWindow> {
    if total_ms == 0 || chunk_ms == 0 {
        return Vec::new();
    }

    let count = total_ms.div_ceil(chunk_ms) as usize;
    (0..count)
        .map(|index| {
            let start_ms = index as u64 * chunk_ms;
            ChunkWindow {
                index,
                start_ms,
                end_ms: (start_ms + chunk_ms).min(total_ms),
            }
        })
        .collect()
}

/// One window per detected speech span, for sentence-boundary chunking.
pub fn windows_from_spans(spans: &[SpeechSpan]) -> Vec<ChunkWindow> {
    spans
        .iter()
        .filter(|span| span.end_ms > span.start_ms)
        .enumerate()
        .map(|(index, span)| ChunkWindow {
            index,
            start_ms: span.start_ms,
            end_ms: span.end_ms,
        })
        .collect()
}
