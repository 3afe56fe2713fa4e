use crate::audio::domain::chunker::ChunkWindow;

use super::segment::TranscriptSegment;

/// Builds ordered transcript segments from per-chunk recognition results.
///
/// Chunks whose text trims to empty contribute no segment. Timing always
/// derives from the chunk window, never from segment count, so dropped
/// chunks do not shift the timestamps of later segments. The segment
/// index is the 1-based position in the emitted sequence.
pub fn assemble(results: &[(ChunkWindow, String)]) -> Vec<TranscriptSegment> {
    let mut segments = Vec::new();
    for (window, text) in results {
        let text = text.trim();
        if text.is_empty() {
            continue;
        }
        segments.push(TranscriptSegment {
            index: segments.len() + 1,
            start_secs: window.start_secs(),
            end_secs: window.end_secs(),
            text: text.to_string(),
        });
    }
    segments
}
