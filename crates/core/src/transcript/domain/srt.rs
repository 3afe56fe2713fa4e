use super::segment::TranscriptSegment;

/// Renders seconds as an SRT timestamp, `HH:MM:SS,mmm`.
pub fn format_timestamp(secs: f64) -> String {
    let total_ms = (secs.max(0.0) * 1000.0).round() as u64;
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let seconds = (total_ms % 60_000) / 1000;
    let millis = total_ms % 1000;
    format!("{hours:02}:{minutes:02}:{seconds:02},{millis:03}")
}

/// Renders segments as an SRT document: numbered, timestamped text blocks
/// separated by blank lines.
pub fn render_srt(segments: &[TranscriptSegment]) -> String {
    let mut out = String::new();
    for segment in segments {
        out.push_str(&format!(
            "{}\n{} --> {}\n{}\n\n",
            segment.index,
            format_timestamp(segment.start_secs),
            format_timestamp(segment.end_secs),
            segment.text
        ));
    }
    out
}

/// Renders segment texts joined by single spaces, no timestamps.
pub fn render_plain(segments: &[TranscriptSegment]) -> String {
    segments
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn segment(index: usize, start: f64, end: f64, text: &str) -> TranscriptSegment {
        TranscriptSegment {
            index,
            start_secs: start,
            end_secs: end,
            text: text.to_string(),
        }
    }

    #[rstest]
    #[case(0.0, "00:00:00,000")]
    #[case(0.001, "00:00:00,001")]
    #[case(1.5, "00:00:01,500")]
    #[case(59.999, "00:00:59,999")]
    #[case(60.0, "00:01:00,000")]
    #[case(3661.25, "01:01:01,250")]
    #[case(36000.0, "10:00:00,000")]
    fn test_format_timestamp(#[case] secs: f64, #[case] expected: &str) {
        assert_eq!(format_timestamp(secs), expected);
    }

    #[test]
    fn test_format_timestamp_is_monotonic() {
        let mut previous = format_timestamp(0.0);
        for i in 1..2000 {
            let current = format_timestamp(i as f64 * 7.3);
            assert!(current >= previous, "{current} < {previous}");
            previous = current;
        }
    }

    #[test]
    fn test_format_timestamp_negative_clamps_to_zero() {
        assert_eq!(format_timestamp(-1.0), "00:00:00,000");
    }

    #[test]
    fn test_render_srt_block_layout() {
        let segments = vec![
            segment(1, 0.0, 30.0, "hello there"),
            segment(2, 60.0, 65.0, "goodbye"),
        ];
        let srt = render_srt(&segments);
        assert_eq!(
            srt,
            "1\n00:00:00,000 --> 00:00:30,000\nhello there\n\n\
             2\n00:01:00,000 --> 00:01:05,000\ngoodbye\n\n"
        );
    }

    #[test]
    fn test_render_srt_empty_sequence_is_empty_string() {
        assert_eq!(render_srt(&[]), "");
    }

    #[test]
    fn test_render_srt_is_deterministic() {
        let segments = vec![segment(1, 0.0, 30.0, "same")];
        assert_eq!(render_srt(&segments), render_srt(&segments));
    }

    #[test]
    fn test_render_plain_joins_with_single_spaces() {
        let segments = vec![
            segment(1, 0.0, 30.0, "first part"),
            segment(2, 30.0, 60.0, "second part"),
        ];
        assert_eq!(render_plain(&segments), "first part second part");
    }

    #[test]
    fn test_render_plain_single_segment_has_no_separator() {
        let segments = vec![segment(1, 0.0, 30.0, "only")];
        assert_eq!(render_plain(&segments), "only");
    }
}
