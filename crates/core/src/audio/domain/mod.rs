pub mod audio_segment;
pub mod chunker;
pub mod silence;
