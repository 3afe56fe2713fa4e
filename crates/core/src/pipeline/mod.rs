pub mod process_directory_use_case;
pub mod transcribe_video_use_case;
pub mod video_transcriber;
