pub mod audio;
pub mod pipeline;
pub mod recognition;
pub mod shared;
pub mod transcript;
pub mod video;
