pub mod ffmpeg;
pub mod raw;
