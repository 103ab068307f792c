pub mod audio_capture;
pub mod backend;
pub mod playback;
