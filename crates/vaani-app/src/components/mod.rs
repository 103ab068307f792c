pub mod loading_wave;
pub mod sound_waves;
pub mod translation_card;
pub mod voice_recorder;
