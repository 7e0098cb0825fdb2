pub mod analysis_result;
pub mod audio_analyzer;
pub mod gender;
