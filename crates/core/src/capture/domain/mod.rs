pub mod audio_payload;
pub mod audio_recorder;
pub mod capture_error;
pub mod recording_session;
