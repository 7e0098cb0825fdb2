pub mod playback;
pub mod record_worker;
pub mod upload_worker;
