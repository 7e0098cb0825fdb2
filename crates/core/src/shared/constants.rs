/// Default address of the analysis service.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/process";

/// Multipart field name the analysis service expects.
pub const AUDIO_FIELD_NAME: &str = "audio";

/// Filename sent with every upload, regardless of the payload's origin.
pub const UPLOAD_FILENAME: &str = "recording.wav";

/// MIME type attached to recorded takes.
pub const WAV_MIME_TYPE: &str = "audio/wav";

/// Capture rate requested from the input device when supported.
pub const PREFERRED_SAMPLE_RATE: u32 = 16_000;

pub const AUDIO_EXTENSIONS: &[&str] = &["wav", "mp3", "m4a", "ogg", "flac", "aac", "webm"];
