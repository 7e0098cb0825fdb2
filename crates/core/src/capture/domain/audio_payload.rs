use std::fs;
use std::path::Path;

use crate::shared::constants::{UPLOAD_FILENAME, WAV_MIME_TYPE};

use super::capture_error::CaptureError;

/// Binary audio plus the metadata needed to submit it for analysis.
///
/// Immutable once constructed; the upload flow consumes it whether the
/// submission succeeds or fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioPayload {
    bytes: Vec<u8>,
    mime_type: String,
    source_name: String,
}

impl AudioPayload {
    /// Wrap an in-memory WAV recording produced by the capture session.
    pub fn from_wav_bytes(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            mime_type: WAV_MIME_TYPE.to_string(),
            source_name: UPLOAD_FILENAME.to_string(),
        }
    }

    /// Build a payload from a user-selected or dropped file.
    ///
    /// The MIME type is guessed from the extension; files without a known
    /// audio extension are rejected.
    pub fn from_file(path: &Path) -> Result<Self, CaptureError> {
        let mime = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| mime_for_extension(&ext.to_lowercase()))
            .ok_or_else(|| CaptureError::NotAudio(path.to_path_buf()))?;

        let bytes = fs::read(path).map_err(|source| CaptureError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let source_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| UPLOAD_FILENAME.to_string());

        Ok(Self {
            bytes,
            mime_type: mime.to_string(),
            source_name,
        })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Name of the original source, for display only. Uploads always use the
    /// fixed filename the service expects.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

fn mime_for_extension(ext: &str) -> Option<&'static str> {
    match ext {
        "wav" => Some("audio/wav"),
        "mp3" => Some("audio/mpeg"),
        "m4a" => Some("audio/mp4"),
        "ogg" => Some("audio/ogg"),
        "flac" => Some("audio/flac"),
        "aac" => Some("audio/aac"),
        "webm" => Some("audio/webm"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_from_wav_bytes_uses_fixed_name_and_mime() {
        let payload = AudioPayload::from_wav_bytes(vec![1, 2, 3]);
        assert_eq!(payload.mime_type(), "audio/wav");
        assert_eq!(payload.source_name(), UPLOAD_FILENAME);
        assert_eq!(payload.bytes(), &[1, 2, 3]);
    }

    #[test]
    fn test_from_file_reads_bytes_and_guesses_mime() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("meeting.mp3");
        fs::write(&path, b"not really mp3").unwrap();

        let payload = AudioPayload::from_file(&path).unwrap();
        assert_eq!(payload.mime_type(), "audio/mpeg");
        assert_eq!(payload.source_name(), "meeting.mp3");
        assert_eq!(payload.len(), 14);
    }

    #[test]
    fn test_from_file_rejects_unknown_extension() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("notes.txt");
        fs::write(&path, b"hello").unwrap();

        let result = AudioPayload::from_file(&path);
        assert!(matches!(result, Err(CaptureError::NotAudio(_))));
    }

    #[test]
    fn test_from_file_missing_file_is_read_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing.wav");

        let result = AudioPayload::from_file(&path);
        assert!(matches!(result, Err(CaptureError::Read { .. })));
    }

    #[test]
    fn test_extension_case_insensitive() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("TAKE.WAV");
        fs::write(&path, b"RIFF").unwrap();

        let payload = AudioPayload::from_file(&path).unwrap();
        assert_eq!(payload.mime_type(), "audio/wav");
    }
}
