use std::path::PathBuf;

use thiserror::Error;

/// Failures while acquiring audio, either from the microphone or from a
/// user-supplied file. Surfaced to the user; never fatal to the application.
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("no audio input device available")]
    NoInputDevice,
    #[error("unsupported input sample format: {0}")]
    UnsupportedFormat(String),
    #[error("failed to query input device config: {0}")]
    Config(#[from] cpal::DefaultStreamConfigError),
    #[error("failed to open input stream: {0}")]
    Build(#[from] cpal::BuildStreamError),
    #[error("failed to start input stream: {0}")]
    Play(#[from] cpal::PlayStreamError),
    #[error("failed to read audio file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("not a supported audio file: {0}")]
    NotAudio(PathBuf),
    #[error("failed to encode recording: {0}")]
    Encode(#[source] hound::Error),
}
