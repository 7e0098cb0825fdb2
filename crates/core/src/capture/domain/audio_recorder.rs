use crossbeam_channel::Sender;

use super::capture_error::CaptureError;

/// Domain interface over a microphone backend.
///
/// Implementations forward captured mono f32 chunks over the given channel
/// until stopped. A recorder failing to start leaves nothing running and the
/// caller's session state unchanged.
pub trait AudioRecorder {
    fn start(&mut self, chunks: Sender<Vec<f32>>) -> Result<(), CaptureError>;

    /// Stop capturing. No-op when not started.
    fn stop(&mut self);

    fn is_capturing(&self) -> bool;

    /// Sample rate of the chunks this recorder produces.
    fn sample_rate(&self) -> u32;
}
