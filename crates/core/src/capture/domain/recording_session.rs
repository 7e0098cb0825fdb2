/// Lifecycle of one microphone take: `Idle -> Recording -> Stopped -> Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Recording,
    Stopped,
}

/// Accumulates captured sample chunks for the active take.
///
/// The session owns the chunk buffer exclusively; every `start` resets it, so
/// a previous take is discarded the moment a new recording begins.
#[derive(Debug)]
pub struct RecordingSession {
    state: SessionState,
    sample_rate: u32,
    chunks: Vec<Vec<f32>>,
}

impl RecordingSession {
    pub fn new(sample_rate: u32) -> Self {
        Self {
            state: SessionState::Idle,
            sample_rate,
            chunks: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Begin a new take, discarding any previous one.
    pub fn start(&mut self) {
        self.chunks.clear();
        self.state = SessionState::Recording;
    }

    /// Append captured samples. Ignored unless the session is recording.
    pub fn push_chunk(&mut self, samples: &[f32]) {
        if self.state == SessionState::Recording && !samples.is_empty() {
            self.chunks.push(samples.to_vec());
        }
    }

    /// Finalize the take. No-op when not recording.
    pub fn stop(&mut self) {
        if self.state == SessionState::Recording {
            self.state = SessionState::Stopped;
        }
    }

    /// Seconds of audio accumulated so far.
    pub fn recorded_seconds(&self) -> f64 {
        let samples: usize = self.chunks.iter().map(Vec::len).sum();
        samples as f64 / self.sample_rate as f64
    }

    pub fn has_audio(&self) -> bool {
        self.chunks.iter().any(|c| !c.is_empty())
    }

    /// Concatenate the stopped take into one buffer and return to `Idle`.
    ///
    /// Returns `None` unless the session is in `Stopped`.
    pub fn take_samples(&mut self) -> Option<Vec<f32>> {
        if self.state != SessionState::Stopped {
            return None;
        }
        let mut samples = Vec::with_capacity(self.chunks.iter().map(Vec::len).sum());
        for chunk in self.chunks.drain(..) {
            samples.extend_from_slice(&chunk);
        }
        self.state = SessionState::Idle;
        Some(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_initial_state_is_idle() {
        let session = RecordingSession::new(16_000);
        assert_eq!(session.state(), SessionState::Idle);
        assert!(!session.has_audio());
    }

    #[test]
    fn test_start_stop_transitions() {
        let mut session = RecordingSession::new(16_000);
        session.start();
        assert_eq!(session.state(), SessionState::Recording);
        session.stop();
        assert_eq!(session.state(), SessionState::Stopped);
    }

    #[test]
    fn test_stop_when_idle_is_noop() {
        let mut session = RecordingSession::new(16_000);
        session.stop();
        assert_eq!(session.state(), SessionState::Idle);
        session.stop();
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn test_stop_when_already_stopped_is_noop() {
        let mut session = RecordingSession::new(16_000);
        session.start();
        session.push_chunk(&[0.1, 0.2]);
        session.stop();
        session.stop();
        assert_eq!(session.state(), SessionState::Stopped);
        assert_eq!(session.take_samples().unwrap(), vec![0.1, 0.2]);
    }

    #[test]
    fn test_push_ignored_unless_recording() {
        let mut session = RecordingSession::new(16_000);
        session.push_chunk(&[0.5; 4]);
        assert!(!session.has_audio());

        session.start();
        session.push_chunk(&[0.5; 4]);
        session.stop();
        session.push_chunk(&[0.5; 4]);
        assert_eq!(session.take_samples().unwrap().len(), 4);
    }

    #[test]
    fn test_take_samples_concatenates_chunks_in_order() {
        let mut session = RecordingSession::new(16_000);
        session.start();
        session.push_chunk(&[1.0, 2.0]);
        session.push_chunk(&[3.0]);
        session.push_chunk(&[4.0, 5.0]);
        session.stop();
        assert_eq!(session.take_samples().unwrap(), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn test_take_samples_requires_stopped() {
        let mut session = RecordingSession::new(16_000);
        assert!(session.take_samples().is_none());
        session.start();
        session.push_chunk(&[1.0]);
        assert!(session.take_samples().is_none());
        assert_eq!(session.state(), SessionState::Recording);
    }

    #[test]
    fn test_restart_discards_previous_take() {
        let mut session = RecordingSession::new(16_000);
        session.start();
        session.push_chunk(&[1.0; 100]);
        session.stop();

        session.start();
        session.push_chunk(&[2.0; 3]);
        session.stop();
        assert_eq!(session.take_samples().unwrap(), vec![2.0; 3]);
    }

    #[test]
    fn test_recorded_seconds() {
        let mut session = RecordingSession::new(16_000);
        session.start();
        session.push_chunk(&vec![0.0; 16_000]);
        session.push_chunk(&vec![0.0; 8_000]);
        assert_relative_eq!(session.recorded_seconds(), 1.5, epsilon = 1e-9);
    }
}
