use std::thread;

use crossbeam_channel::Receiver;

use myturn_core::analysis::domain::analysis_result::AnalysisResult;
use myturn_core::analysis::domain::audio_analyzer::AudioAnalyzer;
use myturn_core::analysis::infrastructure::http_analyzer::HttpAnalyzer;
use myturn_core::capture::domain::audio_payload::AudioPayload;

/// Message sent from the upload thread to the UI.
///
/// There is no error variant: failures are already folded into the result,
/// and both outcomes route to the Result view.
pub enum UploadMessage {
    Complete(AnalysisResult),
}

/// Spawn a background upload. The blocking round-trip runs off the UI
/// thread; the caller disables further submissions until completion.
pub fn spawn(endpoint: String, payload: AudioPayload) -> Receiver<UploadMessage> {
    let (tx, rx) = crossbeam_channel::unbounded::<UploadMessage>();

    thread::spawn(move || {
        let analyzer = HttpAnalyzer::new(endpoint);
        let result = analyzer.analyze(&payload);
        let _ = tx.send(UploadMessage::Complete(result));
    });

    rx
}
