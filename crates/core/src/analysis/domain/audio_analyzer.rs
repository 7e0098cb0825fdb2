use crate::capture::domain::audio_payload::AudioPayload;

use super::analysis_result::AnalysisResult;

/// Domain interface for submitting audio to the analysis service.
///
/// The signature is infallible on purpose: every transport or parse failure
/// folds into `AnalysisResult::Failed`, so callers render one shape and never
/// re-inspect a response.
pub trait AudioAnalyzer: Send {
    fn analyze(&self, payload: &AudioPayload) -> AnalysisResult;
}
