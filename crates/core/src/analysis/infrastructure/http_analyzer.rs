use reqwest::blocking::multipart;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;

use crate::analysis::domain::analysis_result::{AnalysisResult, SpeakingStats};
use crate::analysis::domain::audio_analyzer::AudioAnalyzer;
use crate::capture::domain::audio_payload::AudioPayload;
use crate::shared::constants::{AUDIO_FIELD_NAME, UPLOAD_FILENAME};

/// Upload client for the analysis service.
///
/// Posts the payload as one multipart file field and resolves whatever comes
/// back into an `AnalysisResult` at a single boundary. No timeout is
/// configured; a hung service hangs the in-flight submission.
pub struct HttpAnalyzer {
    endpoint: String,
    client: reqwest::blocking::Client,
}

/// Tagged classification of the raw round-trip outcome, resolved into the
/// single result shape by [`resolve`].
#[derive(Debug)]
enum ServerResponse {
    Json(String),
    TextFallback(String),
    NetworkFailure(String),
}

impl HttpAnalyzer {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::blocking::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn send(&self, payload: &AudioPayload) -> ServerResponse {
        let part = match multipart::Part::bytes(payload.bytes().to_vec())
            .file_name(UPLOAD_FILENAME)
            .mime_str(payload.mime_type())
        {
            Ok(part) => part,
            Err(e) => return ServerResponse::NetworkFailure(e.to_string()),
        };
        let form = multipart::Form::new().part(AUDIO_FIELD_NAME, part);

        match self.client.post(&self.endpoint).multipart(form).send() {
            Ok(response) => {
                let is_json = response
                    .headers()
                    .get(CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .map(|v| v.contains("application/json"))
                    .unwrap_or(false);
                match response.text() {
                    Ok(body) if is_json => ServerResponse::Json(body),
                    Ok(body) => ServerResponse::TextFallback(body),
                    Err(e) => ServerResponse::NetworkFailure(e.to_string()),
                }
            }
            Err(e) => ServerResponse::NetworkFailure(e.to_string()),
        }
    }
}

impl AudioAnalyzer for HttpAnalyzer {
    fn analyze(&self, payload: &AudioPayload) -> AnalysisResult {
        log::info!(
            "submitting {} bytes ({}) to {}",
            payload.len(),
            payload.mime_type(),
            self.endpoint
        );
        let result = resolve(self.send(payload));
        if let AnalysisResult::Failed(msg) = &result {
            log::warn!("submission failed: {msg}");
        }
        result
    }
}

/// A JSON body is either the success shape or `{"error": "..."}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawBody {
    Error { error: String },
    Stats(SpeakingStats),
}

fn resolve(response: ServerResponse) -> AnalysisResult {
    match response {
        ServerResponse::Json(body) => match serde_json::from_str::<RawBody>(&body) {
            Ok(RawBody::Stats(stats)) => AnalysisResult::Analysis(stats),
            Ok(RawBody::Error { error }) => AnalysisResult::Failed(error),
            Err(e) => AnalysisResult::Failed(format!("unexpected analysis response: {e}")),
        },
        ServerResponse::TextFallback(text) => AnalysisResult::Failed(text),
        ServerResponse::NetworkFailure(message) => AnalysisResult::Failed(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::domain::gender::Gender;
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::thread;

    #[test]
    fn test_resolve_json_success() {
        let body = r#"{
            "transcript": ["hello", "world"],
            "genders": ["male", "female"],
            "male_ratio": 0.6,
            "female_ratio": 0.4,
            "male_seconds": "12.0",
            "female_seconds": "8.0",
            "total_seconds": "20.0"
        }"#;
        match resolve(ServerResponse::Json(body.to_string())) {
            AnalysisResult::Analysis(stats) => {
                assert_eq!(stats.transcript.len(), 2);
                assert_eq!(stats.genders, vec![Gender::Male, Gender::Female]);
                assert_eq!(stats.male_percent_label(), "60.00");
                assert_eq!(stats.female_percent_label(), "40.00");
            }
            other => panic!("expected stats, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_json_error_field() {
        let result = resolve(ServerResponse::Json(
            r#"{"error": "No audio file provided"}"#.to_string(),
        ));
        assert_eq!(result, AnalysisResult::Failed("No audio file provided".to_string()));
    }

    #[test]
    fn test_resolve_json_garbage_is_failed_not_panic() {
        let result = resolve(ServerResponse::Json("{not json".to_string()));
        assert!(result.is_failed());
    }

    #[test]
    fn test_resolve_text_fallback_keeps_raw_body() {
        let result = resolve(ServerResponse::TextFallback("Server overloaded".to_string()));
        assert_eq!(result, AnalysisResult::Failed("Server overloaded".to_string()));
    }

    #[test]
    fn test_resolve_network_failure_keeps_message() {
        let result = resolve(ServerResponse::NetworkFailure("Network Error".to_string()));
        assert_eq!(result, AnalysisResult::Failed("Network Error".to_string()));
    }

    // -- end-to-end against a one-shot local stub ---------------------------

    /// Serve a single canned HTTP response on an ephemeral port.
    fn serve_once(content_type: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                drain_request(&mut stream);
                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: {content_type}\r\n\
                     Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{addr}/process")
    }

    /// Read headers plus Content-Length bytes of body so the client finishes
    /// writing the multipart form before we respond.
    fn drain_request(stream: &mut TcpStream) {
        let mut data = Vec::new();
        let mut chunk = [0u8; 4096];
        let header_end = loop {
            let n = match stream.read(&mut chunk) {
                Ok(0) | Err(_) => return,
                Ok(n) => n,
            };
            data.extend_from_slice(&chunk[..n]);
            if let Some(pos) = data.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };
        let headers = String::from_utf8_lossy(&data[..header_end]).to_lowercase();
        let content_length = headers
            .lines()
            .find_map(|l| l.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0);
        let mut remaining = content_length.saturating_sub(data.len() - header_end);
        while remaining > 0 {
            match stream.read(&mut chunk) {
                Ok(0) | Err(_) => break,
                Ok(n) => remaining -= n.min(remaining),
            }
        }
    }

    fn tiny_payload() -> AudioPayload {
        AudioPayload::from_wav_bytes(vec![0u8; 64])
    }

    #[test]
    fn test_analyze_json_response() {
        let endpoint = serve_once(
            "application/json",
            r#"{"transcript": ["hi"], "genders": ["female"], "male_ratio": 0.0, "female_ratio": 1.0}"#,
        );
        let result = HttpAnalyzer::new(endpoint).analyze(&tiny_payload());
        match result {
            AnalysisResult::Analysis(stats) => {
                assert_eq!(stats.transcript_lines(), vec![("hi", Gender::Female)]);
            }
            other => panic!("expected stats, got {other:?}"),
        }
    }

    #[test]
    fn test_analyze_plain_text_response_becomes_error() {
        let endpoint = serve_once("text/plain", "Server overloaded");
        let result = HttpAnalyzer::new(endpoint).analyze(&tiny_payload());
        assert_eq!(result, AnalysisResult::Failed("Server overloaded".to_string()));
    }

    #[test]
    fn test_analyze_connection_refused_resolves_to_failed() {
        // Bind then drop to get a port nothing is listening on.
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let analyzer = HttpAnalyzer::new(format!("http://127.0.0.1:{port}/process"));
        match analyzer.analyze(&tiny_payload()) {
            AnalysisResult::Failed(msg) => assert!(!msg.is_empty()),
            other => panic!("expected failure, got {other:?}"),
        }
    }
}
