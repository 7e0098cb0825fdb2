use std::thread;

use crossbeam_channel::{Receiver, Sender};

use myturn_core::capture::domain::audio_payload::AudioPayload;
use myturn_core::capture::domain::audio_recorder::AudioRecorder;
use myturn_core::capture::domain::capture_error::CaptureError;
use myturn_core::capture::domain::recording_session::RecordingSession;
use myturn_core::capture::infrastructure::cpal_recorder::CpalRecorder;
use myturn_core::capture::infrastructure::wav_encoder;

/// Commands sent from the UI to the recording thread.
pub enum RecordCommand {
    Stop,
}

/// Messages sent from the recording thread to the UI.
pub enum RecordEvent {
    /// Seconds of audio accumulated so far.
    Progress(f64),
    /// The finished, WAV-encoded take.
    Finished(AudioPayload),
    Error(String),
}

pub struct RecordHandle {
    pub commands: Sender<RecordCommand>,
    pub events: Receiver<RecordEvent>,
}

/// Spawn a background recording thread.
///
/// The cpal stream is not `Send`, so the recorder lives entirely on the
/// spawned thread; the UI talks to it over channels.
pub fn spawn() -> RecordHandle {
    let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<RecordCommand>();
    let (evt_tx, evt_rx) = crossbeam_channel::unbounded::<RecordEvent>();

    thread::spawn(move || {
        if let Err(e) = run(&cmd_rx, &evt_tx) {
            let _ = evt_tx.send(RecordEvent::Error(e.to_string()));
        }
    });

    RecordHandle {
        commands: cmd_tx,
        events: evt_rx,
    }
}

fn run(
    commands: &Receiver<RecordCommand>,
    events: &Sender<RecordEvent>,
) -> Result<(), CaptureError> {
    let (chunk_tx, chunk_rx) = crossbeam_channel::unbounded::<Vec<f32>>();

    let mut recorder = CpalRecorder::new()?;
    let mut session = RecordingSession::new(recorder.sample_rate());
    session.start();
    recorder.start(chunk_tx)?;
    log::info!("recording started at {} Hz", session.sample_rate());

    loop {
        crossbeam_channel::select! {
            recv(chunk_rx) -> chunk => {
                if let Ok(chunk) = chunk {
                    session.push_chunk(&chunk);
                    let _ = events.send(RecordEvent::Progress(session.recorded_seconds()));
                }
            }
            recv(commands) -> command => match command {
                // A dropped sender means the UI went away; stop either way.
                Ok(RecordCommand::Stop) | Err(_) => break,
            }
        }
    }

    recorder.stop();
    while let Ok(chunk) = chunk_rx.try_recv() {
        session.push_chunk(&chunk);
    }
    session.stop();
    log::info!("recording stopped after {:.1}s", session.recorded_seconds());

    let samples = session.take_samples().unwrap_or_default();
    let payload = wav_encoder::encode_payload(&samples, recorder.sample_rate())?;
    let _ = events.send(RecordEvent::Finished(payload));
    Ok(())
}
