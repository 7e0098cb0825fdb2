use std::io::Cursor;
use std::thread;

/// Play a recorded take once on a detached thread.
///
/// rodio's output stream is not `Send`, so the stream lives and dies on the
/// spawned thread. Playback failure is logged, never surfaced as an error.
pub fn play(wav_bytes: Vec<u8>) {
    thread::spawn(move || {
        if let Err(e) = play_blocking(wav_bytes) {
            log::warn!("playback failed: {e}");
        }
    });
}

fn play_blocking(bytes: Vec<u8>) -> Result<(), Box<dyn std::error::Error>> {
    let (_stream, handle) = rodio::OutputStream::try_default()?;
    let sink = rodio::Sink::try_new(&handle)?;
    sink.append(rodio::Decoder::new(Cursor::new(bytes))?);
    sink.sleep_until_end();
    Ok(())
}
