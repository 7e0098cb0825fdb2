use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Device, SampleFormat, SampleRate, Stream, StreamConfig};
use crossbeam_channel::Sender;

use crate::capture::domain::audio_recorder::AudioRecorder;
use crate::capture::domain::capture_error::CaptureError;
use crate::shared::constants::PREFERRED_SAMPLE_RATE;

/// Microphone recorder over the default cpal input device.
///
/// Captured chunks are downmixed to mono f32 and forwarded over a channel.
/// `cpal::Stream` is not `Send`, so a recorder must be created, driven, and
/// dropped on a single thread.
pub struct CpalRecorder {
    device: Device,
    config: StreamConfig,
    sample_format: SampleFormat,
    stream: Option<Stream>,
}

impl CpalRecorder {
    pub fn new() -> Result<Self, CaptureError> {
        let host = cpal::default_host();
        let device = host
            .default_input_device()
            .ok_or(CaptureError::NoInputDevice)?;
        log::info!(
            "using input device: {}",
            device.name().unwrap_or_else(|_| "unknown".to_string())
        );

        let (config, sample_format) = pick_config(&device)?;
        log::debug!("input config: {config:?} ({sample_format:?})");

        Ok(Self {
            device,
            config,
            sample_format,
            stream: None,
        })
    }
}

impl AudioRecorder for CpalRecorder {
    fn start(&mut self, chunks: Sender<Vec<f32>>) -> Result<(), CaptureError> {
        if self.stream.is_some() {
            return Ok(());
        }
        let stream = match self.sample_format {
            SampleFormat::F32 => self.build_stream::<f32>(chunks)?,
            SampleFormat::I16 => self.build_stream::<i16>(chunks)?,
            SampleFormat::U16 => self.build_stream::<u16>(chunks)?,
            SampleFormat::I32 => self.build_stream::<i32>(chunks)?,
            other => return Err(CaptureError::UnsupportedFormat(format!("{other:?}"))),
        };
        stream.play()?;
        self.stream = Some(stream);
        Ok(())
    }

    fn stop(&mut self) {
        // Dropping the stream stops capture.
        self.stream = None;
    }

    fn is_capturing(&self) -> bool {
        self.stream.is_some()
    }

    fn sample_rate(&self) -> u32 {
        self.config.sample_rate.0
    }
}

impl CpalRecorder {
    fn build_stream<T>(&self, chunks: Sender<Vec<f32>>) -> Result<Stream, CaptureError>
    where
        T: cpal::Sample + cpal::SizedSample + Send + 'static,
        f32: cpal::FromSample<T>,
    {
        let channels = self.config.channels as usize;
        let stream = self.device.build_input_stream(
            &self.config,
            move |data: &[T], _: &cpal::InputCallbackInfo| {
                let mono = downmix(data, channels);
                // The receiver going away means the session ended; nothing to do.
                let _ = chunks.send(mono);
            },
            move |err| {
                log::error!("input stream error: {err}");
            },
            None,
        )?;
        Ok(stream)
    }
}

/// Prefer the 16 kHz capture rate when the device supports it, otherwise fall
/// back to the device default.
fn pick_config(device: &Device) -> Result<(StreamConfig, SampleFormat), CaptureError> {
    if let Ok(ranges) = device.supported_input_configs() {
        for range in ranges {
            if range.min_sample_rate().0 <= PREFERRED_SAMPLE_RATE
                && PREFERRED_SAMPLE_RATE <= range.max_sample_rate().0
            {
                let supported = range.with_sample_rate(SampleRate(PREFERRED_SAMPLE_RATE));
                return Ok((supported.config(), supported.sample_format()));
            }
        }
    }
    let default = device.default_input_config()?;
    Ok((default.config(), default.sample_format()))
}

fn downmix<T>(data: &[T], channels: usize) -> Vec<f32>
where
    T: cpal::Sample,
    f32: cpal::FromSample<T>,
{
    if channels <= 1 {
        return data.iter().map(|&s| cpal::Sample::to_sample(s)).collect();
    }
    data.chunks(channels)
        .map(|frame| {
            let sum: f32 = frame
                .iter()
                .map(|&s| {
                    let v: f32 = cpal::Sample::to_sample(s);
                    v
                })
                .sum();
            sum / channels as f32
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_downmix_mono_passthrough() {
        let out = downmix(&[0.25f32, -0.5], 1);
        assert_eq!(out, vec![0.25, -0.5]);
    }

    #[test]
    fn test_downmix_stereo_averages_frames() {
        let out = downmix(&[1.0f32, 0.0, -1.0, -1.0], 2);
        assert_relative_eq!(out[0], 0.5);
        assert_relative_eq!(out[1], -1.0);
    }

    #[test]
    fn test_downmix_converts_i16_samples() {
        let out = downmix(&[i16::MAX, 0], 1);
        assert!(out[0] > 0.99);
        assert_relative_eq!(out[1], 0.0);
    }
}
