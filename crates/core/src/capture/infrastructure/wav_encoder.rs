use std::io::Cursor;

use crate::capture::domain::audio_payload::AudioPayload;
use crate::capture::domain::capture_error::CaptureError;

/// Encode mono f32 samples as an in-memory 16-bit PCM WAV file.
pub fn encode_wav(samples: &[f32], sample_rate: u32) -> Result<Vec<u8>, CaptureError> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    let mut writer = hound::WavWriter::new(&mut cursor, spec).map_err(CaptureError::Encode)?;
    for &sample in samples {
        let quantized = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
        writer.write_sample(quantized).map_err(CaptureError::Encode)?;
    }
    writer.finalize().map_err(CaptureError::Encode)?;

    Ok(cursor.into_inner())
}

/// Encode a finished take into the payload shape the upload client expects.
pub fn encode_payload(samples: &[f32], sample_rate: u32) -> Result<AudioPayload, CaptureError> {
    Ok(AudioPayload::from_wav_bytes(encode_wav(samples, sample_rate)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(bytes: &[u8]) -> (hound::WavSpec, Vec<i16>) {
        let mut reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
        let spec = reader.spec();
        let samples = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        (spec, samples)
    }

    #[test]
    fn test_encode_roundtrip_spec() {
        let bytes = encode_wav(&[0.0, 0.5, -0.5], 16_000).unwrap();
        let (spec, samples) = decode(&bytes);
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 16_000);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0], 0);
    }

    #[test]
    fn test_encode_clamps_out_of_range_samples() {
        let bytes = encode_wav(&[2.0, -3.0], 16_000).unwrap();
        let (_, samples) = decode(&bytes);
        assert_eq!(samples[0], i16::MAX);
        assert_eq!(samples[1], i16::MIN + 1);
    }

    #[test]
    fn test_encode_empty_take_is_valid_wav() {
        let bytes = encode_wav(&[], 44_100).unwrap();
        let (spec, samples) = decode(&bytes);
        assert_eq!(spec.sample_rate, 44_100);
        assert!(samples.is_empty());
    }

    #[test]
    fn test_encode_payload_wraps_recording() {
        let payload = encode_payload(&[0.1; 160], 16_000).unwrap();
        assert_eq!(payload.mime_type(), "audio/wav");
        assert_eq!(payload.source_name(), "recording.wav");
        assert!(!payload.is_empty());
    }
}
