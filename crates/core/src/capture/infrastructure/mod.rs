pub mod cpal_recorder;
pub mod wav_encoder;
