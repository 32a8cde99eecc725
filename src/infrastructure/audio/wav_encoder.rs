use std::io::Cursor;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::application::ports::{AudioEncoder, AudioEncoderError};
use crate::domain::PcmAudio;

const BITS_PER_SAMPLE: u16 = 16;

/// Writes 16-bit integer PCM into an in-memory RIFF/WAV buffer.
#[derive(Debug, Default, Clone, Copy)]
pub struct HoundWavEncoder;

impl AudioEncoder for HoundWavEncoder {
    fn encode(&self, audio: &PcmAudio) -> Result<Vec<u8>, AudioEncoderError> {
        if audio.channels == 0 || audio.sample_rate == 0 {
            return Err(AudioEncoderError::EncodingFailed(format!(
                "invalid layout: {} channels at {} Hz",
                audio.channels, audio.sample_rate
            )));
        }

        let spec = WavSpec {
            channels: audio.channels,
            sample_rate: audio.sample_rate,
            bits_per_sample: BITS_PER_SAMPLE,
            sample_format: SampleFormat::Int,
        };

        let mut cursor = Cursor::new(Vec::with_capacity(44 + audio.samples.len() * 2));
        {
            let mut writer = WavWriter::new(&mut cursor, spec)
                .map_err(|e| AudioEncoderError::EncodingFailed(format!("header: {}", e)))?;

            for &sample in &audio.samples {
                writer
                    .write_sample(sample)
                    .map_err(|e| AudioEncoderError::EncodingFailed(format!("sample: {}", e)))?;
            }

            writer
                .finalize()
                .map_err(|e| AudioEncoderError::EncodingFailed(format!("finalize: {}", e)))?;
        }

        Ok(cursor.into_inner())
    }
}
