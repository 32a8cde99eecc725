use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{AudioDecoder, AudioDecoderError, AudioEncoder, AudioEncoderError};
use crate::domain::{DeclaredFormat, NormalizedAudio};

/// Turns an upload into canonical WAV bytes.
///
/// The branch is taken from the declared content type alone. Payloads not
/// declared as MPEG are stored as-is without checking that they really are
/// WAV.
pub struct AudioNormalizer {
    decoder: Arc<dyn AudioDecoder>,
    encoder: Arc<dyn AudioEncoder>,
}

impl AudioNormalizer {
    pub fn new(decoder: Arc<dyn AudioDecoder>, encoder: Arc<dyn AudioEncoder>) -> Self {
        Self { decoder, encoder }
    }

    pub fn normalize(
        &self,
        payload: &Bytes,
        declared_type: &str,
    ) -> Result<NormalizedAudio, NormalizeError> {
        match DeclaredFormat::from_mime(declared_type) {
            DeclaredFormat::Canonical => {
                tracing::debug!(
                    bytes = payload.len(),
                    content_type = %declared_type,
                    "Payload declared canonical, passing through"
                );
                Ok(NormalizedAudio::passed_through(payload.clone()))
            }
            DeclaredFormat::Mpeg => {
                let pcm = self.decoder.decode(payload)?;
                let wav = self.encoder.encode(&pcm)?;

                tracing::info!(
                    input_bytes = payload.len(),
                    output_bytes = wav.len(),
                    sample_rate = pcm.sample_rate,
                    channels = pcm.channels,
                    duration_secs = pcm.duration_secs(),
                    "Transcoded MPEG audio to WAV"
                );

                Ok(NormalizedAudio::transcoded(wav))
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("decode: {0}")]
    Decode(#[from] AudioDecoderError),
    #[error("encode: {0}")]
    Encode(#[from] AudioEncoderError),
}
