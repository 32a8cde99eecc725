use crate::domain::PcmAudio;

/// Decodes a compressed payload into PCM. Blocking; callers run it off the async runtime.
pub trait AudioDecoder: Send + Sync {
    fn decode(&self, data: &[u8]) -> Result<PcmAudio, AudioDecoderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioDecoderError {
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
}
