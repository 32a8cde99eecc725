use crate::domain::PcmAudio;

/// Encodes PCM into the canonical container.
pub trait AudioEncoder: Send + Sync {
    fn encode(&self, audio: &PcmAudio) -> Result<Vec<u8>, AudioEncoderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioEncoderError {
    #[error("audio encoding failed: {0}")]
    EncodingFailed(String),
}
