use bytes::Bytes;

pub const CANONICAL_EXTENSION: &str = "wav";
pub const CANONICAL_CONTENT_TYPE: &str = "audio/wav";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalization {
    Transcoded,
    PassedThrough,
}

/// Audio in the canonical WAV container, ready for storage.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedAudio {
    data: Bytes,
    normalization: Normalization,
}

impl NormalizedAudio {
    pub fn transcoded(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            normalization: Normalization::Transcoded,
        }
    }

    pub fn passed_through(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            normalization: Normalization::PassedThrough,
        }
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn normalization(&self) -> Normalization {
        self.normalization
    }

    pub fn was_transcoded(&self) -> bool {
        self.normalization == Normalization::Transcoded
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
