mod audio_decoder;
mod audio_encoder;
mod content_store;
mod repository_error;
mod transcription_repository;

pub use audio_decoder::{AudioDecoder, AudioDecoderError};
pub use audio_encoder::{AudioEncoder, AudioEncoderError};
pub use content_store::{ContentStore, ContentStoreError};
pub use repository_error::{ConfigurationError, RepositoryError};
pub use transcription_repository::TranscriptionRepository;
