mod cosmos_transcription_repository;
mod json_file_transcription_repository;
mod repository_factory;

pub use cosmos_transcription_repository::CosmosTranscriptionRepository;
pub use json_file_transcription_repository::JsonFileTranscriptionRepository;
pub use repository_factory::TranscriptionRepositoryFactory;
