mod audio_normalizer;
mod audio_upload_service;
mod ingestion_coordinator;
mod transcription_catalog;
mod transcription_export;

pub use audio_normalizer::{AudioNormalizer, NormalizeError};
pub use audio_upload_service::{AudioUploadService, UploadError, UploadReceipt};
pub use ingestion_coordinator::{IngestError, IngestionCoordinator};
pub use transcription_catalog::{CatalogError, TranscriptionCatalog, TranscriptionListing};
pub use transcription_export::{
    EXPORT_CONTENT_TYPE, EXPORT_FILE_NAME, ExportError, TRANSLATION_CONTENT_TYPE, export_csv,
    visible_columns,
};
