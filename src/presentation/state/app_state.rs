use std::sync::Arc;

use crate::application::services::{AudioUploadService, TranscriptionCatalog};

#[derive(Clone)]
pub struct AppState {
    pub upload_service: Arc<AudioUploadService>,
    pub catalog: Arc<TranscriptionCatalog>,
}
