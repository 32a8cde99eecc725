mod error_response;
mod health;
mod languages;
mod transcriptions;
mod upload;

pub use error_response::ErrorResponse;
pub use health::health_handler;
pub use languages::languages_handler;
pub use transcriptions::{
    EXPORT_PATH, export_transcriptions_handler, list_transcriptions_handler,
    translation_download_handler,
};
pub use upload::upload_audio_handler;
