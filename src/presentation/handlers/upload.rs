use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::{IngestError, NormalizeError, UploadError};
use crate::domain::{LanguageTag, UploadedAudio};
use crate::presentation::state::AppState;

use super::error_response::error_response;

const LANGUAGE_FIELD: &str = "language";
const FILE_FIELD: &str = "file";
const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

#[derive(Serialize)]
pub struct UploadResponse {
    pub storage_key: String,
    pub language: LanguageTag,
    pub transcoded: bool,
    pub size_bytes: u64,
    pub message: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_audio_handler(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let mut language: Option<String> = None;
    let mut upload: Option<UploadedAudio> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return error_response(e.status(), format!("Failed to read multipart: {}", e));
            }
        };

        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(LANGUAGE_FIELD) => match field.text().await {
                Ok(text) => language = Some(text),
                Err(e) => {
                    return error_response(e.status(), format!("Failed to read language: {}", e));
                }
            },
            Some(FILE_FIELD) => {
                let filename = field.file_name().map(str::to_string);
                let content_type = field
                    .content_type()
                    .unwrap_or(FALLBACK_CONTENT_TYPE)
                    .to_string();

                let data = match field.bytes().await {
                    Ok(d) => d,
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read file bytes");
                        return error_response(e.status(), format!("Failed to read file: {}", e));
                    }
                };

                let mut audio = UploadedAudio::new(data, content_type);
                audio.filename = filename;
                upload = Some(audio);
            }
            other => {
                tracing::debug!(field = ?other, "Ignoring unexpected multipart field");
            }
        }
    }

    let Some(language) = language else {
        return error_response(StatusCode::BAD_REQUEST, "Missing language field");
    };
    let language: LanguageTag = match language.parse() {
        Ok(tag) => tag,
        Err(e) => {
            tracing::warn!(error = %e, "Upload with unknown language");
            return error_response(StatusCode::BAD_REQUEST, e.to_string());
        }
    };

    let Some(upload) = upload else {
        tracing::warn!("Upload request with no file");
        return error_response(StatusCode::BAD_REQUEST, "No file uploaded");
    };

    if !upload.has_accepted_extension() {
        tracing::warn!(filename = ?upload.filename, "Rejected file extension");
        return error_response(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "Only .mp3 and .wav files are accepted",
        );
    }

    tracing::debug!(
        filename = ?upload.filename,
        content_type = %upload.content_type,
        bytes = upload.data.len(),
        "Processing audio upload"
    );

    match state.upload_service.upload(upload, language).await {
        Ok(receipt) => {
            let message = if receipt.transcoded {
                format!("MP3 converted to WAV and stored as '{}'", receipt.key)
            } else {
                format!("File stored as '{}'", receipt.key)
            };

            (
                StatusCode::CREATED,
                Json(UploadResponse {
                    storage_key: receipt.key.to_string(),
                    language: receipt.language,
                    transcoded: receipt.transcoded,
                    size_bytes: receipt.size_bytes,
                    message,
                }),
            )
                .into_response()
        }
        Err(e) => {
            let status = status_for(&e);
            tracing::error!(error = %e, status = %status, "Audio upload failed");
            error_response(status, e.to_string())
        }
    }
}

fn status_for(error: &UploadError) -> StatusCode {
    match error {
        UploadError::Normalize(NormalizeError::Decode(_)) => StatusCode::UNPROCESSABLE_ENTITY,
        UploadError::Normalize(NormalizeError::Encode(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        UploadError::Ingest(IngestError::StoreUnavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
        UploadError::Interrupted(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
