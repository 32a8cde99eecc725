use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::{
    EXPORT_CONTENT_TYPE, EXPORT_FILE_NAME, TRANSLATION_CONTENT_TYPE, export_csv, visible_columns,
};
use crate::domain::TranscriptionRecord;
use crate::presentation::state::AppState;

use super::error_response::error_response;

pub const EXPORT_PATH: &str = "/api/v1/transcriptions/export.csv";

#[derive(Serialize)]
pub struct TranscriptionListResponse {
    pub columns: Vec<&'static str>,
    pub records: Vec<TranscriptionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize)]
pub struct TranscriptionView {
    pub filename: Option<String>,
    pub transcription: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation_download: Option<DownloadLink>,
}

#[derive(Serialize)]
pub struct DownloadLink {
    pub label: String,
    pub file_name: String,
    pub url: String,
}

impl From<TranscriptionRecord> for TranscriptionView {
    fn from(record: TranscriptionRecord) -> Self {
        let translation_download = record.translation_download().map(|d| DownloadLink {
            url: translation_url(&d.file_stem),
            label: d.label,
            file_name: d.file_name,
        });

        Self {
            filename: record.filename,
            transcription: record.transcription,
            translation: record.translation,
            translation_download,
        }
    }
}

fn translation_url(file_stem: &str) -> String {
    format!(
        "/api/v1/transcriptions/{}/translation",
        urlencoding::encode(file_stem)
    )
}

fn attachment(file_name: &str) -> String {
    format!("attachment; filename=\"{}\"", file_name.replace(['"', '\\'], "_"))
}

#[tracing::instrument(skip(state))]
pub async fn list_transcriptions_handler(State(state): State<AppState>) -> impl IntoResponse {
    let listing = state.catalog.list().await;
    let exportable = listing.is_exportable();

    let response = TranscriptionListResponse {
        columns: visible_columns(&listing.records),
        export_url: exportable.then(|| EXPORT_PATH.to_string()),
        error: listing.error.map(|e| e.to_string()),
        records: listing.records.into_iter().map(Into::into).collect(),
    };

    (StatusCode::OK, Json(response))
}

#[tracing::instrument(skip(state))]
pub async fn export_transcriptions_handler(State(state): State<AppState>) -> Response {
    let listing = state.catalog.list().await;

    if let Some(e) = listing.error {
        return error_response(StatusCode::SERVICE_UNAVAILABLE, e.to_string());
    }
    if listing.records.is_empty() {
        return error_response(StatusCode::NOT_FOUND, "No transcriptions available");
    }

    match export_csv(&listing.records) {
        Ok(csv) => {
            tracing::info!(records = listing.records.len(), bytes = csv.len(), "CSV exported");
            (
                StatusCode::OK,
                [
                    (
                        header::CONTENT_TYPE,
                        format!("{}; charset=utf-8", EXPORT_CONTENT_TYPE),
                    ),
                    (header::CONTENT_DISPOSITION, attachment(EXPORT_FILE_NAME)),
                ],
                csv,
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "CSV export failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn translation_download_handler(
    State(state): State<AppState>,
    Path(file_stem): Path<String>,
) -> Response {
    let listing = state.catalog.list().await;

    if let Some(e) = listing.error {
        return error_response(StatusCode::SERVICE_UNAVAILABLE, e.to_string());
    }

    let download = listing
        .records
        .iter()
        .filter_map(TranscriptionRecord::translation_download)
        .find(|d| d.file_stem == file_stem);

    match download {
        Some(d) => (
            StatusCode::OK,
            [
                (
                    header::CONTENT_TYPE,
                    format!("{}; charset=utf-8", TRANSLATION_CONTENT_TYPE),
                ),
                (header::CONTENT_DISPOSITION, attachment(&d.file_name)),
            ],
            d.content,
        )
            .into_response(),
        None => error_response(
            StatusCode::NOT_FOUND,
            format!("No translation available for {}", file_stem),
        ),
    }
}
