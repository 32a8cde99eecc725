use axum::Json;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::LanguageTag;

#[derive(Serialize)]
pub struct LanguageOption {
    pub code: &'static str,
    pub label: &'static str,
}

pub async fn languages_handler() -> impl IntoResponse {
    let options: Vec<LanguageOption> = LanguageTag::ALL
        .iter()
        .map(|tag| LanguageOption {
            code: tag.code(),
            label: tag.label(),
        })
        .collect();
    Json(options)
}
