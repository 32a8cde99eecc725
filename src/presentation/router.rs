use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    EXPORT_PATH, export_transcriptions_handler, health_handler, languages_handler,
    list_transcriptions_handler, translation_download_handler, upload_audio_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState, max_upload_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/languages", get(languages_handler))
        .route(
            "/api/v1/audio",
            post(upload_audio_handler).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/api/v1/transcriptions", get(list_transcriptions_handler))
        .route(EXPORT_PATH, get(export_transcriptions_handler))
        .route(
            "/api/v1/transcriptions/{file_stem}/translation",
            get(translation_download_handler),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
