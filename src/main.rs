use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use vocalscript::application::services::{
    AudioNormalizer, AudioUploadService, IngestionCoordinator, TranscriptionCatalog,
};
use vocalscript::infrastructure::audio::{HoundWavEncoder, SymphoniaAudioDecoder};
use vocalscript::infrastructure::observability::{
    TracingConfig, init_tracing, redact_connection_string,
};
use vocalscript::infrastructure::persistence::TranscriptionRepositoryFactory;
use vocalscript::infrastructure::storage::ContentStoreFactory;
use vocalscript::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_process().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(&settings.logging, environment));

    tracing::info!(
        provider = ?settings.storage.provider,
        container = %settings.storage.container,
        connection_string = %settings
            .storage
            .connection_string
            .as_deref()
            .map(redact_connection_string)
            .unwrap_or_default(),
        "Content store configured"
    );

    let content_store =
        ContentStoreFactory::create(&settings.storage).context("Failed to build content store")?;

    let catalog = match TranscriptionRepositoryFactory::create(&settings.document_store) {
        Ok(repository) => TranscriptionCatalog::new(repository),
        Err(e) => TranscriptionCatalog::unconfigured(e),
    };

    let normalizer = Arc::new(AudioNormalizer::new(
        Arc::new(SymphoniaAudioDecoder::mpeg()),
        Arc::new(HoundWavEncoder),
    ));
    let upload_service = Arc::new(AudioUploadService::new(
        normalizer,
        IngestionCoordinator::new(content_store),
    ));

    let state = AppState {
        upload_service,
        catalog: Arc::new(catalog),
    };

    let router = create_router(state, settings.upload.max_body_bytes());

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
