use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

const ENV_PREFIX: &str = "APP";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub document_store: DocumentStoreSettings,
    pub upload: UploadSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub provider: StorageProviderSetting,
    pub connection_string: Option<String>,
    pub container: String,
    pub local_path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageProviderSetting {
    Azure,
    Local,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentStoreSettings {
    pub provider: DocumentStoreProviderSetting,
    pub connection_string: Option<String>,
    pub database: Option<String>,
    pub collection: Option<String>,
    pub local_path: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStoreProviderSetting {
    Cosmos,
    Local,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    pub max_file_size_mb: usize,
}

impl UploadSettings {
    pub fn max_body_bytes(&self) -> usize {
        self.max_file_size_mb.saturating_mul(1024 * 1024)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

/// Variable names the original deployment scripts export.
#[derive(Debug, Clone, Default)]
pub struct LegacyVariables {
    pub storage_connection_string: Option<String>,
    pub storage_container: Option<String>,
    pub cosmos_connection_string: Option<String>,
    pub cosmos_database: Option<String>,
    pub cosmos_collection: Option<String>,
}

impl LegacyVariables {
    pub fn from_process() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());
        Self {
            storage_connection_string: var("AZURE_STORAGE_CONNECTION_STRING"),
            storage_container: var("AZURE_CONTAINER_NAME"),
            cosmos_connection_string: var("COSMOS_DB_CONN_STRING"),
            cosmos_database: var("COSMOS_DB_NAME"),
            cosmos_collection: var("COSMOS_DB_CONTAINER_NAME"),
        }
    }
}

impl Settings {
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::build(environment, &LegacyVariables::from_process())
    }

    /// Defaults, then `appsettings.{Environment}`, then `APP_*` variables, then legacy variables.
    pub fn build(environment: Environment, legacy: &LegacyVariables) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("storage.provider", "azure")?
            .set_default("storage.container", "audios")?
            .set_default("storage.local_path", "./data/blobs")?
            .set_default("document_store.provider", "cosmos")?
            .set_default("upload.max_file_size_mb", 50)?
            .set_default("logging.level", "info,vocalscript=debug,tower_http=debug")?
            .set_default("logging.enable_json", false)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .set_override_option(
                "storage.connection_string",
                legacy.storage_connection_string.clone(),
            )?
            .set_override_option("storage.container", legacy.storage_container.clone())?
            .set_override_option(
                "document_store.connection_string",
                legacy.cosmos_connection_string.clone(),
            )?
            .set_override_option("document_store.database", legacy.cosmos_database.clone())?
            .set_override_option(
                "document_store.collection",
                legacy.cosmos_collection.clone(),
            )?
            .build()?
            .try_deserialize()
    }
}
