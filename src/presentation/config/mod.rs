mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    DocumentStoreProviderSetting, DocumentStoreSettings, LegacyVariables, LoggingSettings,
    ServerSettings, Settings, StorageProviderSetting, StorageSettings, UploadSettings,
};
