use vocalscript::infrastructure::persistence::TranscriptionRepositoryFactory;
use vocalscript::presentation::config::{DocumentStoreProviderSetting, DocumentStoreSettings};

fn cosmos_settings() -> DocumentStoreSettings {
    DocumentStoreSettings {
        provider: DocumentStoreProviderSetting::Cosmos,
        connection_string: Some(
            "AccountEndpoint=https://vocal.documents.azure.com:443/;AccountKey=c2VjcmV0LWtleQ==;"
                .to_string(),
        ),
        database: Some("vocal".to_string()),
        collection: Some("transcriptions".to_string()),
        local_path: None,
    }
}

#[test]
fn given_complete_cosmos_settings_when_creating_then_succeeds() {
    assert!(TranscriptionRepositoryFactory::create(&cosmos_settings()).is_ok());
}

#[test]
fn given_cosmos_settings_missing_database_and_collection_when_creating_then_error_names_both() {
    let mut settings = cosmos_settings();
    settings.database = None;
    settings.collection = Some("  ".to_string());

    let error = TranscriptionRepositoryFactory::create(&settings)
        .err()
        .unwrap();

    assert!(error.0.contains("database"), "{}", error);
    assert!(error.0.contains("collection"), "{}", error);
    assert!(!error.0.contains("connection_string"), "{}", error);
}

#[test]
fn given_no_cosmos_settings_when_creating_then_configuration_error() {
    let settings = DocumentStoreSettings {
        provider: DocumentStoreProviderSetting::Cosmos,
        connection_string: None,
        database: None,
        collection: None,
        local_path: None,
    };

    assert!(TranscriptionRepositoryFactory::create(&settings).is_err());
}

#[test]
fn given_local_provider_without_path_when_creating_then_configuration_error() {
    let settings = DocumentStoreSettings {
        provider: DocumentStoreProviderSetting::Local,
        connection_string: None,
        database: None,
        collection: None,
        local_path: None,
    };

    assert!(TranscriptionRepositoryFactory::create(&settings).is_err());
}

#[test]
fn given_local_provider_with_path_when_creating_then_succeeds() {
    let settings = DocumentStoreSettings {
        provider: DocumentStoreProviderSetting::Local,
        connection_string: None,
        database: None,
        collection: None,
        local_path: Some("./transcriptions.json".to_string()),
    };

    assert!(TranscriptionRepositoryFactory::create(&settings).is_ok());
}
