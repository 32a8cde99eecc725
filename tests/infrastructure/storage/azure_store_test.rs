use vocalscript::application::ports::ContentStoreError;
use vocalscript::infrastructure::storage::AzureContentStore;

const ACCOUNT_KEY: &str = "c2VjcmV0LWFjY291bnQta2V5LWZvci10ZXN0cw==";

#[test]
fn given_account_key_connection_string_when_building_then_binds_container() {
    let conn = format!(
        "DefaultEndpointsProtocol=https;AccountName=vocalstore;AccountKey={};EndpointSuffix=core.windows.net",
        ACCOUNT_KEY
    );

    let store = AzureContentStore::from_connection_string(&conn, "audios").unwrap();

    assert_eq!(store.container(), "audios");
}

#[test]
fn given_development_storage_connection_string_when_building_then_succeeds() {
    let result = AzureContentStore::from_connection_string("UseDevelopmentStorage=true", "audios");

    assert!(result.is_ok());
}

#[test]
fn given_connection_string_without_key_when_building_then_configuration_error() {
    let result = AzureContentStore::from_connection_string("AccountName=vocalstore", "audios");

    assert!(matches!(result, Err(ContentStoreError::Configuration(_))));
}

#[test]
fn given_malformed_connection_string_when_building_then_configuration_error() {
    let result = AzureContentStore::from_connection_string("not a connection string", "audios");

    assert!(matches!(result, Err(ContentStoreError::Configuration(_))));
}
