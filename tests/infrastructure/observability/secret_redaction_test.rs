use vocalscript::infrastructure::observability::redact_connection_string;

#[test]
fn given_account_key_when_redacting_then_value_is_masked() {
    let raw = "DefaultEndpointsProtocol=https;AccountName=vocal;AccountKey=c2VjcmV0;EndpointSuffix=core.windows.net";

    let redacted = redact_connection_string(raw);

    assert_eq!(
        redacted,
        "DefaultEndpointsProtocol=https;AccountName=vocal;AccountKey=[REDACTED];EndpointSuffix=core.windows.net"
    );
}

#[test]
fn given_sas_signature_in_any_case_when_redacting_then_value_is_masked() {
    let redacted = redact_connection_string("BlobEndpoint=https://x;sharedaccesssignature=sv=2020&sig=abc");

    assert!(!redacted.contains("sig=abc"));
    assert!(redacted.contains("sharedaccesssignature=[REDACTED]"));
}

#[test]
fn given_no_secrets_when_redacting_then_unchanged() {
    assert_eq!(
        redact_connection_string("UseDevelopmentStorage=true"),
        "UseDevelopmentStorage=true"
    );
}
