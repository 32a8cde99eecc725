use std::collections::HashSet;

use vocalscript::domain::{LanguageTag, StorageKey, StorageKeyError};

fn is_lower_hex_uuid(token: &str) -> bool {
    token.len() == 36
        && token
            .chars()
            .all(|c| matches!(c, '0'..='9' | 'a'..='f' | '-'))
}

#[test]
fn given_language_when_generating_key_then_format_is_language_separator_uuid_wav() {
    let key = StorageKey::generate(LanguageTag::EnUs);

    let raw = key.as_str();
    assert!(raw.starts_with("en-US__"));
    assert!(raw.ends_with(".wav"));
    assert!(is_lower_hex_uuid(key.token()), "token was {}", key.token());
}

#[test]
fn given_same_language_when_generating_many_keys_then_none_collide() {
    let keys: HashSet<String> = (0..1_000)
        .map(|_| StorageKey::generate(LanguageTag::PtPt).to_string())
        .collect();

    assert_eq!(keys.len(), 1_000);
}

#[test]
fn given_generated_key_when_reading_language_then_matches_input() {
    for tag in LanguageTag::ALL {
        let key = StorageKey::generate(tag);
        assert_eq!(key.language(), tag);
        assert!(key.as_str().starts_with(&format!("{}__", tag.code())));
    }
}

#[test]
fn given_key_string_when_parsing_then_recovers_language_and_token() {
    let key = StorageKey::parse("fr-FR__0f8fad5b-d9cb-469f-a165-70867728950e.wav").unwrap();

    assert_eq!(key.language(), LanguageTag::FrFr);
    assert_eq!(key.token(), "0f8fad5b-d9cb-469f-a165-70867728950e");
}

#[test]
fn given_generated_key_when_parsed_back_then_equals_original() {
    let key = StorageKey::generate(LanguageTag::PtBr);

    assert_eq!(StorageKey::parse(key.as_str()).unwrap(), key);
}

#[test]
fn given_key_without_separator_when_parsing_then_fails() {
    assert!(matches!(
        StorageKey::parse("en-US-abc.wav"),
        Err(StorageKeyError::MissingSeparator(_))
    ));
}

#[test]
fn given_key_with_unknown_language_when_parsing_then_fails() {
    assert!(matches!(
        StorageKey::parse("de-DE__abc.wav"),
        Err(StorageKeyError::UnknownLanguage(_))
    ));
}

#[test]
fn given_key_with_mp3_extension_when_parsing_then_fails() {
    assert!(matches!(
        StorageKey::parse("en-US__abc.mp3"),
        Err(StorageKeyError::UnexpectedExtension(_))
    ));
}

#[test]
fn given_key_with_empty_token_when_parsing_then_fails() {
    assert!(matches!(
        StorageKey::parse("en-US__.wav"),
        Err(StorageKeyError::EmptyToken(_))
    ));
}

#[test]
fn given_storage_key_when_displayed_then_matches_as_str() {
    let key = StorageKey::generate(LanguageTag::EsEs);

    assert_eq!(format!("{}", key), key.as_str());
}
