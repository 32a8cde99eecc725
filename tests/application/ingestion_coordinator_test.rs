use std::sync::Arc;

use vocalscript::application::services::{IngestError, IngestionCoordinator};
use vocalscript::domain::{LanguageTag, NormalizedAudio};

use crate::helpers::fakes::{RecordingContentStore, UnavailableContentStore};
use crate::helpers::wav::{build_wav, tone};

fn key_matches(raw: &str, language: &str) -> bool {
    let Some(rest) = raw.strip_prefix(&format!("{}__", language)) else {
        return false;
    };
    let Some(token) = rest.strip_suffix(".wav") else {
        return false;
    };
    !token.is_empty()
        && token
            .chars()
            .all(|c| matches!(c, '0'..='9' | 'a'..='f' | '-'))
}

#[tokio::test]
async fn given_wav_tagged_en_us_when_ingesting_then_single_upsert_with_exact_bytes() {
    let store = Arc::new(RecordingContentStore::default());
    let coordinator = IngestionCoordinator::new(store.clone());
    let audio = NormalizedAudio::passed_through(build_wav(16_000, 1, &tone(16_000, 1, 800)));

    let key = coordinator.ingest(&audio, LanguageTag::EnUs).await.unwrap();

    assert!(key_matches(key.as_str(), "en-US"), "key was {}", key);
    let calls = store.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, key.as_str());
    assert_eq!(&calls[0].1, audio.data());
}

#[tokio::test]
async fn given_same_audio_and_language_when_ingesting_twice_then_keys_differ() {
    let store = Arc::new(RecordingContentStore::default());
    let coordinator = IngestionCoordinator::new(store.clone());
    let audio = NormalizedAudio::passed_through(vec![1u8, 2, 3]);

    let first = coordinator.ingest(&audio, LanguageTag::PtPt).await.unwrap();
    let second = coordinator.ingest(&audio, LanguageTag::PtPt).await.unwrap();

    assert_ne!(first, second);
    assert!(first.as_str().starts_with("pt-PT__"));
    assert!(second.as_str().starts_with("pt-PT__"));
    assert_eq!(store.calls().len(), 2);
}

#[tokio::test]
async fn given_unavailable_store_when_ingesting_then_returns_store_unavailable() {
    let coordinator = IngestionCoordinator::new(Arc::new(UnavailableContentStore));
    let audio = NormalizedAudio::passed_through(vec![0u8; 16]);

    let result = coordinator.ingest(&audio, LanguageTag::FrFr).await;

    assert!(matches!(result, Err(IngestError::StoreUnavailable(_))));
}
