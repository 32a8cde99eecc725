use std::sync::Arc;

use vocalscript::application::ports::{AudioDecoder, ContentStore};
use vocalscript::application::services::{
    AudioNormalizer, AudioUploadService, IngestError, IngestionCoordinator, NormalizeError,
    UploadError,
};
use vocalscript::domain::{LanguageTag, PcmAudio, UploadedAudio};
use vocalscript::infrastructure::audio::HoundWavEncoder;

use crate::helpers::fakes::{
    RecordingContentStore, RejectingDecoder, StubDecoder, UnavailableContentStore,
    UnreachableDecoder,
};
use crate::helpers::wav::{build_wav, read_wav, tone};

fn service(
    decoder: impl AudioDecoder + 'static,
    store: Arc<dyn ContentStore>,
) -> AudioUploadService {
    let normalizer = Arc::new(AudioNormalizer::new(
        Arc::new(decoder),
        Arc::new(HoundWavEncoder),
    ));
    AudioUploadService::new(normalizer, IngestionCoordinator::new(store))
}

#[tokio::test]
async fn given_wav_upload_when_uploading_then_stored_bytes_equal_input() {
    let store = Arc::new(RecordingContentStore::default());
    let upload_service = service(UnreachableDecoder, store.clone());
    let wav = build_wav(16_000, 1, &tone(16_000, 1, 1_600));
    let upload = UploadedAudio::new(wav.clone(), "audio/wav").with_filename("note.wav");

    let receipt = upload_service
        .upload(upload, LanguageTag::EnUs)
        .await
        .unwrap();

    assert!(!receipt.transcoded);
    assert_eq!(receipt.language, LanguageTag::EnUs);
    assert_eq!(receipt.size_bytes, wav.len() as u64);
    let calls = store.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, receipt.key.as_str());
    assert_eq!(calls[0].1.as_ref(), wav.as_slice());
}

#[tokio::test]
async fn given_mpeg_upload_when_uploading_then_stores_transcoded_wav_under_language_prefix() {
    let store = Arc::new(RecordingContentStore::default());
    let pcm = PcmAudio::new(8_000, 1, tone(8_000, 1, 800));
    let upload_service = service(StubDecoder(pcm.clone()), store.clone());
    let upload = UploadedAudio::new(b"fake mpeg".to_vec(), "audio/mpeg").with_filename("a.mp3");

    let receipt = upload_service
        .upload(upload, LanguageTag::PtPt)
        .await
        .unwrap();

    assert!(receipt.transcoded);
    assert!(receipt.key.as_str().starts_with("pt-PT__"));
    let calls = store.calls();
    assert_eq!(calls.len(), 1);
    let (spec, samples) = read_wav(&calls[0].1);
    assert_eq!(spec.sample_rate, 8_000);
    assert_eq!(samples, pcm.samples);
}

#[tokio::test]
async fn given_malformed_mpeg_when_uploading_then_decode_error_and_nothing_stored() {
    let store = Arc::new(RecordingContentStore::default());
    let upload_service = service(RejectingDecoder, store.clone());
    let upload = UploadedAudio::new(b"garbage".to_vec(), "audio/mpeg");

    let result = upload_service.upload(upload, LanguageTag::EsEs).await;

    assert!(matches!(
        result,
        Err(UploadError::Normalize(NormalizeError::Decode(_)))
    ));
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn given_store_down_when_uploading_then_returns_store_unavailable() {
    let upload_service = service(UnreachableDecoder, Arc::new(UnavailableContentStore));
    let upload = UploadedAudio::new(vec![0u8; 64], "audio/wav");

    let result = upload_service.upload(upload, LanguageTag::PtBr).await;

    assert!(matches!(
        result,
        Err(UploadError::Ingest(IngestError::StoreUnavailable(_)))
    ));
}

#[tokio::test]
async fn given_decoder_panic_when_uploading_then_returns_interrupted() {
    let store = Arc::new(RecordingContentStore::default());
    let upload_service = service(UnreachableDecoder, store.clone());
    let upload = UploadedAudio::new(vec![0u8; 64], "audio/mpeg");

    let result = upload_service.upload(upload, LanguageTag::PtBr).await;

    assert!(matches!(result, Err(UploadError::Interrupted(_))));
    assert!(store.calls().is_empty());
}
