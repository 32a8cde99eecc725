use vocalscript::application::ports::{AudioEncoder, AudioEncoderError};
use vocalscript::domain::PcmAudio;
use vocalscript::infrastructure::audio::HoundWavEncoder;

use crate::helpers::wav::{read_wav, tone};

#[test]
fn given_mono_pcm_when_encoding_then_riff_wav_with_same_samples() {
    let pcm = PcmAudio::new(16_000, 1, tone(16_000, 1, 1_000));

    let wav = HoundWavEncoder.encode(&pcm).unwrap();

    assert_eq!(&wav[0..4], b"RIFF");
    assert_eq!(&wav[8..12], b"WAVE");
    let (spec, samples) = read_wav(&wav);
    assert_eq!(spec.sample_rate, 16_000);
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(samples, pcm.samples);
}

#[test]
fn given_stereo_pcm_when_encoding_then_size_is_header_plus_two_bytes_per_sample() {
    let pcm = PcmAudio::new(48_000, 2, tone(48_000, 2, 480));

    let wav = HoundWavEncoder.encode(&pcm).unwrap();

    assert_eq!(wav.len(), 44 + pcm.samples.len() * 2);
}

#[test]
fn given_zero_channels_when_encoding_then_returns_error() {
    let pcm = PcmAudio::new(16_000, 0, vec![]);

    let result = HoundWavEncoder.encode(&pcm);

    assert!(matches!(result, Err(AudioEncoderError::EncodingFailed(_))));
}
