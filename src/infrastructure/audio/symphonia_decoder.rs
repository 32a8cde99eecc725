use std::io::Cursor;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{Decoder, DecoderOptions};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::{FormatOptions, FormatReader};
use symphonia::core::io::MediaSourceStream;
use symphonia::default::codecs::MpaDecoder;
use symphonia::default::formats::MpaReader;

use crate::application::ports::{AudioDecoder, AudioDecoderError};
use crate::domain::PcmAudio;

const ID3V2_MAGIC: &[u8] = b"ID3";
const ID3V2_HEADER_LEN: usize = 10;

/// Full-buffer MPEG audio decoder backed by symphonia. Keeps the source rate and channel layout.
///
/// The MPEG demuxer is used unconditionally; other containers are rejected
/// rather than sniffed.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymphoniaAudioDecoder;

impl SymphoniaAudioDecoder {
    pub fn mpeg() -> Self {
        Self
    }
}

/// Skips a leading ID3v2 tag, including its footer when flagged.
fn strip_id3v2(data: &[u8]) -> &[u8] {
    if data.len() < ID3V2_HEADER_LEN || !data.starts_with(ID3V2_MAGIC) {
        return data;
    }

    let size = data[6..10]
        .iter()
        .fold(0usize, |acc, b| (acc << 7) | (*b & 0x7f) as usize);
    let footer = if data[5] & 0x10 != 0 { ID3V2_HEADER_LEN } else { 0 };
    let end = ID3V2_HEADER_LEN + size + footer;

    data.get(end..).unwrap_or(&[])
}

fn starts_with_frame_sync(data: &[u8]) -> bool {
    matches!(data, [0xff, second, ..] if second & 0xe0 == 0xe0)
}

impl AudioDecoder for SymphoniaAudioDecoder {
    fn decode(&self, data: &[u8]) -> Result<PcmAudio, AudioDecoderError> {
        let audio = strip_id3v2(data);
        if !starts_with_frame_sync(audio) {
            return Err(AudioDecoderError::UnsupportedFormat(
                "payload does not start with an MPEG audio frame".to_string(),
            ));
        }

        let cursor = Cursor::new(audio.to_vec());
        let mss = MediaSourceStream::new(Box::new(cursor), Default::default());

        let mut format = MpaReader::try_new(mss, &FormatOptions::default())
            .map_err(|e| AudioDecoderError::UnsupportedFormat(format!("mpeg stream: {}", e)))?;

        let track = format
            .default_track()
            .ok_or_else(|| AudioDecoderError::DecodingFailed("no audio track found".to_string()))?;
        let track_id = track.id;
        let codec_params = track.codec_params.clone();

        let mut decoder = MpaDecoder::try_new(&codec_params, &DecoderOptions::default())
            .map_err(|e| AudioDecoderError::UnsupportedFormat(format!("codec: {}", e)))?;

        let mut sample_rate = codec_params.sample_rate;
        let mut channels = codec_params.channels.map(|c| c.count() as u16);
        let mut samples: Vec<i16> = Vec::new();
        let mut skipped_frames = 0usize;

        loop {
            let packet = match format.next_packet() {
                Ok(p) => p,
                Err(SymphoniaError::IoError(ref e))
                    if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    break;
                }
                Err(SymphoniaError::ResetRequired) => break,
                Err(e) => {
                    return Err(AudioDecoderError::DecodingFailed(format!("packet: {}", e)));
                }
            };

            if packet.track_id() != track_id {
                continue;
            }

            let decoded = match decoder.decode(&packet) {
                Ok(d) => d,
                Err(SymphoniaError::DecodeError(e)) => {
                    tracing::warn!(error = %e, "Skipping corrupt audio frame");
                    skipped_frames += 1;
                    continue;
                }
                Err(e) => {
                    return Err(AudioDecoderError::DecodingFailed(format!("decode: {}", e)));
                }
            };

            let spec = *decoded.spec();
            let num_frames = decoded.frames();
            if num_frames == 0 {
                continue;
            }

            sample_rate.get_or_insert(spec.rate);
            channels.get_or_insert(spec.channels.count() as u16);

            let mut sample_buf = SampleBuffer::<i16>::new(num_frames as u64, spec);
            sample_buf.copy_interleaved_ref(decoded);
            samples.extend_from_slice(sample_buf.samples());
        }

        if samples.is_empty() {
            return Err(AudioDecoderError::DecodingFailed(
                "no audio samples decoded".to_string(),
            ));
        }

        let sample_rate = sample_rate
            .ok_or_else(|| AudioDecoderError::DecodingFailed("unknown sample rate".to_string()))?;
        let channels = channels.filter(|c| *c > 0).unwrap_or(1);

        let pcm = PcmAudio::new(sample_rate, channels, samples);

        tracing::debug!(
            samples = pcm.samples.len(),
            sample_rate = pcm.sample_rate,
            channels = pcm.channels,
            skipped_frames,
            duration_secs = pcm.duration_secs(),
            "Audio decoded to PCM"
        );

        Ok(pcm)
    }
}
