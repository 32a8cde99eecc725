mod symphonia_decoder;
mod wav_encoder;

pub use symphonia_decoder::SymphoniaAudioDecoder;
pub use wav_encoder::HoundWavEncoder;
