use crate::models::audio::DecodedAudio;
use crate::models::error::ConvertError;

/// Interface for decoding an in-memory audio blob into raw samples.
///
/// The default implementation is `processing::decoder::SymphoniaDecoder`;
/// hosts with their own decoding facility substitute it here.
pub trait MediaDecoder: Send + Sync {
    /// Decode `bytes` into planar f32 audio.
    ///
    /// Corrupt or unsupported input surfaces as
    /// `ConvertError::DecodeFailed`.
    fn decode(&self, bytes: &[u8]) -> Result<DecodedAudio, ConvertError>;
}
