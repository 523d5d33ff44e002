//! Captured-blob → MP3 conversion pipeline.

use crate::models::audio::{AudioResource, MP3_MIME};
use crate::models::config::ConvertConfig;
use crate::models::error::ConvertError;
use crate::processing::decoder::SymphoniaDecoder;
use crate::processing::{mp3, wav};
use crate::traits::media_decoder::MediaDecoder;

/// Orchestrates decode → WAV container → MP3 bitstream.
///
/// Generic over the decoding backend. Sources already tagged `audio/wav`
/// skip the decode step entirely.
pub struct FormatConverter<D: MediaDecoder> {
    decoder: D,
    config: ConvertConfig,
}

impl<D: MediaDecoder> FormatConverter<D> {
    pub fn new(decoder: D, config: ConvertConfig) -> Result<Self, ConvertError> {
        config.validate()?;
        Ok(Self { decoder, config })
    }

    pub fn config(&self) -> ConvertConfig {
        self.config
    }

    /// Convert a captured blob into a single `audio/mp3` resource.
    ///
    /// Ownership of the result transfers to the caller; nothing is
    /// retained here. Every failure propagates — a failed conversion
    /// never yields an empty resource.
    pub fn convert_to_mp3(&self, source: &AudioResource) -> Result<AudioResource, ConvertError> {
        let segments = if source.is_wav() {
            mp3::encode(&source.bytes, self.config.bitrate_kbps)?
        } else {
            let decoded = self.decoder.decode(&source.bytes)?;
            mp3::encode(&wav::encode(&decoded), self.config.bitrate_kbps)?
        };

        let total: usize = segments.iter().map(Vec::len).sum();
        let mut bytes = Vec::with_capacity(total);
        for segment in &segments {
            bytes.extend_from_slice(segment);
        }
        Ok(AudioResource::new(bytes, MP3_MIME))
    }
}

impl Default for FormatConverter<SymphoniaDecoder> {
    fn default() -> Self {
        Self {
            decoder: SymphoniaDecoder,
            config: ConvertConfig::default(),
        }
    }
}
