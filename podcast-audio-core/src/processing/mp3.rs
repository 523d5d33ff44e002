//! MP3 bitstream encoding over WAV container bytes.
//!
//! The container is parsed, its data region viewed as 16-bit samples and
//! partitioned into fixed windows, and each window is fed in order to a
//! `FrameEncoder`. Concatenating the returned segments yields a complete
//! MP3 stream; segment boundaries carry no meaning to consumers.

use mp3lame_encoder::{Bitrate, Builder, FlushNoGap, InterleavedPcm, MonoPcm, Quality};

use crate::models::error::ConvertError;
use crate::processing::wav::WavInfo;
use crate::traits::frame_encoder::FrameEncoder;

/// Fixed window size fed to the frame encoder, in samples.
pub const SAMPLES_PER_FRAME: usize = 1152;

/// Encode WAV container bytes into an ordered sequence of MP3 segments.
///
/// An unparsable header surfaces as `InvalidContainerFormat`; any frame or
/// flush fault as `EncodingFailed`. A failed run produces no output.
pub fn encode(wav: &[u8], bitrate_kbps: u32) -> Result<Vec<Vec<u8>>, ConvertError> {
    let info = WavInfo::parse(wav)?;
    let samples = info.samples(wav);
    let mut encoder = LameFrameEncoder::new(info.channels, info.sample_rate, bitrate_kbps)?;
    encode_windows(&samples, &mut encoder)
}

/// Drive `encoder` over `samples` in `SAMPLES_PER_FRAME`-sized windows.
///
/// The final window may be shorter. Empty per-window outputs are skipped;
/// a single flush is appended after the last window.
pub(crate) fn encode_windows(
    samples: &[i16],
    encoder: &mut dyn FrameEncoder,
) -> Result<Vec<Vec<u8>>, ConvertError> {
    let mut segments = Vec::new();
    for window in samples.chunks(SAMPLES_PER_FRAME) {
        let segment = encoder.encode_frame(window)?;
        if !segment.is_empty() {
            segments.push(segment);
        }
    }
    let tail = encoder.flush()?;
    if !tail.is_empty() {
        segments.push(tail);
    }
    Ok(segments)
}

/// LAME-backed `FrameEncoder` for mono or interleaved stereo input.
pub struct LameFrameEncoder {
    encoder: mp3lame_encoder::Encoder,
    channels: u16,
}

impl LameFrameEncoder {
    pub fn new(channels: u16, sample_rate: u32, bitrate_kbps: u32) -> Result<Self, ConvertError> {
        let mut builder = Builder::new().ok_or_else(|| {
            ConvertError::EncodingFailed("failed to allocate LAME encoder".into())
        })?;
        builder.set_num_channels(channels as u8).map_err(build_err)?;
        builder.set_sample_rate(sample_rate).map_err(build_err)?;
        builder.set_brate(bitrate(bitrate_kbps)?).map_err(build_err)?;
        builder.set_quality(Quality::Best).map_err(build_err)?;
        let encoder = builder.build().map_err(build_err)?;
        Ok(Self { encoder, channels })
    }
}

impl FrameEncoder for LameFrameEncoder {
    fn encode_frame(&mut self, samples: &[i16]) -> Result<Vec<u8>, ConvertError> {
        let mut out = Vec::new();
        if self.channels == 1 {
            self.encoder
                .encode_to_vec(MonoPcm(samples), &mut out)
                .map_err(encode_err)?;
        } else {
            self.encoder
                .encode_to_vec(InterleavedPcm(samples), &mut out)
                .map_err(encode_err)?;
        }
        Ok(out)
    }

    fn flush(&mut self) -> Result<Vec<u8>, ConvertError> {
        let mut out = Vec::new();
        self.encoder
            .flush_to_vec::<FlushNoGap>(&mut out)
            .map_err(encode_err)?;
        Ok(out)
    }
}

fn build_err(e: mp3lame_encoder::BuildError) -> ConvertError {
    ConvertError::EncodingFailed(e.to_string())
}

fn encode_err(e: mp3lame_encoder::EncodeError) -> ConvertError {
    ConvertError::EncodingFailed(e.to_string())
}

fn bitrate(kbps: u32) -> Result<Bitrate, ConvertError> {
    Ok(match kbps {
        8 => Bitrate::Kbps8,
        16 => Bitrate::Kbps16,
        24 => Bitrate::Kbps24,
        32 => Bitrate::Kbps32,
        40 => Bitrate::Kbps40,
        48 => Bitrate::Kbps48,
        64 => Bitrate::Kbps64,
        80 => Bitrate::Kbps80,
        96 => Bitrate::Kbps96,
        112 => Bitrate::Kbps112,
        128 => Bitrate::Kbps128,
        160 => Bitrate::Kbps160,
        192 => Bitrate::Kbps192,
        224 => Bitrate::Kbps224,
        256 => Bitrate::Kbps256,
        320 => Bitrate::Kbps320,
        other => return Err(ConvertError::UnsupportedBitrate(other)),
    })
}
