//! WAV container encoding and header parsing.
//!
//! Produces the canonical uncompressed container the bitstream encoder
//! consumes: a 44-byte RIFF header followed by interleaved little-endian
//! 16-bit PCM.

use crate::models::audio::DecodedAudio;
use crate::models::error::ConvertError;

/// Size of the standard WAV RIFF header in bytes.
pub const WAV_HEADER_SIZE: usize = 44;

/// Bit depth of all samples this module writes.
pub const BIT_DEPTH: u16 = 16;

/// Serialize decoded audio into a complete WAV container.
///
/// Samples are interleaved channel-major within each frame, clamped to
/// `[-1.0, 1.0]` and scaled by `i16::MAX`. Output length is always exactly
/// `44 + frames × channels × 2`; deterministic for identical input.
///
/// Header layout:
/// ```text
/// [0-3]    "RIFF"
/// [4-7]    36 + data_size
/// [8-11]   "WAVE"
/// [12-15]  "fmt "
/// [16-19]  16 (PCM format chunk size)
/// [20-21]  1 (PCM format code)
/// [22-23]  channels
/// [24-27]  sample_rate
/// [28-31]  byte_rate = sample_rate * channels * 2
/// [32-33]  block_align = channels * 2
/// [34-35]  16 (bit depth)
/// [36-39]  "data"
/// [40-43]  data_size
/// ```
pub fn encode(decoded: &DecodedAudio) -> Vec<u8> {
    let channels = decoded.channel_count();
    let frame_count = decoded.frame_count();
    let data_size = (frame_count * channels as usize * 2) as u32;

    let mut out = Vec::with_capacity(WAV_HEADER_SIZE + data_size as usize);
    out.extend_from_slice(&header(decoded.sample_rate(), channels, data_size));

    for frame in 0..frame_count {
        for ch in 0..channels as usize {
            let sample = decoded.channel(ch)[frame].clamp(-1.0, 1.0);
            let quantized = (sample * i16::MAX as f32) as i16;
            out.extend_from_slice(&quantized.to_le_bytes());
        }
    }
    out
}

fn header(sample_rate: u32, channels: u16, data_size: u32) -> [u8; WAV_HEADER_SIZE] {
    let byte_rate = sample_rate * channels as u32 * 2;
    let block_align = channels * 2;
    let chunk_size = 36 + data_size;

    let mut header = [0u8; WAV_HEADER_SIZE];

    // RIFF chunk descriptor
    header[0..4].copy_from_slice(b"RIFF");
    header[4..8].copy_from_slice(&chunk_size.to_le_bytes());
    header[8..12].copy_from_slice(b"WAVE");

    // fmt sub-chunk
    header[12..16].copy_from_slice(b"fmt ");
    header[16..20].copy_from_slice(&16u32.to_le_bytes());
    header[20..22].copy_from_slice(&1u16.to_le_bytes());
    header[22..24].copy_from_slice(&channels.to_le_bytes());
    header[24..28].copy_from_slice(&sample_rate.to_le_bytes());
    header[28..32].copy_from_slice(&byte_rate.to_le_bytes());
    header[32..34].copy_from_slice(&block_align.to_le_bytes());
    header[34..36].copy_from_slice(&BIT_DEPTH.to_le_bytes());

    // data sub-chunk
    header[36..40].copy_from_slice(b"data");
    header[40..44].copy_from_slice(&data_size.to_le_bytes());

    header
}

/// Container facts the bitstream encoder needs: format metadata plus the
/// location of the sample data region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavInfo {
    pub channels: u16,
    pub sample_rate: u32,
    pub data_offset: usize,
    pub data_len: usize,
}

impl WavInfo {
    /// Parse container bytes, scanning RIFF sub-chunks for `fmt ` and
    /// `data`.
    ///
    /// Wrong magic ids, a truncated buffer, or a non-PCM format code all
    /// surface as `ConvertError::InvalidContainerFormat`.
    pub fn parse(bytes: &[u8]) -> Result<Self, ConvertError> {
        if bytes.len() < WAV_HEADER_SIZE {
            return Err(ConvertError::InvalidContainerFormat(
                "container shorter than a WAV header".into(),
            ));
        }
        if &bytes[0..4] != b"RIFF" || &bytes[8..12] != b"WAVE" {
            return Err(ConvertError::InvalidContainerFormat(
                "missing RIFF/WAVE magic".into(),
            ));
        }

        let mut format: Option<(u16, u32)> = None;
        let mut offset = 12;
        while offset + 8 <= bytes.len() {
            let id = &bytes[offset..offset + 4];
            let size = u32::from_le_bytes([
                bytes[offset + 4],
                bytes[offset + 5],
                bytes[offset + 6],
                bytes[offset + 7],
            ]) as usize;
            let body = offset + 8;

            match id {
                b"fmt " => {
                    if size < 16 || body + 16 > bytes.len() {
                        return Err(ConvertError::InvalidContainerFormat(
                            "truncated fmt chunk".into(),
                        ));
                    }
                    let format_code = u16::from_le_bytes([bytes[body], bytes[body + 1]]);
                    if format_code != 1 {
                        return Err(ConvertError::InvalidContainerFormat(format!(
                            "unsupported format code {}",
                            format_code
                        )));
                    }
                    let bit_depth = u16::from_le_bytes([bytes[body + 14], bytes[body + 15]]);
                    if bit_depth != BIT_DEPTH {
                        return Err(ConvertError::InvalidContainerFormat(format!(
                            "unsupported bit depth {}",
                            bit_depth
                        )));
                    }
                    let channels = u16::from_le_bytes([bytes[body + 2], bytes[body + 3]]);
                    let sample_rate = u32::from_le_bytes([
                        bytes[body + 4],
                        bytes[body + 5],
                        bytes[body + 6],
                        bytes[body + 7],
                    ]);
                    format = Some((channels, sample_rate));
                }
                b"data" => {
                    let Some((channels, sample_rate)) = format else {
                        return Err(ConvertError::InvalidContainerFormat(
                            "data chunk before fmt chunk".into(),
                        ));
                    };
                    if body + size > bytes.len() {
                        return Err(ConvertError::InvalidContainerFormat(
                            "data chunk exceeds container".into(),
                        ));
                    }
                    return Ok(Self {
                        channels,
                        sample_rate,
                        data_offset: body,
                        data_len: size,
                    });
                }
                _ => {}
            }

            // RIFF pads odd-sized chunks to even boundaries.
            offset = body + size + (size & 1);
        }

        Err(ConvertError::InvalidContainerFormat(
            "missing data chunk".into(),
        ))
    }

    /// Copy the data region out as little-endian i16 samples.
    pub fn samples(&self, bytes: &[u8]) -> Vec<i16> {
        bytes[self.data_offset..self.data_offset + self.data_len]
            .chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
            .collect()
    }
}
