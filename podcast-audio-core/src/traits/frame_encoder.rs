use crate::models::error::ConvertError;

/// Per-frame compressed bitstream encoder.
///
/// The bitstream pipeline feeds fixed-size windows of interleaved 16-bit
/// samples in order, then flushes exactly once at end-of-stream.
/// Implementations may buffer internally, so any window (and the flush)
/// may legitimately produce empty output.
pub trait FrameEncoder {
    /// Encode one window of interleaved 16-bit samples.
    fn encode_frame(&mut self, samples: &[i16]) -> Result<Vec<u8>, ConvertError>;

    /// Emit any buffered trailing data.
    fn flush(&mut self) -> Result<Vec<u8>, ConvertError>;
}
