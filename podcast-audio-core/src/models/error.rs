use thiserror::Error;

/// Errors raised by the capture side of the pipeline.
///
/// All variants are recoverable: the session stays usable and any retry is
/// a fresh user-initiated action.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CaptureError {
    #[error("microphone acquisition failed: {0}")]
    AcquisitionFailed(String),

    #[error("capture source not available")]
    SourceUnavailable,

    #[error("storage error: {0}")]
    StorageError(String),

    #[error("conversion failed: {0}")]
    ConversionFailed(#[from] ConvertError),
}

/// Errors raised while converting a captured blob to MP3.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("decode failed: {0}")]
    DecodeFailed(String),

    #[error("invalid container format: {0}")]
    InvalidContainerFormat(String),

    #[error("encoding failed: {0}")]
    EncodingFailed(String),

    #[error("unsupported bitrate: {0} kbps")]
    UnsupportedBitrate(u32),
}

/// Errors raised by the playback controller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("no episode at index {0}")]
    UnknownEpisode(usize),

    #[error("play request rejected: {0}")]
    PlayRejected(String),
}
