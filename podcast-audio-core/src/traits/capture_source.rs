use std::sync::Arc;

use crate::models::error::CaptureError;

/// Callback invoked when the capture source emits a data chunk.
///
/// Chunks are opaque encoded bytes in the source's container format. The
/// callback may fire on a dedicated capture thread — keep processing
/// minimal.
pub type ChunkSink = Arc<dyn Fn(&[u8]) + Send + Sync + 'static>;

/// Interface for host microphone capture backends.
///
/// Implementations wrap whatever the platform provides (a browser
/// MediaRecorder, a cpal input stream, ...) and emit encoded chunks via
/// the sink until stopped.
pub trait CaptureSource: Send + Sync {
    /// Whether a microphone is currently available.
    fn is_available(&self) -> bool;

    /// Acquire the microphone and start emitting chunks via `sink`.
    ///
    /// A denied or unavailable microphone surfaces as
    /// `CaptureError::AcquisitionFailed`.
    fn start(&mut self, sink: ChunkSink) -> Result<(), CaptureError>;

    /// Stop capturing and release the underlying stream and its tracks.
    fn stop(&mut self) -> Result<(), CaptureError>;

    /// MIME type of the emitted chunks (e.g. `audio/webm`).
    fn mime_type(&self) -> &str;
}
