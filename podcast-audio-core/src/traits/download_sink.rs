use crate::models::audio::AudioResource;
use crate::models::error::CaptureError;

/// Host "save as file" action.
///
/// Fire-and-forget from the user's point of view; I/O faults surface as
/// `CaptureError::StorageError`.
pub trait DownloadSink: Send + Sync {
    fn save(&self, resource: &AudioResource, filename: &str) -> Result<(), CaptureError>;
}
