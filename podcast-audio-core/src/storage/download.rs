use std::fs;
use std::path::PathBuf;

use crate::models::audio::AudioResource;
use crate::models::error::CaptureError;
use crate::traits::download_sink::DownloadSink;

/// Saves resources as files in a fixed directory.
///
/// Stands in for the browser's save-as interaction on desktop hosts. The
/// directory is created on first use.
pub struct FileDownloadSink {
    directory: PathBuf,
}

impl FileDownloadSink {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }
}

impl DownloadSink for FileDownloadSink {
    fn save(&self, resource: &AudioResource, filename: &str) -> Result<(), CaptureError> {
        fs::create_dir_all(&self.directory)
            .map_err(|e| CaptureError::StorageError(format!("failed to create directory: {}", e)))?;
        let path = self.directory.join(filename);
        fs::write(&path, &resource.bytes).map_err(|e| {
            CaptureError::StorageError(format!("failed to write {}: {}", path.display(), e))
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_resource_bytes_to_directory() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileDownloadSink::new(dir.path().join("downloads"));
        let resource = AudioResource::new(vec![1, 2, 3, 4], "audio/mp3");

        sink.save(&resource, "recording.mp3").unwrap();

        let written = fs::read(dir.path().join("downloads/recording.mp3")).unwrap();
        assert_eq!(written, vec![1, 2, 3, 4]);
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileDownloadSink::new(dir.path());

        sink.save(&AudioResource::new(vec![1], "audio/mp3"), "recording.mp3")
            .unwrap();
        sink.save(&AudioResource::new(vec![2, 3], "audio/mp3"), "recording.mp3")
            .unwrap();

        let written = fs::read(dir.path().join("recording.mp3")).unwrap();
        assert_eq!(written, vec![2, 3]);
    }
}
