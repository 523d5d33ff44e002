//! Microphone recording session.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::models::audio::AudioResource;
use crate::models::error::CaptureError;
use crate::models::state::CaptureState;
use crate::session::converter::FormatConverter;
use crate::traits::capture_source::CaptureSource;
use crate::traits::download_sink::DownloadSink;
use crate::traits::media_decoder::MediaDecoder;

/// Download filename for the raw captured blob.
pub const RAW_RECORDING_FILENAME: &str = "recording.webm";

/// Download filename for the converted MP3.
pub const MP3_RECORDING_FILENAME: &str = "recording.mp3";

/// Owns one microphone capture lifecycle: `Idle → Recording → Idle`.
///
/// Emitted chunks are appended to a shared accumulator (the source may
/// deliver them on its own thread) and concatenated into a single sealed
/// resource when the session stops. A new start discards the previous
/// recording.
pub struct RecorderSession<S: CaptureSource> {
    source: S,
    state: CaptureState,
    chunks: Arc<Mutex<Vec<Vec<u8>>>>,
    recorded: Option<AudioResource>,
}

impl<S: CaptureSource> RecorderSession<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: CaptureState::Idle,
            chunks: Arc::new(Mutex::new(Vec::new())),
            recorded: None,
        }
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    pub fn is_recording(&self) -> bool {
        self.state.is_recording()
    }

    /// The only externally driven transition: stop when recording, start
    /// otherwise.
    pub fn toggle(&mut self) -> Result<CaptureState, CaptureError> {
        if self.state.is_recording() {
            self.stop();
        } else {
            self.start()?;
        }
        Ok(self.state)
    }

    /// Acquire the microphone and begin accumulating chunks.
    ///
    /// On denial the session stays `Idle` and the failure propagates; a
    /// retry is a fresh call.
    pub fn start(&mut self) -> Result<(), CaptureError> {
        if self.state.is_recording() {
            return Ok(());
        }
        if !self.source.is_available() {
            return Err(CaptureError::SourceUnavailable);
        }

        self.recorded = None;
        self.chunks.lock().clear();

        let chunks = Arc::clone(&self.chunks);
        self.source.start(Arc::new(move |chunk: &[u8]| {
            if !chunk.is_empty() {
                chunks.lock().push(chunk.to_vec());
            }
        }))?;
        self.state = CaptureState::Recording;
        Ok(())
    }

    /// Stop the capture stream and seal the accumulated chunks into one
    /// resource. No-op when already idle.
    pub fn stop(&mut self) {
        if !self.state.is_recording() {
            return;
        }
        if let Err(e) = self.source.stop() {
            log::warn!("capture source stop failed: {}", e);
        }
        self.state = CaptureState::Idle;

        let chunks = std::mem::take(&mut *self.chunks.lock());
        if chunks.is_empty() {
            log::warn!("capture session produced no data");
            return;
        }
        let total: usize = chunks.iter().map(Vec::len).sum();
        let mut bytes = Vec::with_capacity(total);
        for chunk in &chunks {
            bytes.extend_from_slice(chunk);
        }
        self.recorded = Some(AudioResource::new(bytes, self.source.mime_type()));
    }

    /// The last sealed recording, if any.
    pub fn recorded_resource(&self) -> Option<&AudioResource> {
        self.recorded.as_ref()
    }

    /// Save the raw captured blob as `recording.webm`. No-op when nothing
    /// was captured.
    pub fn download_raw(&self, sink: &dyn DownloadSink) -> Result<(), CaptureError> {
        let Some(resource) = &self.recorded else {
            log::warn!("download requested with no recording");
            return Ok(());
        };
        sink.save(resource, RAW_RECORDING_FILENAME)
    }

    /// Convert the recording to MP3 and save it as `recording.mp3`.
    /// No-op when nothing was captured.
    pub fn download_mp3<D: MediaDecoder>(
        &self,
        converter: &FormatConverter<D>,
        sink: &dyn DownloadSink,
    ) -> Result<(), CaptureError> {
        let Some(resource) = &self.recorded else {
            log::warn!("download requested with no recording");
            return Ok(());
        };
        let mp3 = converter.convert_to_mp3(resource)?;
        sink.save(&mp3, MP3_RECORDING_FILENAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::audio::{DecodedAudio, MP3_MIME, WAV_MIME};
    use crate::processing::wav;
    use crate::traits::capture_source::ChunkSink;

    /// Test source driven by the test body through a shared sink slot.
    struct FakeSource {
        sink: Arc<Mutex<Option<ChunkSink>>>,
        available: bool,
        deny: bool,
        stop_calls: Arc<Mutex<usize>>,
        mime: &'static str,
    }

    impl FakeSource {
        fn new() -> Self {
            Self {
                sink: Arc::new(Mutex::new(None)),
                available: true,
                deny: false,
                stop_calls: Arc::new(Mutex::new(0)),
                mime: "audio/webm",
            }
        }
    }

    impl CaptureSource for FakeSource {
        fn is_available(&self) -> bool {
            self.available
        }

        fn start(&mut self, sink: ChunkSink) -> Result<(), CaptureError> {
            if self.deny {
                return Err(CaptureError::AcquisitionFailed("permission denied".into()));
            }
            *self.sink.lock() = Some(sink);
            Ok(())
        }

        fn stop(&mut self) -> Result<(), CaptureError> {
            *self.stop_calls.lock() += 1;
            *self.sink.lock() = None;
            Ok(())
        }

        fn mime_type(&self) -> &str {
            self.mime
        }
    }

    fn emit(sink_slot: &Arc<Mutex<Option<ChunkSink>>>, data: &[u8]) {
        let sink = sink_slot.lock().clone().expect("source not started");
        sink(data);
    }

    /// In-memory sink recording every save.
    #[derive(Default)]
    struct MemorySink {
        saved: Mutex<Vec<(String, AudioResource)>>,
    }

    impl DownloadSink for MemorySink {
        fn save(&self, resource: &AudioResource, filename: &str) -> Result<(), CaptureError> {
            self.saved.lock().push((filename.into(), resource.clone()));
            Ok(())
        }
    }

    #[test]
    fn toggle_cycles_idle_recording_idle() {
        let mut session = RecorderSession::new(FakeSource::new());
        assert!(session.state().is_idle());

        assert_eq!(session.toggle().unwrap(), CaptureState::Recording);
        assert_eq!(session.toggle().unwrap(), CaptureState::Idle);
    }

    #[test]
    fn chunks_are_appended_and_concatenated() {
        let source = FakeSource::new();
        let sink_slot = Arc::clone(&source.sink);
        let mut session = RecorderSession::new(source);

        session.start().unwrap();
        emit(&sink_slot, b"first-");
        emit(&sink_slot, b"second-");
        emit(&sink_slot, b"third");
        session.stop();

        let recorded = session.recorded_resource().unwrap();
        assert_eq!(recorded.bytes, b"first-second-third");
        assert_eq!(recorded.mime_type, "audio/webm");
    }

    #[test]
    fn empty_chunks_are_ignored() {
        let source = FakeSource::new();
        let sink_slot = Arc::clone(&source.sink);
        let mut session = RecorderSession::new(source);

        session.start().unwrap();
        emit(&sink_slot, b"");
        emit(&sink_slot, b"data");
        session.stop();

        assert_eq!(session.recorded_resource().unwrap().bytes, b"data");
    }

    #[test]
    fn denied_acquisition_stays_idle() {
        let mut source = FakeSource::new();
        source.deny = true;
        let mut session = RecorderSession::new(source);

        let result = session.start();
        assert!(matches!(result, Err(CaptureError::AcquisitionFailed(_))));
        assert!(session.state().is_idle());
        assert!(session.recorded_resource().is_none());
    }

    #[test]
    fn unavailable_source_is_reported() {
        let mut source = FakeSource::new();
        source.available = false;
        let mut session = RecorderSession::new(source);
        assert_eq!(session.start(), Err(CaptureError::SourceUnavailable));
    }

    #[test]
    fn stop_when_idle_is_a_no_op() {
        let source = FakeSource::new();
        let stop_calls = Arc::clone(&source.stop_calls);
        let mut session = RecorderSession::new(source);

        session.stop();
        assert_eq!(*stop_calls.lock(), 0);
    }

    #[test]
    fn restart_discards_previous_recording() {
        let source = FakeSource::new();
        let sink_slot = Arc::clone(&source.sink);
        let mut session = RecorderSession::new(source);

        session.start().unwrap();
        emit(&sink_slot, b"old take");
        session.stop();
        assert!(session.recorded_resource().is_some());

        session.start().unwrap();
        assert!(session.recorded_resource().is_none());
        emit(&sink_slot, b"new take");
        session.stop();

        assert_eq!(session.recorded_resource().unwrap().bytes, b"new take");
    }

    #[test]
    fn stop_without_data_seals_nothing() {
        let mut session = RecorderSession::new(FakeSource::new());
        session.start().unwrap();
        session.stop();
        assert!(session.recorded_resource().is_none());
    }

    #[test]
    fn download_without_recording_is_a_no_op() {
        let session = RecorderSession::new(FakeSource::new());
        let sink = MemorySink::default();

        session.download_raw(&sink).unwrap();
        session
            .download_mp3(&FormatConverter::default(), &sink)
            .unwrap();
        assert!(sink.saved.lock().is_empty());
    }

    #[test]
    fn download_raw_uses_fixed_filename() {
        let source = FakeSource::new();
        let sink_slot = Arc::clone(&source.sink);
        let mut session = RecorderSession::new(source);

        session.start().unwrap();
        emit(&sink_slot, b"blob");
        session.stop();

        let sink = MemorySink::default();
        session.download_raw(&sink).unwrap();

        let saved = sink.saved.lock();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].0, RAW_RECORDING_FILENAME);
        assert_eq!(saved[0].1.bytes, b"blob");
    }

    #[test]
    fn captured_wav_converts_to_mp3_download() {
        // One 2-second mono 44.1 kHz chunk, captured as a WAV blob.
        let frames = 2 * 44_100;
        let tone: Vec<f32> = (0..frames)
            .map(|i| (i as f32 * 330.0 * std::f32::consts::TAU / 44_100.0).sin() * 0.5)
            .collect();
        let wav_blob = wav::encode(&DecodedAudio::new(vec![tone], 44_100));

        let mut source = FakeSource::new();
        source.mime = WAV_MIME;
        let sink_slot = Arc::clone(&source.sink);
        let mut session = RecorderSession::new(source);

        session.start().unwrap();
        emit(&sink_slot, &wav_blob);
        session.stop();

        let sink = MemorySink::default();
        session
            .download_mp3(&FormatConverter::default(), &sink)
            .unwrap();

        let saved = sink.saved.lock();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].0, MP3_RECORDING_FILENAME);
        assert_eq!(saved[0].1.mime_type, MP3_MIME);
        assert!(!saved[0].1.is_empty());
    }
}
