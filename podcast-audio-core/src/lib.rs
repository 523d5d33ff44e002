//! # podcast-audio-core
//!
//! Platform-agnostic core for a podcast recorder/player.
//!
//! Covers two independent subsystems: the capture-and-conversion pipeline
//! (microphone blob → WAV container → MP3 bitstream → download) and the
//! playback controller (exclusive, auto-advancing playback over an ordered
//! episode list). Host integrations — a real microphone, a real audio
//! output, the save-as-file action — implement this crate's traits.
//!
//! ## Architecture
//!
//! ```text
//! podcast-audio-core (this crate)
//! ├── traits/       ← CaptureSource, MediaDecoder, FrameEncoder, PlaybackHost, DownloadSink
//! ├── models/       ← Episode, AudioResource, DecodedAudio, states, errors, ConvertConfig
//! ├── processing/   ← WAV encode/parse, MP3 windowing + LAME, symphonia decoding
//! ├── session/      ← RecorderSession, FormatConverter, PlaybackController
//! └── storage/      ← FileDownloadSink
//! ```

pub mod models;
pub mod processing;
pub mod session;
pub mod storage;
pub mod traits;

// Re-export key types at crate root for convenience.
pub use models::audio::{AudioResource, DecodedAudio, MP3_MIME, WAV_MIME};
pub use models::config::ConvertConfig;
pub use models::episode::Episode;
pub use models::error::{CaptureError, ConvertError, PlaybackError};
pub use models::state::{CaptureState, PlaybackEvent, PlaybackState};
pub use processing::decoder::SymphoniaDecoder;
pub use session::converter::FormatConverter;
pub use session::playback::PlaybackController;
pub use session::recorder::{RecorderSession, MP3_RECORDING_FILENAME, RAW_RECORDING_FILENAME};
pub use storage::download::FileDownloadSink;
pub use traits::capture_source::{CaptureSource, ChunkSink};
pub use traits::download_sink::DownloadSink;
pub use traits::frame_encoder::FrameEncoder;
pub use traits::media_decoder::MediaDecoder;
pub use traits::playback_host::{PlayableHandle, PlaybackHost};
