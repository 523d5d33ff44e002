pub mod capture_source;
pub mod download_sink;
pub mod frame_encoder;
pub mod media_decoder;
pub mod playback_host;
