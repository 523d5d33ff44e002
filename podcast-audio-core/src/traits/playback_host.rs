use crate::models::error::PlaybackError;

/// A host-owned playable audio handle bound to one source URL.
///
/// Dropping the handle releases the underlying host resource.
pub trait PlayableHandle {
    /// Request playback. The host may reject the request (e.g. an
    /// autoplay policy); rejection is not retried.
    fn play(&mut self) -> Result<(), PlaybackError>;

    /// Pause playback. Always succeeds.
    fn pause(&mut self);

    /// Whether the handle is currently paused.
    fn is_paused(&self) -> bool;
}

/// Factory for host playable-audio handles.
///
/// End-of-playback is delivered out-of-band: the embedder forwards the
/// host's ended event to the controller as `PlaybackEvent::Ended`.
pub trait PlaybackHost {
    type Handle: PlayableHandle;

    fn create_handle(&self, url: &str) -> Self::Handle;
}
