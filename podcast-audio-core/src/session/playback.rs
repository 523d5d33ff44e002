//! Exclusive playlist playback.

use crate::models::episode::Episode;
use crate::models::error::PlaybackError;
use crate::models::state::{PlaybackEvent, PlaybackState};
use crate::traits::playback_host::{PlayableHandle, PlaybackHost};

/// The live session: one host handle bound to one episode index.
struct ActiveSession<H> {
    handle: H,
    index: usize,
}

/// Drives exclusive playback over a fixed, ordered episode collection.
///
/// At most one host handle exists at a time; switching episodes releases
/// the previous handle before the next one is created, so no two handles
/// can ever be in a "play requested" state together. Auto-advance is an
/// ordinary `Ended` transition — the embedder forwards the host's
/// end-of-playback event into `apply`.
pub struct PlaybackController<H: PlaybackHost> {
    host: H,
    episodes: Vec<Episode>,
    session: Option<ActiveSession<H::Handle>>,
}

impl<H: PlaybackHost> PlaybackController<H> {
    pub fn new(host: H, episodes: Vec<Episode>) -> Self {
        Self {
            host,
            episodes,
            session: None,
        }
    }

    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    /// Current state, derived from the live session.
    pub fn state(&self) -> PlaybackState {
        match &self.session {
            None => PlaybackState::Idle,
            Some(session) if session.handle.is_paused() => PlaybackState::Paused {
                index: session.index,
            },
            Some(session) => PlaybackState::Playing {
                index: session.index,
            },
        }
    }

    /// The user selected the episode at `index`.
    pub fn select(&mut self, index: usize) -> Result<PlaybackState, PlaybackError> {
        self.apply(PlaybackEvent::Select(index))
    }

    /// The active handle finished playing.
    pub fn playback_ended(&mut self) -> Result<PlaybackState, PlaybackError> {
        self.apply(PlaybackEvent::Ended)
    }

    /// Advance the state machine by one event.
    ///
    /// Transition table:
    /// ```text
    /// | state              | event     | next                           |
    /// |--------------------|-----------|--------------------------------|
    /// | Playing { i }      | Select(i) | Paused { i }                   |
    /// | Paused { i }       | Select(i) | Playing { i }                  |
    /// | any                | Select(j) | Playing { j }, handle swapped  |
    /// | Playing/Paused { i }| Ended    | Playing { (i + 1) % len }      |
    /// | Idle               | Ended     | Playing { 0 }                  |
    /// ```
    pub fn apply(&mut self, event: PlaybackEvent) -> Result<PlaybackState, PlaybackError> {
        match (self.state(), event) {
            (PlaybackState::Playing { index }, PlaybackEvent::Select(target))
                if index == target =>
            {
                if let Some(session) = &mut self.session {
                    session.handle.pause();
                }
            }
            (PlaybackState::Paused { index }, PlaybackEvent::Select(target))
                if index == target =>
            {
                self.resume()?;
            }
            (_, PlaybackEvent::Select(target)) => {
                self.switch_to(target)?;
            }
            (state, PlaybackEvent::Ended) => {
                let next = match state.active_index() {
                    Some(index) => (index + 1) % self.episodes.len(),
                    None => 0,
                };
                self.switch_to(next)?;
            }
        }
        Ok(self.state())
    }

    /// Release the current handle, create one for `index`, and play it.
    ///
    /// A rejected play request leaves the session cleared and is not
    /// retried.
    fn switch_to(&mut self, index: usize) -> Result<(), PlaybackError> {
        let episode = self
            .episodes
            .get(index)
            .ok_or(PlaybackError::UnknownEpisode(index))?;

        // Release first: the old handle must be gone before the new one
        // can enter a play-requested state.
        self.session = None;

        let mut handle = self.host.create_handle(&episode.audio_url);
        if let Err(e) = handle.play() {
            log::error!("play request for \"{}\" rejected: {}", episode.title, e);
            return Err(e);
        }
        self.session = Some(ActiveSession { handle, index });
        Ok(())
    }

    fn resume(&mut self) -> Result<(), PlaybackError> {
        let Some(session) = &mut self.session else {
            return Ok(());
        };
        if let Err(e) = session.handle.play() {
            log::error!("resume rejected: {}", e);
            self.session = None;
            return Err(e);
        }
        Ok(())
    }
}
