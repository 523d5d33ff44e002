/// Capture session state machine.
///
/// State transitions:
/// ```text
/// Idle → Recording → Idle
/// ```
/// `stop` always returns to `Idle`. There is no sealed state: a new start
/// discards the previous session's data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    Idle,
    Recording,
}

impl CaptureState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_recording(&self) -> bool {
        matches!(self, Self::Recording)
    }
}

/// Playback session state machine.
///
/// State transitions:
/// ```text
/// Idle → Playing { index } ↔ Paused { index }
/// ```
/// `Select` on the active index toggles between `Playing` and `Paused`; on
/// any other index it switches the session. `Ended` advances to
/// `(index + 1) % len`, wrapping from the last episode to the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Playing { index: usize },
    Paused { index: usize },
}

impl PlaybackState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing { .. })
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, Self::Paused { .. })
    }

    /// The index of the episode the session is bound to, if any.
    pub fn active_index(&self) -> Option<usize> {
        match self {
            Self::Idle => None,
            Self::Playing { index } | Self::Paused { index } => Some(*index),
        }
    }
}

/// External stimulus driving the playback state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// The user selected the episode at this index.
    Select(usize),
    /// The active handle reported end of playback.
    Ended,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_state_predicates() {
        assert!(CaptureState::Idle.is_idle());
        assert!(!CaptureState::Idle.is_recording());
        assert!(CaptureState::Recording.is_recording());
    }

    #[test]
    fn playback_active_index() {
        assert_eq!(PlaybackState::Idle.active_index(), None);
        assert_eq!(PlaybackState::Playing { index: 2 }.active_index(), Some(2));
        assert_eq!(PlaybackState::Paused { index: 0 }.active_index(), Some(0));
    }
}
