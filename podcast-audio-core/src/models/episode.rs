use serde::{Deserialize, Serialize};

/// One playable item from the podcast feed.
///
/// The feed collaborator hands these over already ordered and parsed;
/// identity is the position in that order, not a persistent id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub title: String,
    pub audio_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artwork_url: Option<String>,
}

impl Episode {
    pub fn new(title: impl Into<String>, audio_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            audio_url: audio_url.into(),
            artwork_url: None,
        }
    }
}
