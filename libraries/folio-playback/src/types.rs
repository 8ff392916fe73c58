//! Core types for the playback controls

use crate::error::{PlaybackError, Result};
use serde::{Deserialize, Serialize};

/// Glyph shown on the toggle button while paused
pub const PAUSED_GLYPH: &str = "▶";

/// Glyph shown on the toggle button while playing
pub const PLAYING_GLYPH: &str = "❚❚";

/// Playback axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Media is paused (or has not started)
    Paused,

    /// Media is playing
    Playing,
}

impl PlaybackState {
    /// State matching a media element's `paused` flag
    pub fn from_paused(paused: bool) -> Self {
        if paused {
            Self::Paused
        } else {
            Self::Playing
        }
    }

    pub fn is_paused(self) -> bool {
        self == Self::Paused
    }
}

/// Sync axis: whether the scrub control follows the media clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    /// Scrub control mirrors playback position
    Following,

    /// User is holding the scrub control
    UserDragging,
}

/// Configuration for the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Label text while playing (default: "❚❚")
    pub playing_glyph: String,

    /// Label text while paused (default: "▶")
    pub paused_glyph: String,

    /// Ignore playback advances while the user drags the scrub control (default: true)
    pub suppress_advance_while_dragging: bool,

    /// Clamp seek targets to `[0, duration]` (default: true)
    pub clamp_seek: bool,

    /// Wire the toggle button's click event during binding (default: true)
    ///
    /// Disable when the page already calls `togglePlay()` from its own markup.
    pub bind_toggle_click: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            playing_glyph: PLAYING_GLYPH.to_string(),
            paused_glyph: PAUSED_GLYPH.to_string(),
            suppress_advance_while_dragging: true,
            clamp_seek: true,
            bind_toggle_click: true,
        }
    }
}

impl PlayerConfig {
    /// Parse a config from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs that would render an empty toggle button
    pub fn validate(&self) -> Result<()> {
        if self.playing_glyph.trim().is_empty() {
            return Err(PlaybackError::InvalidConfig(
                "playing_glyph must not be empty".to_string(),
            ));
        }
        if self.paused_glyph.trim().is_empty() {
            return Err(PlaybackError::InvalidConfig(
                "paused_glyph must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Label text for a playback state
    pub fn glyph_for(&self, state: PlaybackState) -> &str {
        match state {
            PlaybackState::Paused => &self.paused_glyph,
            PlaybackState::Playing => &self.playing_glyph,
        }
    }
}
