//! Platform-agnostic collaborator traits
//!
//! The controller never touches the page directly. Everything it reads or
//! writes goes through these traits, so the browser bindings and test fakes
//! are interchangeable.

use crate::error::Result;

/// Playable media resource owned by the page
///
/// Times are in seconds. `duration` is `NaN` until metadata has loaded.
pub trait MediaSource {
    /// Total duration in seconds (`NaN` while unknown)
    fn duration(&self) -> f64;

    /// Current playback position in seconds
    fn current_time(&self) -> f64;

    /// Move the playback position
    fn set_current_time(&mut self, seconds: f64);

    /// Whether playback is paused
    fn is_paused(&self) -> bool;

    /// Start or resume playback
    ///
    /// Fire-and-forget: `Ok` means the command was issued, not that audio is audible.
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self) -> Result<()>;

    /// Whether the duration is a usable number
    fn has_duration(&self) -> bool {
        let duration = self.duration();
        duration.is_finite() && duration >= 0.0
    }
}

/// Bounded numeric control mirroring the playback position
pub trait ScrubControl {
    fn set_min(&mut self, min: f64);

    fn set_max(&mut self, max: f64);

    fn set_value(&mut self, value: f64);

    /// Current value as entered by the user
    fn value(&self) -> f64;
}

/// Anything whose text content can be replaced
pub trait TextSink {
    fn set_text(&mut self, text: &str);
}

/// The five collaborators a controller is built from
pub struct PlayerElements {
    pub media: Box<dyn MediaSource>,
    pub scrub: Box<dyn ScrubControl>,
    pub elapsed: Box<dyn TextSink>,
    pub total: Box<dyn TextSink>,
    pub label: Box<dyn TextSink>,
}
