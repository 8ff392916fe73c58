//! Playback sync controller - core orchestration
//!
//! Keeps the scrub control, the two time labels and the play/pause label
//! consistent with the media element, and turns user input into media commands.

use crate::{
    events::PlayerEvent,
    format::format_time,
    media::{MediaSource, PlayerElements, ScrubControl, TextSink},
    types::{PlaybackState, PlayerConfig, SyncMode},
};
use tracing::{debug, trace, warn};

/// Playback sync controller
///
/// Owns the injected page collaborators. All methods are synchronous and
/// expected to run on the page's single UI thread.
pub struct PlaybackSyncController {
    media: Box<dyn MediaSource>,
    scrub: Box<dyn ScrubControl>,
    elapsed: Box<dyn TextSink>,
    total: Box<dyn TextSink>,
    label: Box<dyn TextSink>,

    config: PlayerConfig,

    /// Duration the scrub bound was last set to
    duration: Option<f64>,

    sync: SyncMode,
}

impl PlaybackSyncController {
    /// Create a controller and sync it with the media's current state
    ///
    /// Metadata may have loaded before the caller got a chance to subscribe,
    /// so the duration is checked here as well as on `MetadataReady`.
    pub fn new(elements: PlayerElements, config: PlayerConfig) -> Self {
        let PlayerElements {
            media,
            scrub,
            elapsed,
            total,
            label,
        } = elements;

        let mut controller = Self {
            media,
            scrub,
            elapsed,
            total,
            label,
            config,
            duration: None,
            sync: SyncMode::Following,
        };

        controller.set_duration();
        controller.refresh_label();
        controller
    }

    // ===== Bounds =====

    /// Set the scrub bound and total label from the media duration
    ///
    /// Defers (returns `false`) while the duration is unknown. Safe to call
    /// any number of times.
    pub fn set_duration(&mut self) -> bool {
        if !self.media.has_duration() {
            trace!("Duration not known yet, deferring scrub bounds");
            return self.duration.is_some();
        }

        let duration = self.media.duration();
        if self.duration != Some(duration) {
            debug!(duration, "Setting scrub bounds");
        }

        self.scrub.set_min(0.0);
        self.scrub.set_max(duration);
        self.total.set_text(&format_time(duration));
        self.duration = Some(duration);
        true
    }

    // ===== Playback Control =====

    /// Toggle between playing and paused
    ///
    /// The label is written together with the command, without waiting for
    /// the media's own play/pause notification.
    pub fn toggle_play(&mut self) {
        let (next, result) = if self.media.is_paused() {
            (PlaybackState::Playing, self.media.play())
        } else {
            (PlaybackState::Paused, self.media.pause())
        };

        match result {
            Ok(()) => {
                debug!(state = ?next, "Toggled playback");
                self.label.set_text(self.config.glyph_for(next));
            }
            Err(e) => {
                warn!("Playback command failed: {}", e);
                self.refresh_label();
            }
        }
    }

    /// Re-read the paused flag after a change the controller did not issue
    ///
    /// Covers end-of-media, play/pause triggered by the browser itself
    /// (media keys, another tab taking audio focus) and play requests the
    /// browser refused after `toggle_play` had already shown the playing glyph.
    pub fn on_play_state_changed(&mut self) {
        self.refresh_label();
    }

    fn refresh_label(&mut self) {
        let state = self.state();
        self.label.set_text(self.config.glyph_for(state));
    }

    // ===== Position Sync =====

    /// Mirror the media position onto the scrub control and elapsed label
    ///
    /// Ignored while paused (the display may hold a pending seek) and while
    /// the user is dragging the scrub control.
    pub fn on_time_advanced(&mut self) {
        if self.media.is_paused() {
            return;
        }
        if self.sync == SyncMode::UserDragging && self.config.suppress_advance_while_dragging {
            trace!("Ignoring advance during drag");
            return;
        }

        let position = self.media.current_time();
        self.scrub.set_value(position);
        self.elapsed.set_text(&format_time(position));
    }

    // ===== Seeking =====

    /// Seek to the scrub control's current value
    pub fn handle_seek(&mut self) {
        let target = self.scrub.value();
        self.seek_to(target);
    }

    /// Seek to a position in seconds
    ///
    /// Updates the elapsed label immediately rather than on the next advance.
    pub fn seek_to(&mut self, seconds: f64) {
        if !seconds.is_finite() {
            warn!(seconds, "Ignoring non-finite seek target");
            return;
        }

        let target = match self.duration {
            Some(duration) if self.config.clamp_seek => seconds.clamp(0.0, duration),
            _ if self.config.clamp_seek => seconds.max(0.0),
            _ => seconds,
        };

        trace!(target, "Seeking");
        self.media.set_current_time(target);
        self.scrub.set_value(target);
        self.elapsed.set_text(&format_time(target));
    }

    // ===== Drag Tracking =====

    /// User pressed the scrub control
    pub fn begin_drag(&mut self) {
        self.sync = SyncMode::UserDragging;
    }

    /// User released the scrub control
    pub fn end_drag(&mut self) {
        self.sync = SyncMode::Following;
    }

    // ===== Event Dispatch =====

    /// Route a page event to the matching operation
    pub fn handle_event(&mut self, event: PlayerEvent) {
        match event {
            PlayerEvent::MetadataReady => {
                self.set_duration();
            }
            PlayerEvent::TimeAdvanced => self.on_time_advanced(),
            PlayerEvent::Ended
            | PlayerEvent::Played
            | PlayerEvent::Paused
            | PlayerEvent::PlayRejected => {
                self.on_play_state_changed();
            }
            PlayerEvent::ToggleClicked => self.toggle_play(),
            PlayerEvent::ScrubInput => self.handle_seek(),
            PlayerEvent::ScrubPressed => self.begin_drag(),
            PlayerEvent::ScrubReleased => self.end_drag(),
        }
    }

    // ===== State Queries =====

    pub fn state(&self) -> PlaybackState {
        PlaybackState::from_paused(self.media.is_paused())
    }

    pub fn sync_mode(&self) -> SyncMode {
        self.sync
    }

    /// Duration the scrub bound is set to, if known
    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }
}
