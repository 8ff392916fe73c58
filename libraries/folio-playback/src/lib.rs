//! Folio Player - Playback Controls
//!
//! The audio player on the Folio portfolio site.
//!
//! This crate provides:
//! - Play/pause toggle with a label that follows the new state immediately
//! - Scrub control and elapsed-time label synced to the playback clock
//! - Manual seeking from the scrub control
//! - `M:SS` time formatting that tolerates unknown durations
//! - Explicit, disposable event bindings
//!
//! # Architecture
//!
//! `folio-playback` does not touch the DOM directly. The media element, the
//! scrub control and the text labels are injected through the traits in
//! [`media`], so the controller runs the same against browser elements
//! (feature `wasm`) and in-memory fakes.
//!
//! # Example: Driving the controller
//!
//! ```rust
//! use folio_playback::{
//!     format_time, MediaSource, PlaybackSyncController, PlayerConfig, PlayerElements,
//!     Result, ScrubControl, TextSink,
//! };
//!
//! struct Clip { time: f64, paused: bool }
//!
//! impl MediaSource for Clip {
//!     fn duration(&self) -> f64 { 185.0 }
//!     fn current_time(&self) -> f64 { self.time }
//!     fn set_current_time(&mut self, seconds: f64) { self.time = seconds; }
//!     fn is_paused(&self) -> bool { self.paused }
//!     fn play(&mut self) -> Result<()> { self.paused = false; Ok(()) }
//!     fn pause(&mut self) -> Result<()> { self.paused = true; Ok(()) }
//! }
//!
//! struct Slider(f64);
//!
//! impl ScrubControl for Slider {
//!     fn set_min(&mut self, _min: f64) {}
//!     fn set_max(&mut self, _max: f64) {}
//!     fn set_value(&mut self, value: f64) { self.0 = value; }
//!     fn value(&self) -> f64 { self.0 }
//! }
//!
//! struct Ignore;
//!
//! impl TextSink for Ignore {
//!     fn set_text(&mut self, _text: &str) {}
//! }
//!
//! let mut player = PlaybackSyncController::new(
//!     PlayerElements {
//!         media: Box::new(Clip { time: 0.0, paused: true }),
//!         scrub: Box::new(Slider(0.0)),
//!         elapsed: Box::new(Ignore),
//!         total: Box::new(Ignore),
//!         label: Box::new(Ignore),
//!     },
//!     PlayerConfig::default(),
//! );
//!
//! assert_eq!(player.duration(), Some(185.0));
//! player.toggle_play();
//! player.seek_to(100.0);
//! assert_eq!(format_time(100.0), "1:40");
//! ```
//!
//! # Example: Event bindings
//!
//! ```rust,ignore
//! use folio_playback::{bind, EventHub, PlayerEvent};
//! use std::{cell::RefCell, rc::Rc};
//!
//! let controller = Rc::new(RefCell::new(controller));
//! let hub = EventHub::new();
//! let bindings = bind(&controller, &hub);
//!
//! hub.emit(PlayerEvent::TimeAdvanced);
//! bindings.detach();
//! ```

mod bindings;
mod controller;
mod error;
pub mod events;
mod format;
pub mod media;
pub mod types;
pub mod wasm;

// Public exports
pub use bindings::{bind, Bindings, SharedController};
pub use controller::PlaybackSyncController;
pub use error::{PlaybackError, Result};
pub use events::{EventHub, PlayerEvent, Subscription};
pub use format::format_time;
pub use media::{MediaSource, PlayerElements, ScrubControl, TextSink};
pub use types::{PlaybackState, PlayerConfig, SyncMode, PAUSED_GLYPH, PLAYING_GLYPH};
