//! Shared fakes for integration tests

#![allow(dead_code)]

use folio_playback::{
    MediaSource, PlaybackError, PlaybackSyncController, PlayerConfig, PlayerElements,
    ScrubControl, TextSink,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Everything the page would show, recorded for assertions
#[derive(Debug, Default)]
pub struct PageState {
    pub duration: f64,
    pub current_time: f64,
    pub paused: bool,
    pub reject_play: bool,
    /// play() returns Ok but playback never starts (promise rejects later)
    pub reject_play_later: bool,
    pub play_calls: usize,
    pub pause_calls: usize,
    pub seek_writes: Vec<f64>,
    pub scrub_min: Option<f64>,
    pub scrub_max: Option<f64>,
    pub scrub_value: f64,
    pub elapsed: String,
    pub total: String,
    pub label: String,
}

#[derive(Clone)]
pub struct FakePage(pub Rc<RefCell<PageState>>);

impl FakePage {
    /// Page with media paused at 0; `duration` may be NaN
    pub fn new(duration: f64) -> Self {
        Self(Rc::new(RefCell::new(PageState {
            duration,
            paused: true,
            ..PageState::default()
        })))
    }

    pub fn state(&self) -> std::cell::Ref<'_, PageState> {
        self.0.borrow()
    }

    pub fn state_mut(&self) -> std::cell::RefMut<'_, PageState> {
        self.0.borrow_mut()
    }

    /// Media clock moves on its own (no controller involvement)
    pub fn advance_clock(&self, to: f64) {
        self.0.borrow_mut().current_time = to;
    }

    /// User drags the range input to `value`
    pub fn drag_scrub(&self, value: f64) {
        self.0.borrow_mut().scrub_value = value;
    }

    pub fn elements(&self) -> PlayerElements {
        PlayerElements {
            media: Box::new(FakeMedia(self.clone())),
            scrub: Box::new(FakeScrub(self.clone())),
            elapsed: Box::new(FakeText(self.clone(), Slot::Elapsed)),
            total: Box::new(FakeText(self.clone(), Slot::Total)),
            label: Box::new(FakeText(self.clone(), Slot::Label)),
        }
    }

    pub fn controller(&self) -> PlaybackSyncController {
        PlaybackSyncController::new(self.elements(), PlayerConfig::default())
    }
}

struct FakeMedia(FakePage);

impl MediaSource for FakeMedia {
    fn duration(&self) -> f64 {
        self.0.state().duration
    }

    fn current_time(&self) -> f64 {
        self.0.state().current_time
    }

    fn set_current_time(&mut self, seconds: f64) {
        let mut state = self.0.state_mut();
        state.current_time = seconds;
        state.seek_writes.push(seconds);
    }

    fn is_paused(&self) -> bool {
        self.0.state().paused
    }

    fn play(&mut self) -> folio_playback::Result<()> {
        let mut state = self.0.state_mut();
        state.play_calls += 1;
        if state.reject_play {
            return Err(PlaybackError::MediaCommand("NotAllowedError".to_string()));
        }
        if state.reject_play_later {
            return Ok(());
        }
        state.paused = false;
        Ok(())
    }

    fn pause(&mut self) -> folio_playback::Result<()> {
        let mut state = self.0.state_mut();
        state.pause_calls += 1;
        state.paused = true;
        Ok(())
    }
}

struct FakeScrub(FakePage);

impl ScrubControl for FakeScrub {
    fn set_min(&mut self, min: f64) {
        self.0.state_mut().scrub_min = Some(min);
    }

    fn set_max(&mut self, max: f64) {
        self.0.state_mut().scrub_max = Some(max);
    }

    fn set_value(&mut self, value: f64) {
        self.0.state_mut().scrub_value = value;
    }

    fn value(&self) -> f64 {
        self.0.state().scrub_value
    }
}

#[derive(Clone, Copy)]
enum Slot {
    Elapsed,
    Total,
    Label,
}

struct FakeText(FakePage, Slot);

impl TextSink for FakeText {
    fn set_text(&mut self, text: &str) {
        let mut state = self.0.state_mut();
        let slot = match self.1 {
            Slot::Elapsed => &mut state.elapsed,
            Slot::Total => &mut state.total,
            Slot::Label => &mut state.label,
        };
        *slot = text.to_string();
    }
}

/// Route tracing output through the test harness
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}
