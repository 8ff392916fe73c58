//! Browser collaborators backed by `web-sys` elements

use super::js_error;
use crate::{
    error::{PlaybackError, Result},
    events::{EventHub, PlayerEvent},
    media::{MediaSource, PlayerElements, ScrubControl, TextSink},
};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, HtmlInputElement, HtmlMediaElement};

/// `<audio>` / `<video>` element
pub struct DomMedia {
    element: HtmlMediaElement,

    // Shared rejection handler for play() promises (autoplay policy, bad source)
    on_play_rejected: Closure<dyn FnMut(JsValue)>,
}

impl DomMedia {
    /// Wrap a media element; refused play requests are reported on `hub`
    pub fn new(element: HtmlMediaElement, hub: &EventHub) -> Self {
        let hub = hub.clone();
        let on_play_rejected = Closure::wrap(Box::new(move |reason: JsValue| {
            tracing::warn!("Play request rejected: {}", js_error(&reason));
            web_sys::console::warn_2(&JsValue::from_str("play() rejected:"), &reason);
            hub.emit(PlayerEvent::PlayRejected);
        }) as Box<dyn FnMut(JsValue)>);

        Self {
            element,
            on_play_rejected,
        }
    }

    pub fn element(&self) -> &HtmlMediaElement {
        &self.element
    }
}

impl MediaSource for DomMedia {
    fn duration(&self) -> f64 {
        self.element.duration()
    }

    fn current_time(&self) -> f64 {
        self.element.current_time()
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.element.set_current_time(seconds);
    }

    fn is_paused(&self) -> bool {
        self.element.paused()
    }

    fn play(&mut self) -> Result<()> {
        let promise = self
            .element
            .play()
            .map_err(|e| PlaybackError::MediaCommand(js_error(&e)))?;
        let _ = promise.catch(&self.on_play_rejected);
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        self.element
            .pause()
            .map_err(|e| PlaybackError::MediaCommand(js_error(&e)))
    }
}

/// `<input type="range">` used as the scrub control
pub struct DomScrub(pub HtmlInputElement);

impl ScrubControl for DomScrub {
    fn set_min(&mut self, min: f64) {
        self.0.set_min(&min.to_string());
    }

    fn set_max(&mut self, max: f64) {
        self.0.set_max(&max.to_string());
    }

    fn set_value(&mut self, value: f64) {
        self.0.set_value(&value.to_string());
    }

    fn value(&self) -> f64 {
        self.0.value_as_number()
    }
}

/// Element whose text content shows a time or the play/pause glyph
pub struct DomText(pub HtmlElement);

impl TextSink for DomText {
    fn set_text(&mut self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

/// Wrap page elements as controller collaborators
pub fn player_elements(
    hub: &EventHub,
    media: &HtmlMediaElement,
    scrub: &HtmlInputElement,
    elapsed: &HtmlElement,
    total: &HtmlElement,
    label: &HtmlElement,
) -> PlayerElements {
    PlayerElements {
        media: Box::new(DomMedia::new(media.clone(), hub)),
        scrub: Box::new(DomScrub(scrub.clone())),
        elapsed: Box::new(DomText(elapsed.clone())),
        total: Box::new(DomText(total.clone())),
        label: Box::new(DomText(label.clone())),
    }
}
