//! WASM-compatible player handle

use super::{elements::player_elements, listener::DomListener};
use crate::{
    bindings::{bind, dispatch, Bindings, SharedController},
    error::{PlaybackError, Result},
    events::{EventHub, PlayerEvent, MEDIA_DOM_EVENTS, SCRUB_DOM_EVENTS},
    types::{PlayerConfig, SyncMode},
    PlaybackSyncController,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{Document, EventTarget, HtmlElement, HtmlInputElement, HtmlMediaElement};

/// Audio player attached to page elements
///
/// Listeners stay attached until `detach()` is called or the handle is freed.
#[wasm_bindgen]
pub struct WasmAudioPlayer {
    controller: SharedController,
    hub: EventHub,
    bindings: Option<Bindings>,
    listeners: Vec<DomListener>,
}

#[wasm_bindgen]
impl WasmAudioPlayer {
    /// Attach a player to the given elements
    ///
    /// `config` is an optional object with `PlayerConfig` fields.
    #[wasm_bindgen(constructor)]
    pub fn new(
        media: HtmlMediaElement,
        scrub: HtmlInputElement,
        elapsed: HtmlElement,
        total: HtmlElement,
        button: HtmlElement,
        config: JsValue,
    ) -> std::result::Result<WasmAudioPlayer, JsValue> {
        // Enable panic hooks for better error messages in console
        console_error_panic_hook::set_once();

        let config = parse_config(config)?;
        let player = Self::attach(&media, &scrub, &elapsed, &total, &button, config)?;
        Ok(player)
    }

    /// Look elements up by id and attach a player to them
    pub fn mount(
        media_id: &str,
        scrub_id: &str,
        elapsed_id: &str,
        total_id: &str,
        button_id: &str,
        config: JsValue,
    ) -> std::result::Result<WasmAudioPlayer, JsValue> {
        console_error_panic_hook::set_once();

        let document = document()?;
        let media: HtmlMediaElement = element(&document, media_id, "HTMLMediaElement")?;
        let scrub: HtmlInputElement = element(&document, scrub_id, "HTMLInputElement")?;
        let elapsed: HtmlElement = element(&document, elapsed_id, "HTMLElement")?;
        let total: HtmlElement = element(&document, total_id, "HTMLElement")?;
        let button: HtmlElement = element(&document, button_id, "HTMLElement")?;

        let config = parse_config(config)?;
        let player = Self::attach(&media, &scrub, &elapsed, &total, &button, config)?;
        Ok(player)
    }

    // ===== Page Actions =====

    /// Play if paused, pause if playing
    #[wasm_bindgen(js_name = togglePlay)]
    pub fn toggle_play(&self) {
        dispatch(&self.controller, PlayerEvent::ToggleClicked);
    }

    /// Seek to the scrub control's value
    #[wasm_bindgen(js_name = handleSeek)]
    pub fn handle_seek(&self) {
        dispatch(&self.controller, PlayerEvent::ScrubInput);
    }

    /// Apply the media duration to the scrub control and total label
    ///
    /// Returns whether the duration is known.
    #[wasm_bindgen(js_name = setDuration)]
    pub fn set_duration(&self) -> bool {
        match self.controller.try_borrow_mut() {
            Ok(mut controller) => controller.set_duration(),
            Err(_) => false,
        }
    }

    /// Remove every DOM listener
    pub fn detach(&mut self) {
        tracing::debug!(count = self.listeners.len(), "Detaching DOM listeners");
        self.listeners.clear();
        if let Some(bindings) = self.bindings.take() {
            bindings.detach();
        }
    }

    // ===== State Queries =====

    #[wasm_bindgen(getter, js_name = isPaused)]
    pub fn is_paused(&self) -> bool {
        self.controller.borrow().state().is_paused()
    }

    #[wasm_bindgen(getter, js_name = isDragging)]
    pub fn is_dragging(&self) -> bool {
        self.controller.borrow().sync_mode() == SyncMode::UserDragging
    }

    #[wasm_bindgen(getter, js_name = listenerCount)]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl WasmAudioPlayer {
    fn attach(
        media: &HtmlMediaElement,
        scrub: &HtmlInputElement,
        elapsed: &HtmlElement,
        total: &HtmlElement,
        button: &HtmlElement,
        config: PlayerConfig,
    ) -> Result<Self> {
        let bind_toggle = config.bind_toggle_click;
        let hub = EventHub::new();
        let elements = player_elements(&hub, media, scrub, elapsed, total, button);

        // Construction reads the duration once, covering metadata that loaded
        // before the listeners below exist
        let controller = Rc::new(RefCell::new(PlaybackSyncController::new(elements, config)));

        let bindings = bind(&controller, &hub);

        let mut listeners = Vec::new();
        forward(&mut listeners, &hub, media, &MEDIA_DOM_EVENTS)?;
        forward(&mut listeners, &hub, scrub, &SCRUB_DOM_EVENTS)?;
        if bind_toggle {
            forward(&mut listeners, &hub, button, &[("click", PlayerEvent::ToggleClicked)])?;
        }

        tracing::debug!(listeners = listeners.len(), "Audio player attached");
        Ok(Self {
            controller,
            hub,
            bindings: Some(bindings),
            listeners,
        })
    }

    pub fn hub(&self) -> &EventHub {
        &self.hub
    }
}

/// Re-emit DOM events on the hub
fn forward(
    listeners: &mut Vec<DomListener>,
    hub: &EventHub,
    target: &EventTarget,
    events: &[(&'static str, PlayerEvent)],
) -> Result<()> {
    for &(event_type, event) in events {
        let hub = hub.clone();
        listeners.push(DomListener::attach(target, event_type, move |_| {
            hub.emit(event);
        })?);
    }
    Ok(())
}

fn parse_config(value: JsValue) -> Result<PlayerConfig> {
    if value.is_undefined() || value.is_null() {
        return Ok(PlayerConfig::default());
    }

    let config: PlayerConfig = serde_wasm_bindgen::from_value(value)
        .map_err(|e| PlaybackError::InvalidConfig(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

fn document() -> Result<Document> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| PlaybackError::Dom("no document available".to_string()))
}

fn element<T: JsCast>(document: &Document, id: &str, expected: &'static str) -> Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| PlaybackError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| PlaybackError::WrongElementType {
            id: id.to_string(),
            expected,
        })
}
