//! WASM bindings for folio-playback
//!
//! Browser implementations of the collaborator traits, DOM listeners that
//! detach on drop, and the `WasmAudioPlayer` handle the page scripts use.

#[cfg(feature = "wasm")]
pub mod elements;

#[cfg(feature = "wasm")]
pub mod listener;

#[cfg(feature = "wasm")]
pub mod player;

#[cfg(feature = "wasm")]
pub use elements::{DomMedia, DomScrub, DomText};

#[cfg(feature = "wasm")]
pub use listener::DomListener;

#[cfg(feature = "wasm")]
pub use player::WasmAudioPlayer;

#[cfg(feature = "wasm")]
impl From<crate::PlaybackError> for wasm_bindgen::JsValue {
    fn from(error: crate::PlaybackError) -> Self {
        wasm_bindgen::JsValue::from_str(&error.to_string())
    }
}

/// Best-effort message for a thrown JS value
#[cfg(feature = "wasm")]
pub(crate) fn js_error(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
