//! DOM event listeners with explicit lifetimes

use super::js_error;
use crate::error::{PlaybackError, Result};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{Event, EventTarget};

/// An attached DOM listener, removed again on drop
pub struct DomListener {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl DomListener {
    /// Attach `handler` to `event_type` on `target`
    pub fn attach<F>(target: &EventTarget, event_type: &'static str, handler: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref())
            .map_err(|e| PlaybackError::Dom(format!("{}: {}", event_type, js_error(&e))))?;

        Ok(Self {
            target: target.clone(),
            event_type,
            callback,
        })
    }

    pub fn event_type(&self) -> &'static str {
        self.event_type
    }
}

impl Drop for DomListener {
    fn drop(&mut self) {
        let removed = self.target.remove_event_listener_with_callback(
            self.event_type,
            self.callback.as_ref().unchecked_ref(),
        );
        if let Err(e) = removed {
            tracing::warn!("Failed to remove {} listener: {}", self.event_type, js_error(&e));
        }
    }
}
