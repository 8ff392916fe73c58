//! Explicit registration of a controller on an event hub

use crate::{
    controller::PlaybackSyncController,
    events::{EventHub, PlayerEvent, Subscription},
};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};

/// Controller shared between the page and its event handlers
pub type SharedController = Rc<RefCell<PlaybackSyncController>>;

/// Live subscriptions routing hub events to one controller
///
/// Dropping the bindings (or calling [`Bindings::detach`]) stops delivery.
#[derive(Debug)]
pub struct Bindings {
    subscriptions: Vec<Subscription>,
}

impl Bindings {
    /// Number of bound event kinds
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Event kinds currently bound
    pub fn events(&self) -> Vec<PlayerEvent> {
        self.subscriptions.iter().map(Subscription::event).collect()
    }

    /// Remove every subscription
    pub fn detach(self) {
        debug!(count = self.subscriptions.len(), "Detaching player bindings");
        drop(self);
    }
}

/// Subscribe a controller to every event it handles
///
/// `ToggleClicked` is skipped when the config leaves the button to the page.
pub fn bind(controller: &SharedController, hub: &EventHub) -> Bindings {
    let bind_toggle = controller.borrow().config().bind_toggle_click;

    let subscriptions: Vec<Subscription> = PlayerEvent::ALL
        .into_iter()
        .filter(|event| bind_toggle || *event != PlayerEvent::ToggleClicked)
        .map(|event| {
            let controller = Rc::clone(controller);
            hub.subscribe(event, move |event| dispatch(&controller, event))
        })
        .collect();

    debug!(count = subscriptions.len(), "Bound player events");
    Bindings { subscriptions }
}

/// Deliver one event, skipping it if the controller is already borrowed
pub(crate) fn dispatch(controller: &RefCell<PlaybackSyncController>, event: PlayerEvent) {
    match controller.try_borrow_mut() {
        Ok(mut controller) => controller.handle_event(event),
        Err(_) => warn!(?event, "Controller busy, dropping event"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::fake;
    use crate::types::PlayerConfig;

    fn shared(config: PlayerConfig) -> (SharedController, fake::SharedPage) {
        let page = fake::page(120.0);
        let controller = PlaybackSyncController::new(fake::elements(&page), config);
        (Rc::new(RefCell::new(controller)), page)
    }

    #[test]
    fn binds_every_event_by_default() {
        let (controller, _page) = shared(PlayerConfig::default());
        let hub = EventHub::new();

        let bindings = bind(&controller, &hub);

        assert_eq!(bindings.len(), PlayerEvent::ALL.len());
        assert_eq!(hub.len(), PlayerEvent::ALL.len());
    }

    #[test]
    fn toggle_click_left_to_page_when_disabled() {
        let config = PlayerConfig {
            bind_toggle_click: false,
            ..Default::default()
        };
        let (controller, page) = shared(config);
        let hub = EventHub::new();

        let bindings = bind(&controller, &hub);
        hub.emit(PlayerEvent::ToggleClicked);

        assert!(!bindings.events().contains(&PlayerEvent::ToggleClicked));
        assert_eq!(page.borrow().play_calls, 0);
    }

    #[test]
    fn detach_stops_delivery() {
        let (controller, page) = shared(PlayerConfig::default());
        let hub = EventHub::new();
        let bindings = bind(&controller, &hub);

        hub.emit(PlayerEvent::ToggleClicked);
        assert_eq!(page.borrow().play_calls, 1);

        bindings.detach();
        assert!(hub.is_empty());

        hub.emit(PlayerEvent::ToggleClicked);
        assert_eq!(page.borrow().pause_calls, 0);
    }

    #[test]
    fn busy_controller_drops_event() {
        let (controller, page) = shared(PlayerConfig::default());

        let _held = controller.borrow_mut();
        dispatch(&controller, PlayerEvent::ToggleClicked);

        assert_eq!(page.borrow().play_calls, 0);
    }
}
