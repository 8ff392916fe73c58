//! Player Events
//!
//! Page notifications the controller reacts to, and a small single-threaded
//! hub that delivers them to subscribers.
//!
//! Subscriptions are explicit handles: dropping one (or calling
//! [`Subscription::dispose`]) detaches the handler.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Notifications from the media element and the player controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerEvent {
    /// Duration is now known (`loadedmetadata`)
    MetadataReady,

    /// Playback position moved forward (`timeupdate`)
    TimeAdvanced,

    /// Media reached its end and stopped
    Ended,

    /// Media started playing
    Played,

    /// Media paused
    Paused,

    /// A play request was refused after it had been issued
    ///
    /// Browsers reject the `play()` promise without firing `pause`.
    PlayRejected,

    /// Play/pause button was clicked
    ToggleClicked,

    /// Scrub control value changed by the user
    ScrubInput,

    /// User pressed the scrub control
    ScrubPressed,

    /// User released the scrub control
    ScrubReleased,
}

impl PlayerEvent {
    /// Every event kind, in binding order
    pub const ALL: [PlayerEvent; 10] = [
        PlayerEvent::MetadataReady,
        PlayerEvent::TimeAdvanced,
        PlayerEvent::Ended,
        PlayerEvent::Played,
        PlayerEvent::Paused,
        PlayerEvent::PlayRejected,
        PlayerEvent::ToggleClicked,
        PlayerEvent::ScrubInput,
        PlayerEvent::ScrubPressed,
        PlayerEvent::ScrubReleased,
    ];
}

/// DOM events on the media element and the player events they raise
pub const MEDIA_DOM_EVENTS: [(&str, PlayerEvent); 5] = [
    ("loadedmetadata", PlayerEvent::MetadataReady),
    ("timeupdate", PlayerEvent::TimeAdvanced),
    ("ended", PlayerEvent::Ended),
    ("play", PlayerEvent::Played),
    ("pause", PlayerEvent::Paused),
];

/// DOM events on the scrub control and the player events they raise
///
/// Every way a pointer gesture can end releases the drag, otherwise
/// advances stay suppressed after a cancelled touch.
pub const SCRUB_DOM_EVENTS: [(&str, PlayerEvent); 6] = [
    ("input", PlayerEvent::ScrubInput),
    ("pointerdown", PlayerEvent::ScrubPressed),
    ("pointerup", PlayerEvent::ScrubReleased),
    ("pointercancel", PlayerEvent::ScrubReleased),
    ("lostpointercapture", PlayerEvent::ScrubReleased),
    ("change", PlayerEvent::ScrubReleased),
];

type Handler = Rc<RefCell<dyn FnMut(PlayerEvent)>>;

struct Entry {
    id: u64,
    event: PlayerEvent,
    handler: Handler,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<Entry>,
}

/// Single-threaded event hub
///
/// Cloning a hub yields another handle to the same registry.
#[derive(Clone, Default)]
pub struct EventHub {
    registry: Rc<RefCell<Registry>>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for one event kind
    pub fn subscribe<F>(&self, event: PlayerEvent, handler: F) -> Subscription
    where
        F: FnMut(PlayerEvent) + 'static,
    {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.push(Entry {
            id,
            event,
            handler: Rc::new(RefCell::new(handler)),
        });

        Subscription {
            id,
            event,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Deliver an event to its handlers in registration order
    ///
    /// Returns the number of handlers called. Handlers may subscribe or
    /// dispose while the event is being delivered; changes take effect on
    /// the next emit.
    pub fn emit(&self, event: PlayerEvent) -> usize {
        let handlers: Vec<Handler> = self
            .registry
            .borrow()
            .entries
            .iter()
            .filter(|entry| entry.event == event)
            .map(|entry| Rc::clone(&entry.handler))
            .collect();

        let mut delivered = 0;
        for handler in handlers {
            // A handler that re-emits its own event would re-enter itself
            if let Ok(mut handler) = handler.try_borrow_mut() {
                (&mut *handler)(event);
                delivered += 1;
            } else {
                tracing::warn!(?event, "Skipping re-entrant handler");
            }
        }
        delivered
    }

    /// Number of live subscriptions
    pub fn len(&self) -> usize {
        self.registry.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Handle to a registered handler
///
/// Detaches on drop. Handles that outlive their hub do nothing.
pub struct Subscription {
    id: u64,
    event: PlayerEvent,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    pub fn event(&self) -> PlayerEvent {
        self.event
    }

    /// Whether the handler is still registered
    pub fn is_active(&self) -> bool {
        self.registry.upgrade().is_some_and(|registry| {
            registry
                .borrow()
                .entries
                .iter()
                .any(|entry| entry.id == self.id)
        })
    }

    /// Detach the handler now
    pub fn dispose(self) {
        drop(self);
    }

    fn detach(&self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };

        // The handler is dropped after the registry borrow ends, since it may
        // own subscriptions of its own
        let removed = {
            let mut registry = registry.borrow_mut();
            registry
                .entries
                .iter()
                .position(|entry| entry.id == self.id)
                .map(|index| registry.entries.remove(index))
        };
        drop(removed);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("event", &self.event)
            .finish()
    }
}
