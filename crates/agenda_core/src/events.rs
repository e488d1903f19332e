//! Host event capability: hash changes, history pops and key presses.

use std::{
    collections::BTreeMap,
    fmt,
    sync::{Arc, Mutex, Weak},
};

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    HashChange,
    PopState,
    KeyDown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Space,
    Other(String),
}

impl Key {
    pub fn activates(&self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    /// Date of the day header holding keyboard focus, if any.
    pub focused_day: Option<String>,
}

impl KeyPress {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            focused_day: None,
        }
    }

    pub fn on_day(key: Key, date: impl Into<String>) -> Self {
        Self {
            key,
            focused_day: Some(date.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    HashChange,
    PopState,
    KeyDown(KeyPress),
}

impl HostEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            HostEvent::HashChange => EventKind::HashChange,
            HostEvent::PopState => EventKind::PopState,
            HostEvent::KeyDown(_) => EventKind::KeyDown,
        }
    }
}

pub type EventHandler = Arc<dyn Fn(&HostEvent) + Send + Sync>;

/// Unsubscribes its handler when dropped.
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

pub trait EventSource {
    fn subscribe(&self, kind: EventKind, handler: EventHandler) -> Subscription;
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: BTreeMap<u64, (EventKind, EventHandler)>,
}

/// In-memory event emitter. Handlers run on the emitting thread, outside the lock.
#[derive(Clone, Default)]
pub struct EventBus {
    registry: Arc<Mutex<Registry>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers `event` to every current subscriber of its kind; returns how many ran.
    pub fn emit(&self, event: HostEvent) -> usize {
        let kind = event.kind();
        let handlers: Vec<EventHandler> = {
            let registry = self
                .registry
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            registry
                .handlers
                .values()
                .filter(|(k, _)| *k == kind)
                .map(|(_, handler)| Arc::clone(handler))
                .collect()
        };
        for handler in &handlers {
            handler(&event);
        }
        handlers.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .handlers
            .len()
    }
}

impl EventSource for EventBus {
    fn subscribe(&self, kind: EventKind, handler: EventHandler) -> Subscription {
        let id = {
            let mut registry = self
                .registry
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            let id = registry.next_id;
            registry.next_id += 1;
            registry.handlers.insert(id, (kind, handler));
            id
        };
        debug!(?kind, id, "event handler subscribed");

        let registry: Weak<Mutex<Registry>> = Arc::downgrade(&self.registry);
        Subscription::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner())
                    .handlers
                    .remove(&id);
                debug!(?kind, id, "event handler unsubscribed");
            }
        })
    }
}
