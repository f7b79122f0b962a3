//! Pager events and listener registration.
//!
//! Listeners are registered per [`EventKind`] and invoked synchronously, in
//! registration order, every time an event of that kind is emitted.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Names of the events a pager emits.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A page was shown through navigation.
    Show,
}

/// Events emitted by a pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PagerEvent {
    /// Fired after the current page has been committed by `show`.
    Show {
        /// Zero-based index of the page now current.
        page: usize,
    },
}

impl PagerEvent {
    /// Get the kind of this event.
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Show { .. } => EventKind::Show,
        }
    }

    /// Get the page index carried by this event.
    pub const fn page(&self) -> usize {
        match self {
            Self::Show { page } => *page,
        }
    }
}

/// Handle returned on registration, used to remove a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Callback = Box<dyn FnMut(&PagerEvent)>;

struct Registration {
    id: ListenerId,
    once: bool,
    callback: Callback,
}

/// Ordered listener lists keyed by event kind.
#[derive(Default)]
pub struct EventEmitter {
    next_id: u64,
    listeners: HashMap<EventKind, Vec<Registration>>,
}

impl EventEmitter {
    /// Create an emitter with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` for every event of `kind`.
    pub fn on(
        &mut self,
        kind: EventKind,
        callback: impl FnMut(&PagerEvent) + 'static,
    ) -> ListenerId {
        self.register(kind, false, Box::new(callback))
    }

    /// Register `callback` for the next event of `kind` only.
    pub fn once(
        &mut self,
        kind: EventKind,
        callback: impl FnMut(&PagerEvent) + 'static,
    ) -> ListenerId {
        self.register(kind, true, Box::new(callback))
    }

    fn register(&mut self, kind: EventKind, once: bool, callback: Callback) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.entry(kind).or_default().push(Registration {
            id,
            once,
            callback,
        });
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn off(&mut self, id: ListenerId) -> bool {
        for registrations in self.listeners.values_mut() {
            if let Some(pos) = registrations.iter().position(|r| r.id == id) {
                registrations.remove(pos);
                return true;
            }
        }
        false
    }

    /// Remove every listener for `kind`.
    pub fn off_all(&mut self, kind: EventKind) {
        self.listeners.remove(&kind);
    }

    /// Number of listeners registered for `kind`.
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.get(&kind).map_or(0, Vec::len)
    }

    /// Check if any listener is registered for `kind`.
    pub fn has_listeners(&self, kind: EventKind) -> bool {
        self.listener_count(kind) > 0
    }

    /// Invoke the listeners for `event` in registration order.
    ///
    /// Returns how many listeners were called.
    pub fn emit(&mut self, event: &PagerEvent) -> usize {
        let Some(registrations) = self.listeners.get_mut(&event.kind()) else {
            return 0;
        };

        for registration in registrations.iter_mut() {
            (registration.callback)(event);
        }

        let invoked = registrations.len();
        registrations.retain(|r| !r.once);
        invoked
    }
}

impl fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut counts: Vec<(EventKind, usize)> = self
            .listeners
            .iter()
            .map(|(kind, registrations)| (*kind, registrations.len()))
            .collect();
        counts.sort_by_key(|(kind, _)| kind.to_string());

        f.debug_struct("EventEmitter")
            .field("listeners", &counts)
            .finish()
    }
}
