//! Session-changed bus.
//!
//! DESIGN
//! ======
//! The browser's `storage` event only fires in *other* tabs, so a same-tab
//! write needs its own signal. Both arrive here as one [`ChangeSource`]-tagged
//! notification and reach the same listeners, so neither path can be wired
//! to a different re-hydration routine than the other.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Where a session change was observed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeSource {
    /// A login/logout write in this tab.
    Local,
    /// A storage write from another tab or window.
    CrossContext,
}

/// Handle returned by [`SessionBus::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Rc<dyn Fn(ChangeSource)>;

/// Zero-payload "session changed" broadcast with two publishers.
#[derive(Default)]
pub struct SessionBus {
    listeners: RefCell<Vec<(ListenerId, Listener)>>,
    next_id: Cell<u64>,
}

impl fmt::Debug for SessionBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionBus")
            .field("listeners", &self.listener_count())
            .finish_non_exhaustive()
    }
}

impl SessionBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for every future change.
    pub fn subscribe(&self, listener: impl Fn(ChangeSource) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Drop a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(lid, _)| *lid != id);
        listeners.len() != before
    }

    /// Publish a change made in this tab.
    pub fn publish_local(&self) {
        self.notify(ChangeSource::Local);
    }

    /// Publish a change observed from another tab or window.
    pub fn publish_cross_context(&self) {
        self.notify(ChangeSource::CrossContext);
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn notify(&self, source: ChangeSource) {
        // Snapshot so listeners may subscribe or unsubscribe while running.
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        log::debug!("session changed ({source:?}), {} listener(s)", listeners.len());
        for listener in listeners {
            listener(source);
        }
    }
}
