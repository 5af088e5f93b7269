//! Auth state holder.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`AuthHolder`] is built per tab at application start and handed to
//! the UI through context. It owns the last-hydrated [`Session`] snapshot and
//! re-reads storage whenever the [`SessionBus`] reports a change, whichever
//! publisher sent it.
//!
//! DESIGN
//! ======
//! Writes never mutate the snapshot directly: `sign_in` and `logout` write
//! storage and publish a local change, and the snapshot only moves through
//! the re-hydration path. A same-tab write and a cross-tab write therefore
//! produce identical state.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::config::GateConfig;
use crate::events::{ChangeSource, ListenerId, SessionBus};
use crate::session::{Session, SessionError, User, clear_session, hydrate_session, write_session};
use crate::storage::SessionStore;

/// Route changes requested by the auth holder.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Handle returned by [`AuthHolder::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Subscriber = Rc<dyn Fn(&Session)>;

/// Session snapshot owner and login/logout entry points.
pub struct AuthHolder {
    store: Rc<dyn SessionStore>,
    navigator: Rc<dyn Navigator>,
    bus: Rc<SessionBus>,
    login_path: String,
    session: RefCell<Session>,
    hydrated: Cell<bool>,
    subscribers: RefCell<Vec<(SubscriberId, Subscriber)>>,
    next_subscriber: Cell<u64>,
    bus_listener: Cell<Option<ListenerId>>,
}

impl fmt::Debug for AuthHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthHolder")
            .field("session", &*self.session.borrow())
            .field("hydrated", &self.hydrated.get())
            .field("login_path", &self.login_path)
            .finish_non_exhaustive()
    }
}

impl AuthHolder {
    /// Build a holder and register its re-hydration routine on `bus`.
    ///
    /// The holder starts un-hydrated with a logged-out snapshot; call
    /// [`AuthHolder::hydrate`] once the host is ready to read storage.
    pub fn new(
        store: Rc<dyn SessionStore>,
        navigator: Rc<dyn Navigator>,
        bus: Rc<SessionBus>,
        config: &GateConfig,
    ) -> Rc<Self> {
        let holder = Rc::new(Self {
            store,
            navigator,
            bus: Rc::clone(&bus),
            login_path: config.login_path.clone(),
            session: RefCell::new(Session::logged_out()),
            hydrated: Cell::new(false),
            subscribers: RefCell::new(Vec::new()),
            next_subscriber: Cell::new(0),
            bus_listener: Cell::new(None),
        });
        let weak: Weak<Self> = Rc::downgrade(&holder);
        let id = bus.subscribe(move |source| {
            if let Some(holder) = weak.upgrade() {
                holder.rehydrate(source);
            }
        });
        holder.bus_listener.set(Some(id));
        holder
    }

    /// Read storage into the snapshot and notify subscribers if it changed.
    ///
    /// Idempotent: re-reading unchanged storage notifies nobody, except on
    /// the first call, which always notifies so subscribers learn the holder
    /// is ready.
    pub fn hydrate(&self) -> Session {
        let next = hydrate_session(self.store.as_ref());
        let first = !self.hydrated.replace(true);
        let changed = *self.session.borrow() != next;
        if changed {
            self.session.replace(next.clone());
        }
        if first || changed {
            self.notify(&next);
        }
        next
    }

    fn rehydrate(&self, source: ChangeSource) {
        log::debug!("re-hydrating session after {source:?} change");
        self.hydrate();
    }

    /// Last-hydrated snapshot. Never touches storage.
    #[must_use]
    pub fn current_session(&self) -> Session {
        self.session.borrow().clone()
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.session.borrow().is_logged_in
    }

    /// Send the visitor to the login entry point. Session is untouched.
    pub fn login(&self) {
        self.navigator.navigate(&self.login_path);
    }

    /// Persist a freshly issued token/profile pair and broadcast the change.
    ///
    /// # Errors
    ///
    /// Propagates [`SessionError`] from [`write_session`]; nothing is
    /// broadcast when the write is rejected.
    pub fn sign_in(&self, token: &str, user: &User) -> Result<(), SessionError> {
        write_session(self.store.as_ref(), token, user)?;
        log::info!("signed in as {}", user.id);
        self.bus.publish_local();
        Ok(())
    }

    /// Clear the persisted pair, broadcast the change, and go to login.
    pub fn logout(&self) {
        clear_session(self.store.as_ref());
        log::info!("signed out");
        self.bus.publish_local();
        self.navigator.navigate(&self.login_path);
    }

    /// Receive every new snapshot produced by hydration.
    pub fn subscribe(&self, subscriber: impl Fn(&Session) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber.get());
        self.next_subscriber.set(self.next_subscriber.get() + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(subscriber)));
        id
    }

    /// Drop a subscriber. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(sid, _)| *sid != id);
        subscribers.len() != before
    }

    fn notify(&self, session: &Session) {
        let subscribers: Vec<Subscriber> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, s)| Rc::clone(s))
            .collect();
        for subscriber in subscribers {
            subscriber(session);
        }
    }
}

impl Drop for AuthHolder {
    fn drop(&mut self) {
        if let Some(id) = self.bus_listener.take() {
            self.bus.unsubscribe(id);
        }
    }
}
