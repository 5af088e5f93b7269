//! Cross-tab session change listener.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser fires `storage` on *other* tabs when one tab writes
//! `localStorage`. This listener forwards writes to the session keys into
//! the bus's cross-context publisher; same-tab writes are published locally
//! by the auth holder itself.

#[cfg(test)]
#[path = "session_events_test.rs"]
mod session_events_test;

use std::rc::Rc;

use gate::events::SessionBus;

#[cfg(feature = "hydrate")]
use gate::session::is_session_key;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(feature = "hydrate")]
const STORAGE_EVENT: &str = "storage";

/// Installed `storage` listener; dropping it detaches from the window.
pub struct StorageListener {
    #[cfg(feature = "hydrate")]
    callback: Option<Closure<dyn Fn(web_sys::StorageEvent)>>,
}

/// Attach a window `storage` listener that publishes cross-context changes.
pub fn install_cross_tab_listener(bus: Rc<SessionBus>) -> StorageListener {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return StorageListener { callback: None };
        };
        let callback = Closure::<dyn Fn(web_sys::StorageEvent)>::new(move |ev: web_sys::StorageEvent| {
            if is_session_key(ev.key().as_deref()) {
                bus.publish_cross_context();
            }
        });
        if window
            .add_event_listener_with_callback(STORAGE_EVENT, callback.as_ref().unchecked_ref())
            .is_err()
        {
            leptos::logging::warn!("failed to attach storage listener; other tabs will not sync");
            return StorageListener { callback: None };
        }
        StorageListener { callback: Some(callback) }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = bus;
        StorageListener {}
    }
}

impl Drop for StorageListener {
    fn drop(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            let Some(callback) = self.callback.take() else {
                return;
            };
            if let Some(window) = web_sys::window() {
                if window
                    .remove_event_listener_with_callback(STORAGE_EVENT, callback.as_ref().unchecked_ref())
                    .is_err()
                {
                    leptos::logging::warn!("failed to detach storage listener");
                }
            }
        }
    }
}
