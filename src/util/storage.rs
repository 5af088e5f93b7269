//! Browser `localStorage` adapter for persisted session data.
//!
//! SYSTEM CONTEXT
//! ==============
//! Implements `gate`'s [`SessionStore`] so the auth holder can read and write
//! the token/profile pair. Outside the browser every read misses and every
//! write is dropped, which hydrates as logged out.
//!
//! ERROR HANDLING
//! ==============
//! Storage can be missing (privacy mode) or full (quota). Reads treat either
//! as absent; failed writes are logged and otherwise ignored.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use gate::storage::SessionStore;

/// Handle to the window's `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                leptos::logging::warn!("localStorage unavailable; {key} not saved");
                return;
            };
            if storage.set_item(key, value).is_err() {
                leptos::logging::warn!("localStorage rejected write for {key}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove_item(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if storage.remove_item(key).is_err() {
                    leptos::logging::warn!("localStorage rejected removal of {key}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}
