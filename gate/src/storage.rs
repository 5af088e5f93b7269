//! Key-value storage seam for persisted session data.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser this is `localStorage`; tests and server rendering use
//! [`MemoryStore`]. Methods take `&self` because the browser store is a
//! shared handle whose writes are visible to every holder.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// String key-value storage with `localStorage` semantics.
pub trait SessionStore {
    /// Read the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str);
    /// Remove `key`; removing an absent key is a no-op.
    fn remove_item(&self, key: &str);
}

/// In-memory store. Clones share the same backing map, which lets tests
/// model two browser tabs over one origin's storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Remove every key.
    pub fn clear(&self) {
        self.items.borrow_mut().clear();
    }
}

impl SessionStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}
