//! Per-tab `gate` services, built once at startup and provided via context.
//!
//! DESIGN
//! ======
//! Nothing here is a global: the app constructs one [`ClientServices`] inside
//! the router, wraps it in local `StoredValue` storage, and hands the `Copy`
//! handle down. Tests build the same struct over a `MemoryStore`.

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

use std::fmt;
use std::rc::Rc;

use gate::auth::{AuthHolder, Navigator};
use gate::config::GateConfig;
use gate::events::SessionBus;
use gate::policy::PolicyTable;
use gate::storage::SessionStore;
use leptos::prelude::*;

/// The auth holder and its collaborators for one tab.
#[derive(Clone)]
pub struct ClientServices {
    pub auth: Rc<AuthHolder>,
    pub bus: Rc<SessionBus>,
    pub navigator: Rc<dyn Navigator>,
    pub policies: Rc<PolicyTable>,
    pub config: GateConfig,
}

impl fmt::Debug for ClientServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientServices")
            .field("auth", &self.auth)
            .field("bus", &self.bus)
            .field("policies", &self.policies.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ClientServices {
    pub fn new(
        store: Rc<dyn SessionStore>,
        navigator: Rc<dyn Navigator>,
        policies: PolicyTable,
        config: GateConfig,
    ) -> Self {
        let bus = Rc::new(SessionBus::new());
        let auth = AuthHolder::new(store, Rc::clone(&navigator), Rc::clone(&bus), &config);
        Self { auth, bus, navigator, policies: Rc::new(policies), config }
    }
}

/// Context handle for [`ClientServices`].
pub type Services = StoredValue<ClientServices, LocalStorage>;

/// Diary policy table, or an empty (all-public) table if it fails to build.
pub fn diary_policies() -> PolicyTable {
    PolicyTable::diary().unwrap_or_else(|e| {
        leptos::logging::error!("diary policy table rejected: {e}");
        PolicyTable::default()
    })
}
