//! Router-backed [`Navigator`] for `gate` services.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use std::fmt;
use std::rc::Rc;

use gate::auth::Navigator;

/// Adapts a navigate closure (normally `leptos_router::hooks::use_navigate`)
/// to `gate`'s [`Navigator`] trait.
#[derive(Clone)]
pub struct RouterNavigator {
    navigate: Rc<dyn Fn(&str)>,
}

impl RouterNavigator {
    pub fn new(navigate: impl Fn(&str) + 'static) -> Self {
        Self { navigate: Rc::new(navigate) }
    }
}

impl fmt::Debug for RouterNavigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RouterNavigator")
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, path: &str) {
        (self.navigate)(path);
    }
}
