//! Reactive auth snapshot for the current tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrors the `gate` auth holder into a signal. The holder pushes every new
//! session through [`AuthState::apply`]; the app flips `ready` once the
//! hydration-ready delay has elapsed, which is what releases the page gate.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use gate::session::Session;

/// Authentication state as rendered by the UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub session: Session,
    /// `true` until the first hydration lands.
    pub loading: bool,
    /// `true` once the hydration-ready delay has elapsed.
    pub ready: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: Session::logged_out(),
            loading: true,
            ready: false,
        }
    }
}

impl AuthState {
    /// Take a snapshot produced by hydration.
    pub fn apply(&mut self, session: &Session) {
        self.session = session.clone();
        self.loading = false;
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in
    }

    /// Name shown in the header; members without a profile get a placeholder.
    pub fn display_name(&self) -> Option<String> {
        if !self.session.is_logged_in {
            return None;
        }
        Some(self.session.user_name().unwrap_or("member").to_owned())
    }
}
