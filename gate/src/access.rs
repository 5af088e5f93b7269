//! Page-level access gate and per-action guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gate sits between the router and page content. It stays `NotReady`
//! until the auth holder has hydrated, then resolves the current path against
//! the [`PolicyTable`]. A denied members-only page renders nothing and asks
//! the modal stack for a "login required" prompt, at most once per path entry.
//!
//! Unresolved paths are public (fail open); members-only paths without a
//! session are denied (fail closed).

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

use crate::config::GateConfig;
use crate::modal::{ModalAction, ModalContent};
use crate::policy::{AccessType, PolicyTable, normalize_path};
use crate::session::Session;

pub const LOGIN_REQUIRED_TITLE: &str = "login required";
pub const PAGE_LOGIN_REQUIRED_BODY: &str = "This page is for members only. Please log in to continue.";
pub const ACTION_LOGIN_REQUIRED_BODY: &str = "You need to be logged in to do that.";

/// Whether the current page may render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateState {
    /// Session not hydrated yet; render nothing.
    #[default]
    NotReady,
    Authorized,
    /// Render nothing.
    Unauthorized,
}

/// Outcome of one gate evaluation.
#[derive(Debug)]
pub struct GateDecision {
    pub state: GateState,
    /// Overlay to open, present only the first time a path entry is denied.
    pub prompt: Option<ModalContent>,
}

/// Per-path-entry access state machine.
#[derive(Debug)]
pub struct AccessGate {
    path: String,
    ready: bool,
    prompt_shown: bool,
    state: GateState,
    login_path: String,
}

impl AccessGate {
    #[must_use]
    pub fn new(path: &str, config: &GateConfig) -> Self {
        Self {
            path: normalize_path(path).to_owned(),
            ready: false,
            prompt_shown: false,
            state: GateState::NotReady,
            login_path: config.login_path.clone(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// State from the latest evaluation.
    #[must_use]
    pub fn state(&self) -> GateState {
        self.state
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Record that the auth holder finished its first hydration.
    pub fn mark_ready(&mut self) {
        self.ready = true;
    }

    /// Move to a new path. Returns `true` when the path actually changed, in
    /// which case the prompt may be shown again.
    pub fn navigate(&mut self, path: &str) -> bool {
        let path = normalize_path(path);
        if path == self.path {
            return false;
        }
        path.clone_into(&mut self.path);
        self.prompt_shown = false;
        true
    }

    /// Resolve access for the current path against `session`.
    pub fn evaluate(&mut self, policies: &PolicyTable, session: &Session) -> GateDecision {
        let state = if self.ready {
            let access = policies.lookup(&self.path).map_or(AccessType::Anyone, |p| p.access);
            decide(access, session)
        } else {
            GateState::NotReady
        };

        if state != self.state {
            log::debug!("access gate {}: {:?} -> {:?}", self.path, self.state, state);
            self.state = state;
        }

        let prompt = if state == GateState::Unauthorized && !self.prompt_shown {
            self.prompt_shown = true;
            Some(login_required_prompt(&self.login_path))
        } else {
            None
        };
        GateDecision { state, prompt }
    }

    /// Whether protected content may be placed in the document.
    #[must_use]
    pub fn renders_content(&self) -> bool {
        self.state == GateState::Authorized
    }
}

fn decide(access: AccessType, session: &Session) -> GateState {
    match access {
        AccessType::Anyone => GateState::Authorized,
        AccessType::MembersOnly if session.is_logged_in => GateState::Authorized,
        AccessType::MembersOnly => GateState::Unauthorized,
    }
}

/// Single-action page prompt whose confirm goes to the login page.
#[must_use]
pub fn login_required_prompt(login_path: &str) -> ModalContent {
    ModalContent::alert(
        LOGIN_REQUIRED_TITLE,
        PAGE_LOGIN_REQUIRED_BODY,
        ModalAction::navigate("confirm", login_path),
    )
}

/// Result of [`guard_action`].
#[derive(Debug)]
pub enum ActionGuard {
    Allowed,
    /// Show this cancel / go-to-login overlay instead of running the action.
    Denied(ModalContent),
}

/// Members-only check for a single user action, evaluated at click time.
#[must_use]
pub fn guard_action(session: &Session, config: &GateConfig) -> ActionGuard {
    if session.is_logged_in {
        return ActionGuard::Allowed;
    }
    ActionGuard::Denied(ModalContent::confirm(
        LOGIN_REQUIRED_TITLE,
        ACTION_LOGIN_REQUIRED_BODY,
        ModalAction::dismiss("cancel"),
        ModalAction::navigate("go to login", config.login_path.as_str()),
    ))
}
