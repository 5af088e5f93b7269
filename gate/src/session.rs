//! Session model and the persisted token/profile pair.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store of record is two storage entries: an opaque access token and a
//! JSON user profile. They are read and written as a pair; the token alone
//! decides whether the visitor is logged in.
//!
//! ERROR HANDLING
//! ==============
//! [`read_session`] reports malformed data; [`hydrate_session`] is the fail
//! closed wrapper every caller uses, turning any error into a logged-out
//! session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::config::{ACCESS_TOKEN_KEY, USER_INFO_KEY};
use crate::storage::SessionStore;

/// Error reading or writing the persisted session pair.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The token to persist was empty or whitespace.
    #[error("access token is empty")]
    EmptyToken,
    /// The stored profile could not be parsed as a [`User`].
    #[error("malformed user profile: {0}")]
    MalformedProfile(#[source] serde_json::Error),
    /// The profile could not be serialized for storage.
    #[error("failed to encode user profile: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Identity of the signed-in diary user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// In-memory view of the visitor's authentication status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub is_logged_in: bool,
    pub user: Option<User>,
}

impl Session {
    /// The fail-closed session: not logged in, no identity.
    #[must_use]
    pub fn logged_out() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn logged_in(user: Option<User>) -> Self {
        Self { is_logged_in: true, user }
    }

    /// Display name, if a profile is present.
    #[must_use]
    pub fn user_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }
}

/// Read the persisted pair from `store`.
///
/// A missing or blank token means logged out regardless of the profile. A
/// token without a profile is logged in with no identity.
///
/// # Errors
///
/// Returns [`SessionError::MalformedProfile`] when a token is present but the
/// stored profile is not valid `User` JSON.
pub fn read_session(store: &dyn SessionStore) -> Result<Session, SessionError> {
    let Some(token) = store.get_item(ACCESS_TOKEN_KEY) else {
        return Ok(Session::logged_out());
    };
    if token.trim().is_empty() {
        return Ok(Session::logged_out());
    }
    let Some(raw) = store.get_item(USER_INFO_KEY) else {
        return Ok(Session::logged_in(None));
    };
    let user = serde_json::from_str::<User>(&raw).map_err(SessionError::MalformedProfile)?;
    Ok(Session::logged_in(Some(user)))
}

/// Read the persisted session, treating malformed data as logged out.
pub fn hydrate_session(store: &dyn SessionStore) -> Session {
    match read_session(store) {
        Ok(session) => session,
        Err(e) => {
            log::warn!("discarding persisted session: {e}");
            Session::logged_out()
        }
    }
}

/// Persist a token/profile pair.
///
/// # Errors
///
/// Returns [`SessionError::EmptyToken`] for a blank token and
/// [`SessionError::Encode`] if the profile cannot be serialized. Nothing is
/// written on error.
pub fn write_session(store: &dyn SessionStore, token: &str, user: &User) -> Result<(), SessionError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(SessionError::EmptyToken);
    }
    let profile = serde_json::to_string(user).map_err(SessionError::Encode)?;
    // Profile first: a visible token always has its profile next to it.
    store.set_item(USER_INFO_KEY, &profile);
    store.set_item(ACCESS_TOKEN_KEY, token);
    Ok(())
}

/// Remove the persisted pair, token first.
pub fn clear_session(store: &dyn SessionStore) {
    store.remove_item(ACCESS_TOKEN_KEY);
    store.remove_item(USER_INFO_KEY);
}

/// Whether a storage change for `key` can affect the session.
///
/// `None` is a full storage clear, which always does.
#[must_use]
pub fn is_session_key(key: Option<&str>) -> bool {
    key.is_none_or(|k| k == ACCESS_TOKEN_KEY || k == USER_INFO_KEY)
}
