//! Timing constants and route configuration.
//!
//! DESIGN
//! ======
//! Every delay the client waits on is named here so tests can step through
//! the "not ready" and "closing" windows without guessing at magic numbers.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// How long a closed overlay keeps its content so the exit animation can run.
pub const MODAL_CLOSE_DELAY: Duration = Duration::from_millis(300);

/// Wait between the first session hydration and the gate evaluating policy.
///
/// Zero still yields one macrotask, which is enough for the persisted
/// session to be read before any protected content is considered.
pub const HYDRATION_READY_DELAY: Duration = Duration::ZERO;

/// Login entry point every auth redirect lands on.
pub const LOGIN_PATH: &str = "/auth/login";

/// Storage key holding the opaque access token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Storage key holding the serialized user profile.
pub const USER_INFO_KEY: &str = "userInfo";

/// Runtime configuration shared by the auth holder, modal host, and gate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GateConfig {
    pub modal_close_delay: Duration,
    pub hydration_ready_delay: Duration,
    pub login_path: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            modal_close_delay: MODAL_CLOSE_DELAY,
            hydration_ready_delay: HYDRATION_READY_DELAY,
            login_path: LOGIN_PATH.to_owned(),
        }
    }
}

impl GateConfig {
    /// Close delay in whole milliseconds, for timer APIs that take `u32`.
    #[must_use]
    pub fn modal_close_delay_ms(&self) -> u32 {
        u32::try_from(self.modal_close_delay.as_millis()).unwrap_or(u32::MAX)
    }

    /// Hydration-ready delay in whole milliseconds.
    #[must_use]
    pub fn hydration_ready_delay_ms(&self) -> u32 {
        u32::try_from(self.hydration_ready_delay.as_millis()).unwrap_or(u32::MAX)
    }
}
