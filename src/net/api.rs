//! REST helpers for the diary auth API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error, since login only happens in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` with a message suitable for the login
//! form; nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use gate::session::User;
use serde::Deserialize;
#[cfg(any(test, feature = "hydrate"))]
use serde::Serialize;

/// Credential exchange endpoint.
pub const LOGIN_ENDPOINT: &str = "/api/auth/login";

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Token and profile issued by a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub user: User,
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    match status {
        400 | 401 => "Email or password is incorrect.".to_owned(),
        _ => format!("login failed: {status}"),
    }
}

/// Exchange credentials for a token/profile pair.
///
/// # Errors
///
/// Returns a displayable message for transport failures, non-2xx statuses,
/// and malformed responses.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(&LoginRequest { email, password })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(login_failed_message(resp.status()));
        }
        resp.json::<LoginResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}
