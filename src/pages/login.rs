//! Email + password login page.
//!
//! On success the token/profile pair goes through the auth holder, which
//! notifies every subscriber in this tab; the page then routes to the diary
//! list. Other tabs learn about the new session from the `storage` event.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use gate::auth::Navigator;
use leptos::prelude::*;

use crate::state::services::Services;

/// Where a successful login lands.
pub const AFTER_LOGIN_PATH: &str = "/diaries";

/// Trim the email and check both fields are present.
///
/// The password is passed through untouched; surrounding spaces may be part
/// of it.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let services = expect_context::<Services>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let fields = validate_login_input(&email.get_untracked(), &password.get_untracked());
        let (email_value, password_value) = match fields {
            Ok(fields) => fields,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&email_value, &password_value).await {
                Ok(resp) => {
                    let (auth, navigator) = services.with_value(|s| (Rc::clone(&s.auth), Rc::clone(&s.navigator)));
                    match auth.sign_in(&resp.access_token, &resp.user) {
                        Ok(()) => {
                            password.set(String::new());
                            info.set(String::new());
                            navigator.navigate(AFTER_LOGIN_PATH);
                        }
                        Err(e) => {
                            leptos::logging::warn!("sign-in rejected: {e}");
                            info.set(format!("Login failed: {e}"));
                        }
                    }
                }
                Err(e) => info.set(e),
            }
            busy.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (services, email_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"diary"</h1>
                <p class="login-card__subtitle">"Sign in to write"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
