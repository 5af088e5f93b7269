//! Button whose action is reserved for logged-in members.

use gate::access::{ActionGuard, guard_action};
use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::modal::ModalController;
use crate::state::services::Services;

/// Runs `on_allowed` for members; otherwise opens the cancel / go-to-login
/// prompt. The check uses the session at click time, not at render time.
#[component]
pub fn MembersOnlyButton(
    #[prop(into)] label: String,
    #[prop(optional)] class: &'static str,
    on_allowed: Callback<()>,
) -> impl IntoView {
    let services = expect_context::<Services>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let modals = expect_context::<ModalController>();

    let on_click = move |_| {
        let session = auth.get_untracked().session;
        let verdict = services.with_value(|s| guard_action(&session, &s.config));
        match verdict {
            ActionGuard::Allowed => on_allowed.run(()),
            ActionGuard::Denied(prompt) => modals.open(prompt),
        }
    };

    let class = if class.is_empty() { "btn".to_owned() } else { format!("btn {class}") };

    view! {
        <button class=class on:click=on_click>
            {label}
        </button>
    }
}
