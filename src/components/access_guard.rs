//! Page-level access guard wrapping routed content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Re-evaluates the `gate` access gate whenever the path or the auth mirror
//! changes. Content is only mounted while the gate renders content; a denied
//! page mounts nothing, so protected markup never reaches the document.

#[cfg(test)]
#[path = "access_guard_test.rs"]
mod access_guard_test;

use gate::access::AccessGate;
use gate::policy::PolicyTable;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;
use crate::state::modal::ModalController;
use crate::state::services::Services;

/// One gate evaluation for `path`: releases the gate once auth is ready,
/// opens the login prompt when the gate asks for it, and reports whether
/// content may render.
pub(crate) fn step_gate(
    gate: &mut AccessGate,
    path: &str,
    auth: &AuthState,
    policies: &PolicyTable,
    modals: ModalController,
) -> bool {
    if auth.ready {
        gate.mark_ready();
    }
    gate.navigate(path);
    if let Some(prompt) = gate.evaluate(policies, &auth.session).prompt {
        modals.open(prompt);
    }
    gate.renders_content()
}

#[component]
pub fn AccessGuard(children: ChildrenFn) -> impl IntoView {
    let services = expect_context::<Services>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let modals = expect_context::<ModalController>();
    let location = use_location();

    let initial_path = location.pathname.get_untracked();
    let gate = StoredValue::new(services.with_value(|s| AccessGate::new(&initial_path, &s.config)));
    let renders = RwSignal::new(false);

    Effect::new(move || {
        let path = location.pathname.get();
        let auth_state = auth.get();
        let allowed = gate.try_update_value(|g| {
            services.with_value(|s| step_gate(g, &path, &auth_state, &s.policies, modals))
        });
        renders.set(allowed.unwrap_or(false));
    });

    view! {
        <Show
            when=move || renders.get()
            fallback=move || {
                view! {
                    <div class="access-guard" aria-busy=move || auth.with(|a| a.loading)></div>
                }
            }
        >
            {children()}
        </Show>
    }
}
