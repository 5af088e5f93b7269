//! Layout chrome around routed pages: header, banner, navigation, footer.
//!
//! Which pieces render is decided per path by the policy table's
//! [`LayoutFlags`](gate::policy::LayoutFlags).

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;
use crate::state::services::Services;

#[component]
pub fn PageChrome(children: Children) -> impl IntoView {
    let services = expect_context::<Services>();
    let location = use_location();

    let layout = Memo::new(move |_| {
        let path = location.pathname.get();
        services.with_value(|s| s.policies.policy_for(&path).layout)
    });

    view! {
        <div class="page">
            <Show when=move || layout.get().header>
                <Header/>
            </Show>
            <Show when=move || layout.get().banner>
                <section class="page__banner">
                    <p>"Write a line a day. Keep it forever."</p>
                </section>
            </Show>
            <Show when=move || layout.get().navigation>
                <nav class="page__nav">
                    <A href="/diaries">"Diaries"</A>
                    <A href="/pictures">"Pictures"</A>
                </nav>
            </Show>
            <main class="page__main">{children()}</main>
            <Show when=move || layout.get().footer>
                <footer class="page__footer">"diary"</footer>
            </Show>
        </div>
    }
}

/// App title plus the login button or the member's name and logout button.
#[component]
fn Header() -> impl IntoView {
    let services = expect_context::<Services>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let holder = move || services.with_value(|s| Rc::clone(&s.auth));
    let on_login = move |_| holder().login();
    let on_logout = move |_| holder().logout();

    view! {
        <header class="page__header">
            <A href="/">
                <span class="page__title">"diary"</span>
            </A>
            <div class="page__account">
                {move || match auth.get().display_name() {
                    Some(name) => {
                        view! {
                            <span class="page__user">{name}</span>
                            <button class="btn" on:click=on_logout>
                                "logout"
                            </button>
                        }
                            .into_any()
                    }
                    None => {
                        view! {
                            <button class="btn btn--primary" on:click=on_login>
                                "login"
                            </button>
                        }
                            .into_any()
                    }
                }}
            </div>
        </header>
    }
}
