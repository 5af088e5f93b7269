//! Public diary list.
//!
//! Anyone may read the list; writing a new entry is members-only and is
//! checked when the button is pressed.

use std::rc::Rc;

use gate::auth::Navigator;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::members_only_button::MembersOnlyButton;
use crate::state::services::Services;

/// Path of the compose page.
pub const NEW_DIARY_PATH: &str = "/diaries/new";

#[component]
pub fn DiariesPage() -> impl IntoView {
    let services = expect_context::<Services>();

    let write = Callback::new(move |()| {
        let navigator = services.with_value(|s| Rc::clone(&s.navigator));
        navigator.navigate(NEW_DIARY_PATH);
    });

    view! {
        <section class="diaries">
            <header class="diaries__header">
                <h1>"Diaries"</h1>
                <MembersOnlyButton label="write diary" class="btn--primary" on_allowed=write/>
            </header>
            <ul class="diaries__list">
                <li>
                    <A href="/diaries/1">"First entry"</A>
                </li>
            </ul>
        </section>
    }
}
