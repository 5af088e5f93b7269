//! Landing page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home">
            <h1>"diary"</h1>
            <p>"A small place for daily notes and pictures."</p>
            <A href="/diaries">"Read diaries"</A>
        </section>
    }
}
