//! Public picture gallery.

use leptos::prelude::*;

#[component]
pub fn PicturesPage() -> impl IntoView {
    view! {
        <section class="pictures">
            <h1>"Pictures"</h1>
            <p class="pictures__empty">"No pictures yet."</p>
        </section>
    }
}
