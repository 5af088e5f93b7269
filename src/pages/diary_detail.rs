//! Single diary entry. Members-only by policy.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
pub fn DiaryDetailPage() -> impl IntoView {
    let params = use_params_map();
    let diary_id = move || params.read().get("id").unwrap_or_default();

    view! {
        <article class="diary">
            <h1>"Diary "{diary_id}</h1>
            <p class="diary__body">"Nothing written here yet."</p>
        </article>
    }
}
