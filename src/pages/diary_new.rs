//! Compose page for a new diary entry. Members-only by policy.
//!
//! The page gate already keeps logged-out visitors out; the save button is
//! checked again at click time because the session can end in another tab
//! while the form is open.

#[cfg(test)]
#[path = "diary_new_test.rs"]
mod diary_new_test;

use gate::modal::{ModalAction, ModalContent};
use leptos::prelude::*;

use crate::components::members_only_button::MembersOnlyButton;
use crate::state::modal::ModalController;

/// Where a saved entry sends the writer.
const DIARY_LIST_PATH: &str = "/diaries";

/// Longest title accepted by the compose form.
pub const MAX_TITLE_CHARS: usize = 80;

/// Trim and check the compose form fields.
pub(crate) fn validate_diary_input(title: &str, body: &str) -> Result<(String, String), &'static str> {
    let title = title.trim();
    let body = body.trim();
    if title.is_empty() || body.is_empty() {
        return Err("Enter both a title and some text.");
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err("Title is too long.");
    }
    Ok((title.to_owned(), body.to_owned()))
}

/// Confirmation shown after a save; its only action returns to the list.
pub(crate) fn saved_prompt(title: &str) -> ModalContent {
    ModalContent::alert(
        "saved",
        format!("\"{title}\" was added to your diary."),
        ModalAction::navigate("confirm", DIARY_LIST_PATH),
    )
}

#[component]
pub fn DiaryNewPage() -> impl IntoView {
    let modals = expect_context::<ModalController>();
    let title = RwSignal::new(String::new());
    let body = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let save = Callback::new(move |()| match validate_diary_input(&title.get_untracked(), &body.get_untracked()) {
        Ok((title_value, _)) => {
            info.set(String::new());
            modals.open(saved_prompt(&title_value));
        }
        Err(msg) => info.set(msg.to_owned()),
    });

    view! {
        <section class="diary-new">
            <h1>"New diary"</h1>
            <form class="diary-form" on:submit=move |ev: leptos::ev::SubmitEvent| ev.prevent_default()>
                <input
                    class="diary-form__title"
                    type="text"
                    placeholder="Title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <textarea
                    class="diary-form__body"
                    placeholder="What happened today?"
                    prop:value=move || body.get()
                    on:input=move |ev| body.set(event_target_value(&ev))
                ></textarea>
                <MembersOnlyButton label="save" class="btn--primary" on_allowed=save/>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="diary-form__message">{move || info.get()}</p>
            </Show>
        </section>
    }
}
