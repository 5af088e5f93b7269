//! The single overlay surface for the whole app.

use std::rc::Rc;

use leptos::prelude::*;

use crate::state::modal::ModalController;
use crate::state::services::Services;

/// Renders the top of the modal stack.
///
/// Backdrop click and Escape close the overlay; action buttons run their
/// effect through the tab's navigator. The dialog takes focus when it opens
/// so Escape reaches it without a click first.
#[component]
pub fn ModalHost() -> impl IntoView {
    let modals = expect_context::<ModalController>();
    let services = expect_context::<Services>();

    let dialog_ref = NodeRef::<leptos::html::Div>::new();

    on_cleanup(move || modals.cancel_pending());

    Effect::new(move || {
        let Some(dialog) = dialog_ref.get() else {
            return;
        };
        if !modals.is_open() {
            return;
        }
        #[cfg(feature = "hydrate")]
        if let Err(e) = dialog.focus() {
            leptos::logging::warn!("modal focus failed: {e:?}");
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = dialog;
    });

    let on_backdrop = move |_| modals.close();
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            modals.close();
        }
    };

    move || {
        modals.view().map(|view| {
            let backdrop_class = view.backdrop_class();
            let dialog_class = view.dialog_class();
            let buttons = view
                .labels
                .into_iter()
                .enumerate()
                .map(|(index, label)| {
                    let on_click = move |_| {
                        let navigator = services.with_value(|s| Rc::clone(&s.navigator));
                        modals.activate(index, navigator.as_ref());
                    };
                    view! {
                        <button class="btn modal__action" on:click=on_click>
                            {label}
                        </button>
                    }
                })
                .collect_view();
            view! {
                <div class=backdrop_class on:click=on_backdrop>
                    <div
                        node_ref=dialog_ref
                        class=dialog_class
                        role="dialog"
                        aria-modal="true"
                        tabindex="0"
                        on:click=move |ev| ev.stop_propagation()
                        on:keydown=on_keydown
                    >
                        <h2 class="modal__title">{view.title}</h2>
                        <p class="modal__body">{view.body}</p>
                        <div class="modal__actions">{buttons}</div>
                    </div>
                </div>
            }
        })
    }
}
