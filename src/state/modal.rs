//! Reactive wrapper around the `gate` modal stack.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`ModalController`] is a `Copy` handle provided through context. Any
//! component may open, nest, or close overlays through it; the modal host
//! renders from [`ModalView`] and schedules the delayed content clear.
//!
//! The stack holds `Rc` callbacks, so it lives in local (non-`Send`) signal
//! storage.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use gate::auth::Navigator;
use gate::config::GateConfig;
use gate::modal::{CloseTicket, ModalContent, ModalEffect, ModalStack};
use leptos::prelude::*;

use crate::util::timer::Timer;

/// Render-ready projection of the top overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalView {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
    /// `false` while the overlay animates closed.
    pub open: bool,
    /// Shown above another overlay.
    pub nested: bool,
}

impl ModalView {
    /// Project the top of `stack`, including an overlay that is closing.
    pub fn from_stack(stack: &ModalStack) -> Option<Self> {
        let content = stack.current()?;
        Some(Self {
            title: content.title.clone(),
            body: content.body.clone(),
            labels: content.actions.iter().map(|a| a.label.clone()).collect(),
            open: stack.is_open(),
            nested: stack.depth() > 1,
        })
    }

    /// CSS modifier for the backdrop.
    pub fn backdrop_class(&self) -> &'static str {
        if self.open { "modal-backdrop modal-backdrop--open" } else { "modal-backdrop modal-backdrop--closing" }
    }

    /// CSS modifier for the dialog box.
    pub fn dialog_class(&self) -> &'static str {
        if self.nested { "modal modal--nested" } else { "modal" }
    }
}

/// Shared handle for opening and closing overlays.
#[derive(Clone, Copy)]
pub struct ModalController {
    stack: RwSignal<ModalStack, LocalStorage>,
    pending_clear: StoredValue<Option<Timer>, LocalStorage>,
    close_delay_ms: u32,
}

impl ModalController {
    pub fn new(config: &GateConfig) -> Self {
        Self {
            stack: RwSignal::new_local(ModalStack::new()),
            pending_clear: StoredValue::new_local(None),
            close_delay_ms: config.modal_close_delay_ms(),
        }
    }

    /// Replace whatever is on screen with `content`.
    pub fn open(&self, content: ModalContent) {
        self.stack.update(|s| s.open(content));
    }

    /// Show `content` above the current overlay.
    pub fn push(&self, content: ModalContent) {
        self.stack.update(|s| s.push(content));
    }

    /// Close the top overlay; content clears after the close delay.
    pub fn close(&self) {
        let ticket = self.stack.try_update(ModalStack::close).flatten();
        if let Some(ticket) = ticket {
            self.schedule_clear(ticket);
        }
    }

    /// Run action `index` of the top overlay.
    pub fn activate(&self, index: usize, navigator: &dyn Navigator) {
        let Some(activation) = self.stack.try_update(|s| s.activate(index)).flatten() else {
            return;
        };
        if let Some(ticket) = activation.close {
            self.schedule_clear(ticket);
        }
        match activation.effect {
            ModalEffect::Dismiss => {}
            ModalEffect::Navigate(path) => navigator.navigate(&path),
            ModalEffect::Run(callback) => callback.run(),
        }
    }

    /// Tracked read of the top overlay.
    pub fn view(&self) -> Option<ModalView> {
        self.stack.with(ModalView::from_stack)
    }

    /// Tracked read of the open flag.
    pub fn is_open(&self) -> bool {
        self.stack.with(ModalStack::is_open)
    }

    /// Drop a pending content clear; used when the host unmounts.
    pub fn cancel_pending(&self) {
        self.pending_clear.update_value(|pending| {
            pending.take();
        });
    }

    fn schedule_clear(&self, ticket: CloseTicket) {
        let stack = self.stack;
        let timer = Timer::after(self.close_delay_ms, move || {
            stack.update(|s| {
                s.finish_close(ticket);
            });
        });
        self.pending_clear.set_value(Some(timer));
    }
}
