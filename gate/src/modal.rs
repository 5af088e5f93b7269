//! Overlay content and the modal stack manager.
//!
//! DESIGN
//! ======
//! At most one overlay is visible: the top of a LIFO stack. `open` keeps the
//! single-slot contract (replace the top, last write wins) while `push` lets a
//! caller nest a child that reveals its parent again when closed.
//!
//! Closing is two-phase. `close` flips the open flag immediately and hands
//! back a [`CloseTicket`]; the host waits out the exit animation and calls
//! `finish_close`, which only clears content if nothing was opened since.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use std::fmt;
use std::rc::Rc;

/// Callback attached to an overlay action.
#[derive(Clone)]
pub struct ActionCallback(Rc<dyn Fn()>);

impl ActionCallback {
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn run(&self) {
        (self.0)();
    }
}

impl fmt::Debug for ActionCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ActionCallback(..)")
    }
}

/// What activating an overlay action does once the overlay is closed.
#[derive(Clone, Debug)]
pub enum ModalEffect {
    /// Just close.
    Dismiss,
    /// Close and route to the given path.
    Navigate(String),
    /// Close and run a caller-supplied callback.
    Run(ActionCallback),
}

/// A labeled button on an overlay.
#[derive(Clone, Debug)]
pub struct ModalAction {
    pub label: String,
    pub effect: ModalEffect,
}

impl ModalAction {
    pub fn dismiss(label: impl Into<String>) -> Self {
        Self { label: label.into(), effect: ModalEffect::Dismiss }
    }

    pub fn navigate(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self { label: label.into(), effect: ModalEffect::Navigate(path.into()) }
    }

    pub fn run(label: impl Into<String>, f: impl Fn() + 'static) -> Self {
        Self { label: label.into(), effect: ModalEffect::Run(ActionCallback::new(f)) }
    }
}

/// One or two actions, in display order.
#[derive(Clone, Debug)]
pub struct ModalActions {
    first: ModalAction,
    second: Option<ModalAction>,
}

impl ModalActions {
    #[must_use]
    pub fn single(action: ModalAction) -> Self {
        Self { first: action, second: None }
    }

    #[must_use]
    pub fn pair(first: ModalAction, second: ModalAction) -> Self {
        Self { first, second: Some(second) }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        if self.second.is_some() { 2 } else { 1 }
    }

    /// Always `false`; an overlay has at least one action.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ModalAction> {
        match index {
            0 => Some(&self.first),
            1 => self.second.as_ref(),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModalAction> {
        std::iter::once(&self.first).chain(self.second.iter())
    }
}

/// Description of what an overlay shows.
#[derive(Clone, Debug)]
pub struct ModalContent {
    pub title: String,
    pub body: String,
    pub actions: ModalActions,
}

impl ModalContent {
    /// Single-action overlay.
    pub fn alert(title: impl Into<String>, body: impl Into<String>, action: ModalAction) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            actions: ModalActions::single(action),
        }
    }

    /// Two-action overlay, typically cancel then confirm.
    pub fn confirm(
        title: impl Into<String>,
        body: impl Into<String>,
        cancel: ModalAction,
        confirm: ModalAction,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            actions: ModalActions::pair(cancel, confirm),
        }
    }
}

/// Proof of a `close` call, redeemed by [`ModalStack::finish_close`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CloseTicket(u64);

/// Result of activating an overlay action.
#[derive(Debug)]
pub struct Activation {
    /// Effect the host must carry out now that the overlay is closed.
    pub effect: ModalEffect,
    /// Present when the overlay fully closed and content should be cleared
    /// after the close delay.
    pub close: Option<CloseTicket>,
}

/// The modal stack manager.
#[derive(Debug, Default)]
pub struct ModalStack {
    entries: Vec<ModalContent>,
    open: bool,
    generation: u64,
}

impl ModalStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `content`, replacing whatever is on top.
    pub fn open(&mut self, content: ModalContent) {
        if self.open {
            log::debug!("replacing open overlay with {:?}", content.title);
        } else {
            // A closing overlay may still hold content; the new one takes its slot.
            self.entries.clear();
        }
        self.entries.pop();
        self.entries.push(content);
        self.open = true;
        self.generation += 1;
    }

    /// Show `content` above the current overlay. Equivalent to `open` when
    /// nothing is open.
    pub fn push(&mut self, content: ModalContent) {
        if !self.open {
            self.open(content);
            return;
        }
        self.entries.push(content);
        self.generation += 1;
    }

    /// Close the top overlay.
    ///
    /// A nested child pops immediately and its parent stays visible. The last
    /// overlay flips to closed but keeps its content until `finish_close` is
    /// called with the returned ticket.
    pub fn close(&mut self) -> Option<CloseTicket> {
        if !self.open {
            return None;
        }
        self.generation += 1;
        if self.entries.len() > 1 {
            self.entries.pop();
            return None;
        }
        self.open = false;
        Some(CloseTicket(self.generation))
    }

    /// Clear content after the close delay. Returns `false` if an overlay
    /// opened in the meantime, in which case nothing is cleared.
    pub fn finish_close(&mut self, ticket: CloseTicket) -> bool {
        if self.open || ticket.0 != self.generation {
            return false;
        }
        self.entries.clear();
        true
    }

    /// Close the overlay through action `index` and return its effect.
    ///
    /// Returns `None` when nothing is open or the index is out of range.
    pub fn activate(&mut self, index: usize) -> Option<Activation> {
        if !self.open {
            return None;
        }
        let effect = self.entries.last()?.actions.get(index)?.effect.clone();
        let close = self.close();
        Some(Activation { effect, close })
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The overlay on screen, if open.
    #[must_use]
    pub fn visible(&self) -> Option<&ModalContent> {
        if self.open { self.entries.last() } else { None }
    }

    /// The top content, including one that is animating closed.
    #[must_use]
    pub fn current(&self) -> Option<&ModalContent> {
        self.entries.last()
    }

    /// Number of stacked overlays, including one that is animating closed.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.entries.len()
    }
}
