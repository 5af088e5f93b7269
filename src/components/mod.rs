//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read `gate` services, the auth mirror, and the modal controller
//! from Leptos context providers installed by `app::AppFrame`.

pub mod access_guard;
pub mod members_only_button;
pub mod modal_host;
pub mod page_chrome;
