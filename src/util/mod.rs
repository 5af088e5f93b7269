//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, timers, DOM events,
//! router navigation) behind small types so `gate` services and components
//! stay testable without a browser.

pub mod navigation;
pub mod session_events;
pub mod storage;
pub mod timer;
