//! Session, overlay, and page-access coordination for the diary client.
//!
//! This crate holds every decision the client makes about who may see what,
//! without touching the browser. The `diary` Leptos crate supplies the
//! browser pieces (storage, timers, router navigation) through the traits
//! defined here and wraps the services in reactive signals.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Named timing constants, routes, and storage key names |
//! | [`storage`] | Key-value storage trait and in-memory implementation |
//! | [`session`] | Session model and persisted token/profile pair |
//! | [`events`] | Session-changed bus with local and cross-context publishers |
//! | [`auth`] | Auth state holder: hydration, login, sign-in, logout |
//! | [`modal`] | Overlay content and the modal stack manager |
//! | [`policy`] | Static page-to-access-policy table |
//! | [`access`] | Page-level access gate and per-action guard |

pub mod access;
pub mod auth;
pub mod config;
pub mod events;
pub mod modal;
pub mod policy;
pub mod session;
pub mod storage;
