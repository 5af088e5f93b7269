//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `gate` services are built once per tab in [`services`] and provided
//! through context; [`auth`] and [`modal`] hold the reactive mirrors that
//! components render from.

pub mod auth;
pub mod modal;
pub mod services;
