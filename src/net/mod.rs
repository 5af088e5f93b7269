//! Network helpers for the client.

pub mod api;
