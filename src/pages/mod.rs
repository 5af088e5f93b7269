//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages stay thin: access is decided by `components::access_guard` before a
//! page mounts, and per-action checks go through
//! `components::members_only_button`.

pub mod diaries;
pub mod diary_detail;
pub mod diary_new;
pub mod home;
pub mod login;
pub mod pictures;
