//! Session lifecycle, API access and routing decisions for the console
//!
//! Everything in this module is platform-neutral: the reactive wrappers
//! and browser bindings live under `crate::ui`.

pub mod api;
pub mod config;
pub mod expiry;
pub mod guard;
pub mod session;
pub mod token_store;
