//! HTTP access to the DMCP backend
//!
//! All backend calls go through [`ApiClient`] so that bearer-token
//! attachment, transport-security enforcement and 401 detection stay in
//! one place. Console pages never issue raw fetches.

mod client;
mod envelope;
mod error;
mod types;
mod url;

pub use client::ApiClient;
pub use envelope::{ApiMessage, Envelope};
pub use error::ApiError;
pub use types::*;
pub use url::{enforce_https, join_url};
