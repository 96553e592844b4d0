pub mod auth;
pub mod guard;
pub mod icon;
pub mod layout;
pub mod notifications;
pub mod pages;
pub mod session;
pub mod theme;

pub use guard::{ProtectedRoute, PublicRoute};
pub use icon::{Icon, icons};
pub use layout::ConsoleLayout;
pub use notifications::{ToastContainer, ToastManager};
pub use session::{ExpiryNotifier, SessionExpiredDialog, provide_session_context};

use crate::core::api::ApiClient;
use leptos::prelude::*;

/// API client from the component tree.
pub fn use_api_client() -> ApiClient {
    expect_context::<ApiClient>()
}
