//! Console pages
//!
//! Every page talks to the backend exclusively through the API client
//! and reads auth state only through the auth context.

mod change_password;
mod data_source_form;
mod data_sources;
mod generate_token;
mod home;
mod login;
mod not_found;
mod profile;
mod tool_form;
mod tools;

pub use change_password::ChangePasswordPage;
pub use data_source_form::{CreateDataSourcePage, EditDataSourcePage};
pub use data_sources::DataSourcesPage;
pub use generate_token::GenerateTokenPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;
pub use tool_form::{CreateToolPage, EditToolPage};
pub use tools::ToolsPage;

use crate::core::api::ApiError;

/// Message a page may show for a failed call.
///
/// Authentication failures return `None`: they are routed through the
/// session expiry dialog and must not double as form errors.
pub(crate) fn form_error(err: ApiError) -> Option<String> {
    if err.is_authentication() {
        None
    } else {
        Some(err.to_string())
    }
}
