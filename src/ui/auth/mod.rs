//! Authentication UI module
//!
//! Reactive wrapper over the session state machine, plus the login form
//! and the header user menu.

mod context;
mod login_form;
mod user_menu;

pub use context::{AuthContext, provide_auth_context, use_auth_context};
pub use login_form::LoginForm;
pub use user_menu::UserMenu;
