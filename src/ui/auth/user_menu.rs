//! User menu component
//!
//! Dropdown in the top bar showing the current username with profile,
//! password and sign-out entries. Sign-out goes through the auth
//! context; the route guard then takes care of sending the user to the
//! login view.

use leptos::prelude::*;
use leptos_router::components::A;

use super::context::use_auth_context;
use crate::core::session::AuthPhase;
use crate::ui::icon::{Icon, icons};

/// User menu for the top bar
#[component]
pub fn UserMenu() -> impl IntoView {
    let auth = use_auth_context();

    // Dropdown open state
    let menu_open = RwSignal::new(false);

    let handle_logout = move |_| {
        menu_open.set(false);
        auth.logout();
    };

    view! {
        <div class="relative">
            {move || {
                match auth.state.get() {
                    AuthPhase::Initializing => {
                        // Loading skeleton
                        view! {
                            <div class="w-8 h-8 rounded-full bg-theme-secondary animate-pulse"></div>
                        }.into_any()
                    }
                    AuthPhase::Unauthenticated => {
                        view! {
                            <A
                                href="/login"
                                attr:class="px-3 py-1.5 text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors"
                            >
                                "Sign In"
                            </A>
                        }.into_any()
                    }
                    AuthPhase::Authenticated(session) => {
                        let username = session.username.clone();
                        let initial = username
                            .chars()
                            .next()
                            .map(|c| c.to_uppercase().to_string())
                            .unwrap_or_else(|| "?".to_string());

                        view! {
                            <div class="relative">
                                <button
                                    class="flex items-center gap-2 p-1 rounded-lg hover:bg-theme-secondary transition-colors"
                                    on:click=move |_| menu_open.update(|v| *v = !*v)
                                >
                                    <div class="w-8 h-8 rounded-full bg-accent-primary flex items-center justify-center text-white text-sm font-medium">
                                        {initial}
                                    </div>
                                    <span class="hidden sm:block text-sm font-medium text-theme-primary max-w-[120px] truncate">
                                        {username.clone()}
                                    </span>
                                    <div
                                        class="flex items-center justify-center h-4 w-4 text-theme-tertiary transition-transform duration-200"
                                        class=("rotate-180", move || menu_open.get())
                                    >
                                        <Icon name=icons::CHEVRON_DOWN class="h-4 w-4" />
                                    </div>
                                </button>

                                // Dropdown menu
                                {move || {
                                    if menu_open.get() {
                                        let username = username.clone();
                                        Some(view! {
                                            // Invisible backdrop to close menu when clicking outside
                                            <div
                                                class="fixed inset-0 z-40"
                                                on:click=move |_| menu_open.set(false)
                                            ></div>
                                            <div class="absolute right-0 mt-2 w-56 bg-theme-primary rounded-lg shadow-lg border border-theme py-1 z-50">
                                                // User info header
                                                <div class="px-4 py-3 border-b border-theme">
                                                    <p class="text-sm font-medium text-theme-primary truncate">
                                                        {username}
                                                    </p>
                                                </div>

                                                // Menu items
                                                <div class="py-1">
                                                    <A
                                                        href="/profile"
                                                        attr:class="w-full px-4 py-2 text-sm text-left text-theme-primary
                                                               hover:bg-theme-secondary transition-colors flex items-center gap-2"
                                                    >
                                                        <Icon name=icons::USER class="h-4 w-4" />
                                                        "Profile"
                                                    </A>
                                                    <A
                                                        href="/change-password"
                                                        attr:class="w-full px-4 py-2 text-sm text-left text-theme-primary
                                                               hover:bg-theme-secondary transition-colors flex items-center gap-2"
                                                    >
                                                        <Icon name=icons::LOCK class="h-4 w-4" />
                                                        "Change Password"
                                                    </A>
                                                </div>

                                                // Divider
                                                <div class="border-t border-theme my-1"></div>

                                                // Logout
                                                <div class="py-1">
                                                    <button
                                                        class="w-full px-4 py-2 text-sm text-left text-red-500
                                                               hover:bg-red-50 dark:hover:bg-red-900/20 transition-colors
                                                               flex items-center gap-2"
                                                        on:click=handle_logout
                                                    >
                                                        <Icon name=icons::LOGOUT class="h-4 w-4" />
                                                        "Sign Out"
                                                    </button>
                                                </div>
                                            </div>
                                        })
                                    } else {
                                        None
                                    }
                                }}
                            </div>
                        }.into_any()
                    }
                }
            }}
        </div>
    }
}
