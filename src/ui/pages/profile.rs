//! Profile page
//!
//! Read-only view of the current user record, with entry points to the
//! password page and sign-out.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::form_error;
use crate::core::api::UserProfile;
use crate::ui::auth::use_auth_context;
use crate::ui::icon::{Icon, icons};
use crate::ui::use_api_client;

/// Profile page component
#[component]
pub fn ProfilePage() -> impl IntoView {
    let client = use_api_client();
    let auth = use_auth_context();

    let profile = RwSignal::new(None::<UserProfile>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        let client = client.clone();
        spawn_local(async move {
            loading.set(true);
            match client.current_user().await {
                Ok(user) => profile.set(Some(user)),
                Err(err) => {
                    if let Some(msg) = form_error(err) {
                        error.set(Some(msg));
                    }
                }
            }
            loading.set(false);
        });
    });

    view! {
        <div class="max-w-2xl">
            <h1 class="text-2xl font-bold text-theme-primary mb-8">"Profile"</h1>

            {move || {
                error.get().map(|err| view! {
                    <div class="mb-6 p-4 bg-red-100 dark:bg-red-900/30 border border-red-300 dark:border-red-700 rounded-lg">
                        <p class="text-sm text-red-700 dark:text-red-300">{err}</p>
                    </div>
                })
            }}

            {move || {
                if loading.get() {
                    return Some(view! {
                        <div class="flex items-center justify-center py-20">
                            <Icon name=icons::LOADER class="animate-spin h-8 w-8 text-accent-primary" />
                        </div>
                    }.into_any());
                }
                profile.get().map(|user| {
                    let initial = user
                        .username
                        .chars()
                        .next()
                        .map(|c| c.to_uppercase().to_string())
                        .unwrap_or_else(|| "?".to_string());
                    let member_since = user
                        .created_at
                        .split('T')
                        .next()
                        .unwrap_or(&user.created_at)
                        .to_string();

                    view! {
                        <div class="space-y-6">
                            // Identity card
                            <div class="p-6 bg-theme-secondary rounded-xl border border-theme flex items-center gap-4">
                                <div class="w-16 h-16 rounded-full bg-accent-primary flex items-center justify-center text-white text-2xl font-medium">
                                    {initial}
                                </div>
                                <div>
                                    <h2 class="text-lg font-semibold text-theme-primary">
                                        {format!("{} {}", user.first_name, user.last_name)}
                                    </h2>
                                    <p class="text-sm text-theme-secondary">{user.username.clone()}</p>
                                    <p class="text-xs text-theme-tertiary mt-1">
                                        {format!("Member since {member_since}")}
                                    </p>
                                </div>
                            </div>

                            // Roles
                            <div class="p-6 bg-theme-secondary rounded-xl border border-theme">
                                <h3 class="text-sm font-semibold text-theme-primary mb-3">"Roles"</h3>
                                {if user.roles.is_empty() {
                                    view! {
                                        <p class="text-sm text-theme-tertiary">"No roles assigned."</p>
                                    }.into_any()
                                } else {
                                    view! {
                                        <div class="flex items-center gap-2 flex-wrap">
                                            {user.roles.iter().map(|role| view! {
                                                <span class="px-2 py-0.5 text-xs font-medium bg-accent-primary/10 text-accent-primary rounded">
                                                    {role.clone()}
                                                </span>
                                            }).collect_view()}
                                        </div>
                                    }.into_any()
                                }}
                            </div>

                            // Actions
                            <div class="flex items-center gap-3">
                                <A
                                    href="/change-password"
                                    attr:class="px-4 py-2 text-sm font-medium text-theme-secondary border border-theme
                                           rounded-lg hover:bg-theme-secondary transition-colors flex items-center gap-2"
                                >
                                    <Icon name=icons::LOCK class="w-4 h-4" />
                                    "Change Password"
                                </A>
                                <button
                                    class="px-4 py-2 text-sm font-medium text-red-500 border border-red-300 dark:border-red-700
                                           rounded-lg hover:bg-red-50 dark:hover:bg-red-900/20 transition-colors
                                           flex items-center gap-2"
                                    on:click=move |_| auth.logout()
                                >
                                    <Icon name=icons::LOGOUT class="w-4 h-4" />
                                    "Sign Out"
                                </button>
                            </div>
                        </div>
                    }.into_any()
                })
            }}
        </div>
    }
}
