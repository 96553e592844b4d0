//! Change password page

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::form_error;
use crate::core::api::{PasswordChange, UserProfile};
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::use_toasts;
use crate::ui::use_api_client;

/// Change password page component
#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let client = use_api_client();
    let toasts = use_toasts();

    // The change endpoint is addressed by user id, so the profile is
    // loaded first.
    let profile = RwSignal::new(None::<UserProfile>);

    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let local_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let fetch_client = client.clone();
    Effect::new(move |_| {
        let client = fetch_client.clone();
        spawn_local(async move {
            match client.current_user().await {
                Ok(user) => profile.set(Some(user)),
                Err(err) => {
                    if let Some(msg) = form_error(err) {
                        local_error.set(Some(msg));
                    }
                }
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        local_error.set(None);

        let current = current_password.get();
        let new_pass = new_password.get();
        let confirm = confirm_password.get();

        if current.is_empty() || new_pass.is_empty() || confirm.is_empty() {
            local_error.set(Some("All fields are required".to_string()));
            return;
        }
        if new_pass != confirm {
            local_error.set(Some("Passwords do not match".to_string()));
            return;
        }
        if new_pass.len() < 8 {
            local_error.set(Some("Password must be at least 8 characters".to_string()));
            return;
        }
        let Some(user) = profile.get() else {
            local_error.set(Some("Profile not loaded yet. Please try again.".to_string()));
            return;
        };

        let client = client.clone();
        saving.set(true);
        spawn_local(async move {
            let change = PasswordChange {
                current_password: current,
                new_password: new_pass,
            };
            match client.change_password(user.id, &change).await {
                Ok(()) => {
                    toasts.success("Password changed");
                    current_password.set(String::new());
                    new_password.set(String::new());
                    confirm_password.set(String::new());
                }
                Err(err) => {
                    if let Some(msg) = form_error(err) {
                        local_error.set(Some(msg));
                    }
                }
            }
            saving.set(false);
        });
    };

    view! {
        <div class="max-w-md">
            <h1 class="text-2xl font-bold text-theme-primary mb-1">"Change Password"</h1>
            <p class="text-theme-secondary mb-8">"Update the password for your console account"</p>

            <form on:submit=on_submit class="space-y-5">
                {move || local_error.get().map(|err| view! {
                    <div class="p-3 bg-red-100 dark:bg-red-900/30 border border-red-300 dark:border-red-700 rounded-lg">
                        <p class="text-sm text-red-700 dark:text-red-300">{err}</p>
                    </div>
                })}

                <PasswordField
                    label="Current Password"
                    autocomplete="current-password"
                    value=current_password
                />
                <PasswordField
                    label="New Password"
                    autocomplete="new-password"
                    value=new_password
                />
                <PasswordField
                    label="Confirm New Password"
                    autocomplete="new-password"
                    value=confirm_password
                />

                <button
                    type="submit"
                    class="w-full py-2.5 px-4 bg-accent-primary hover:bg-accent-primary-hover
                           text-white font-medium rounded-lg transition-colors disabled:opacity-50
                           flex items-center justify-center gap-2"
                    disabled=move || saving.get()
                >
                    {move || {
                        if saving.get() {
                            view! {
                                <Icon name=icons::LOADER class="animate-spin h-4 w-4" />
                                "Saving..."
                            }.into_any()
                        } else {
                            view! { "Change Password" }.into_any()
                        }
                    }}
                </button>
            </form>
        </div>
    }
}

/// Password input with label
#[component]
fn PasswordField(
    label: &'static str,
    autocomplete: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-theme-primary mb-1">{label}</label>
            <input
                type="password"
                autocomplete=autocomplete
                class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                       text-theme-primary placeholder-theme-tertiary
                       focus:outline-none focus:ring-2 focus:ring-accent-primary"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
