//! API token issuance page
//!
//! Asks the backend to mint a fresh bearer token for the current user
//! and displays it once, with its expiry, for copying into API clients.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::form_error;
use crate::core::api::IssuedToken;
use crate::ui::icon::{Icon, icons};
use crate::ui::use_api_client;

/// Generate token page component
#[component]
pub fn GenerateTokenPage() -> impl IntoView {
    let client = use_api_client();

    let issued = RwSignal::new(None::<IssuedToken>);
    let generating = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let handle_generate = move |_| {
        let client = client.clone();
        generating.set(true);
        error.set(None);
        spawn_local(async move {
            match client.generate_token().await {
                Ok(token) => issued.set(Some(token)),
                Err(err) => {
                    if let Some(msg) = form_error(err) {
                        error.set(Some(msg));
                    }
                }
            }
            generating.set(false);
        });
    };

    view! {
        <div class="max-w-2xl">
            <h1 class="text-2xl font-bold text-theme-primary mb-1">"Generate API Token"</h1>
            <p class="text-theme-secondary mb-8">
                "Issue a bearer token for API clients. The token is shown once; store it securely."
            </p>

            // Error message
            {move || {
                error.get().map(|err| view! {
                    <div class="mb-6 p-4 bg-red-100 dark:bg-red-900/30 border border-red-300 dark:border-red-700 rounded-lg">
                        <p class="text-sm text-red-700 dark:text-red-300">{err}</p>
                    </div>
                })
            }}

            <button
                class="px-4 py-2 text-sm font-medium text-white bg-accent-primary
                       hover:bg-accent-primary-hover rounded-lg transition-colors disabled:opacity-50
                       flex items-center gap-2"
                disabled=move || generating.get()
                on:click=handle_generate
            >
                {move || {
                    if generating.get() {
                        view! {
                            <Icon name=icons::LOADER class="animate-spin h-4 w-4" />
                            "Generating..."
                        }.into_any()
                    } else {
                        view! {
                            <Icon name=icons::KEY class="w-4 h-4" />
                            "Generate Token"
                        }.into_any()
                    }
                }}
            </button>

            // Issued token
            {move || {
                issued.get().map(|token| {
                    let expires = format_expiry(&token.expires_at);
                    view! {
                        <div class="mt-8 p-5 bg-theme-secondary rounded-xl border border-theme space-y-4">
                            <div class="flex items-center gap-2">
                                <Icon name=icons::CHECK class="w-5 h-5 text-green-500" />
                                <h3 class="font-medium text-theme-primary">
                                    {format!("Token issued for {}", token.username)}
                                </h3>
                            </div>

                            <div>
                                <label class="block text-sm font-medium text-theme-secondary mb-1">"Token"</label>
                                <textarea
                                    readonly
                                    rows="4"
                                    class="w-full px-3 py-2 bg-theme-primary border border-theme rounded-lg
                                           text-theme-primary font-mono text-xs break-all
                                           focus:outline-none focus:ring-2 focus:ring-accent-primary"
                                    prop:value=token.token.clone()
                                    on:focus=move |ev| {
                                        // Select-all for an easy copy
                                        event_target::<leptos::web_sys::HtmlTextAreaElement>(&ev).select();
                                    }
                                ></textarea>
                            </div>

                            <p class="text-sm text-theme-tertiary flex items-center gap-1">
                                <Icon name=icons::CLOCK class="w-4 h-4" />
                                {format!("Expires {expires}")}
                            </p>
                        </div>
                    }
                })
            }}
        </div>
    }
}

/// Render the backend's ISO timestamp in the browser locale.
#[cfg(not(feature = "ssr"))]
fn format_expiry(raw: &str) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(raw));
    if date.get_time().is_nan() {
        return raw.to_string();
    }
    String::from(date.to_locale_string("en-US", &wasm_bindgen::JsValue::UNDEFINED))
}

#[cfg(feature = "ssr")]
fn format_expiry(raw: &str) -> String {
    raw.to_string()
}
