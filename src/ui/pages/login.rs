//! Login page component

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::ui::auth::LoginForm;
use crate::ui::icon::{Icon, icons};
use crate::ui::theme::use_theme_context;

/// Login page. The surrounding `PublicRoute` sends authenticated
/// visitors to the console home.
#[component]
pub fn LoginPage() -> impl IntoView {
    let theme = use_theme_context();

    // Handle successful login
    let on_success = move |_| {
        let navigate = use_navigate();
        navigate("/", Default::default());
    };

    view! {
        <div class="min-h-screen bg-theme-primary flex flex-col">
            // Header
            <header class="border-b border-theme">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex items-center justify-between h-16">
                        // Logo
                        <div class="flex items-center gap-3">
                            <div class="w-8 h-8 bg-accent-primary rounded-lg flex items-center justify-center">
                                <Icon name=icons::DATABASE class="w-5 h-5 text-white" />
                            </div>
                            <span class="text-xl font-bold text-theme-primary">"DMCP Console"</span>
                        </div>

                        // Theme toggle
                        <button
                            class="p-2 rounded-lg hover:bg-theme-secondary transition-colors text-theme-secondary"
                            on:click=move |_| theme.toggle()
                            title="Toggle theme"
                        >
                            {move || {
                                if theme.is_dark.get() {
                                    view! { <Icon name=icons::SUN class="w-5 h-5" /> }.into_any()
                                } else {
                                    view! { <Icon name=icons::MOON class="w-5 h-5" /> }.into_any()
                                }
                            }}
                        </button>
                    </div>
                </div>
            </header>

            // Main content
            <main class="flex-1 flex items-center justify-center p-4">
                <div class="w-full max-w-md">
                    <LoginForm on_success=Callback::new(on_success) />
                </div>
            </main>
        </div>
    }
}
