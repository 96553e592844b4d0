//! Console chrome: sidebar navigation and top bar

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::ui::auth::UserMenu;
use crate::ui::icon::{Icon, icons};
use crate::ui::theme::use_theme_context;

/// Sidebar entries, in display order.
const NAV_ITEMS: [(&str, &str, &str); 4] = [
    ("/", "Home", icons::HOME),
    ("/data-sources", "Data Sources", icons::DATABASE),
    ("/tools", "Tools", icons::TOOL),
    ("/generate-token", "Generate Token", icons::KEY),
];

/// Shell around every protected page: fixed sidebar, top bar with theme
/// toggle and user menu, scrollable content area.
#[component]
pub fn ConsoleLayout(children: Children) -> impl IntoView {
    let theme = use_theme_context();
    let pathname = use_location().pathname;

    view! {
        <div class="min-h-screen bg-theme-primary flex">
            // Sidebar
            <aside class="fixed left-0 top-0 h-screen w-60 bg-theme-surface border-r border-theme flex flex-col z-20">
                // Brand
                <div class="flex items-center gap-3 h-16 px-4 border-b border-theme">
                    <div class="w-8 h-8 bg-accent-primary rounded-lg flex items-center justify-center">
                        <Icon name=icons::DATABASE class="w-5 h-5 text-white" />
                    </div>
                    <span class="text-lg font-bold text-theme-primary">"DMCP Console"</span>
                </div>

                // Navigation
                <nav class="flex-1 px-2 py-4 space-y-1">
                    {NAV_ITEMS.into_iter().map(|(href, label, icon)| {
                        let is_active = Memo::new(move |_| pathname.get() == href);
                        view! {
                            <A
                                href=href
                                attr:class="flex items-center gap-3 px-3 py-2 rounded-lg text-sm font-medium transition-colors"
                            >
                                <div
                                    class="flex items-center gap-3 w-full"
                                    class=("text-accent-primary", move || is_active.get())
                                    class=("text-theme-secondary", move || !is_active.get())
                                >
                                    <Icon name=icon class="w-5 h-5" />
                                    {label}
                                </div>
                            </A>
                        }
                    }).collect_view()}
                </nav>
            </aside>

            // Main column
            <div class="flex-1 ml-60 flex flex-col min-h-screen">
                // Top bar
                <header class="sticky top-0 z-10 h-16 bg-theme-primary/80 backdrop-blur-md border-b border-theme
                               flex items-center justify-end gap-4 px-6">
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

                    <UserMenu />
                </header>

                // Page content
                <main class="flex-1 px-6 py-8 max-w-6xl w-full mx-auto">
                    {children()}
                </main>
            </div>
        </div>
    }
}
