//! Tool list page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::data_sources::DeleteConfirmModal;
use super::form_error;
use crate::core::api::Tool;
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::use_toasts;
use crate::ui::use_api_client;

/// Tools page component
#[component]
pub fn ToolsPage() -> impl IntoView {
    let client = use_api_client();
    let toasts = use_toasts();

    // State
    let tools = RwSignal::new(Vec::<Tool>::new());
    let search_query = RwSignal::new(String::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    // Delete confirmation modal state
    let delete_target = RwSignal::new(None::<(i64, String)>); // (id, name)
    let deleting = RwSignal::new(false);

    // Load tools on mount
    let fetch_client = client.clone();
    Effect::new(move |_| {
        let client = fetch_client.clone();
        spawn_local(async move {
            loading.set(true);
            error.set(None);
            match client.list_tools().await {
                Ok(list) => tools.set(list),
                Err(err) => {
                    if let Some(msg) = form_error(err) {
                        error.set(Some(msg));
                    }
                }
            }
            loading.set(false);
        });
    });

    // Filtered list: name, description and tags all match
    let filtered = Memo::new(move |_| {
        let query = search_query.get().to_lowercase();
        tools
            .get()
            .into_iter()
            .filter(|tool| {
                query.is_empty()
                    || tool.name.to_lowercase().contains(&query)
                    || tool
                        .description
                        .as_ref()
                        .map(|d| d.to_lowercase().contains(&query))
                        .unwrap_or(false)
                    || tool.tags.iter().any(|t| t.to_lowercase().contains(&query))
            })
            .collect::<Vec<_>>()
    });

    // Handle delete
    let handle_delete = move || {
        if let Some((id, _)) = delete_target.get() {
            let client = client.clone();
            deleting.set(true);
            spawn_local(async move {
                match client.delete_tool(id).await {
                    Ok(()) => {
                        tools.update(|list| list.retain(|tool| tool.id != id));
                        delete_target.set(None);
                        toasts.success("Tool deleted");
                    }
                    Err(err) => {
                        if let Some(msg) = form_error(err) {
                            toasts.error(msg);
                        }
                    }
                }
                deleting.set(false);
            });
        }
    };

    view! {
        <div>
            // Page title and actions
            <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-4 mb-8">
                <div>
                    <h1 class="text-2xl font-bold text-theme-primary">"Tools"</h1>
                    <p class="text-theme-secondary mt-1">"Parameterized queries exposed through the API"</p>
                </div>
                <A
                    href="/tools/create"
                    attr:class="px-4 py-2 text-sm font-medium text-white bg-accent-primary
                           hover:bg-accent-primary-hover rounded-lg transition-colors flex items-center gap-2"
                >
                    <Icon name=icons::PLUS class="w-4 h-4" />
                    "New Tool"
                </A>
            </div>

            // Search bar
            <div class="relative mb-6">
                <div class="absolute left-3 top-1/2 -translate-y-1/2 w-5 h-5 text-theme-tertiary">
                    <Icon name=icons::SEARCH class="w-5 h-5" />
                </div>
                <input
                    type="text"
                    placeholder="Search tools by name or tag..."
                    class="w-full pl-10 pr-4 py-2 bg-theme-secondary border border-theme rounded-lg
                           text-theme-primary placeholder-theme-tertiary
                           focus:outline-none focus:ring-2 focus:ring-accent-primary focus:border-transparent"
                    prop:value=move || search_query.get()
                    on:input=move |ev| search_query.set(event_target_value(&ev))
                />
            </div>

            // Error message
            {move || {
                error.get().map(|err| view! {
                    <div class="mb-6 p-4 bg-red-100 dark:bg-red-900/30 border border-red-300 dark:border-red-700 rounded-lg">
                        <p class="text-sm text-red-700 dark:text-red-300">{err}</p>
                    </div>
                })
            }}

            // Loading state
            {move || {
                if loading.get() {
                    Some(view! {
                        <div class="flex items-center justify-center py-20">
                            <Icon name=icons::LOADER class="animate-spin h-8 w-8 text-accent-primary" />
                        </div>
                    })
                } else {
                    None
                }
            }}

            // List
            {move || {
                if loading.get() {
                    return None;
                }
                let list = filtered.get();
                if list.is_empty() {
                    return Some(view! {
                        <div class="text-center py-20">
                            <div class="w-20 h-20 mx-auto mb-6 bg-theme-secondary rounded-full flex items-center justify-center">
                                <Icon name=icons::TOOL class="w-10 h-10 text-theme-tertiary" />
                            </div>
                            <h3 class="text-lg font-medium text-theme-primary mb-2">"No tools"</h3>
                            <p class="text-theme-secondary">"Define a parameterized query to get started"</p>
                        </div>
                    }.into_any());
                }

                Some(view! {
                    <div class="space-y-3">
                        {list.into_iter().map(|tool| {
                            let id = tool.id;
                            let name_for_delete = tool.name.clone();
                            let updated = tool
                                .updated_at
                                .split('T')
                                .next()
                                .unwrap_or(&tool.updated_at)
                                .to_string();
                            view! {
                                <div class="p-4 bg-theme-secondary rounded-xl border border-theme
                                            hover:border-accent-primary/50 transition-colors">
                                    <div class="flex items-start gap-4">
                                        <div class="w-10 h-10 bg-accent-primary/10 rounded-lg flex items-center justify-center flex-shrink-0">
                                            <Icon name=icons::TOOL class="w-5 h-5 text-accent-primary" />
                                        </div>
                                        <div class="flex-1 min-w-0">
                                            <div class="flex items-center gap-2">
                                                <h3 class="font-medium text-theme-primary truncate">{tool.name.clone()}</h3>
                                                <span class="px-2 py-0.5 text-xs font-medium bg-theme-tertiary/20 text-theme-secondary rounded">
                                                    {tool.tool_type.clone()}
                                                </span>
                                            </div>
                                            {tool.description.clone().map(|desc| view! {
                                                <p class="text-xs text-theme-secondary mt-1 line-clamp-2">{desc}</p>
                                            })}
                                            <div class="flex items-center gap-2 mt-2 flex-wrap">
                                                {tool.tags.iter().map(|tag| view! {
                                                    <span class="px-2 py-0.5 text-xs bg-accent-primary/10 text-accent-primary rounded">
                                                        {tag.clone()}
                                                    </span>
                                                }).collect_view()}
                                                <span class="text-xs text-theme-tertiary flex items-center gap-1">
                                                    <Icon name=icons::CLOCK class="w-3 h-3" />
                                                    {updated}
                                                </span>
                                            </div>
                                        </div>
                                        <div class="flex items-center gap-2">
                                            <A
                                                href=format!("/tools/edit/{id}")
                                                attr:class="p-2 rounded-lg hover:bg-theme-tertiary transition-colors text-theme-secondary"
                                                attr:title="Edit"
                                            >
                                                <Icon name=icons::EDIT class="w-4 h-4" />
                                            </A>
                                            <button
                                                class="p-2 rounded-lg hover:bg-red-50 dark:hover:bg-red-900/20 transition-colors text-red-500"
                                                title="Delete"
                                                on:click=move |_| delete_target.set(Some((id, name_for_delete.clone())))
                                            >
                                                <Icon name=icons::TRASH class="w-4 h-4" />
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }.into_any())
            }}

            // Delete confirmation modal
            {move || {
                delete_target.get().map(|(_, name)| {
                    let handle_delete = handle_delete.clone();
                    view! {
                        <DeleteConfirmModal
                            title="Delete Tool"
                            name=name
                            note="API clients calling this tool will get errors."
                            deleting=deleting
                            on_confirm=move || handle_delete()
                            on_close=move || delete_target.set(None)
                        />
                    }
                })
            }}
        </div>
    }
}
