//! Data source list page
//!
//! Lists connection records with search, per-row connection test,
//! edit links and a delete confirmation modal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::form_error;
use crate::core::api::DataSource;
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::use_toasts;
use crate::ui::use_api_client;

/// Data sources page component
#[component]
pub fn DataSourcesPage() -> impl IntoView {
    let client = use_api_client();
    let toasts = use_toasts();

    // State
    let datasources = RwSignal::new(Vec::<DataSource>::new());
    let search_query = RwSignal::new(String::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    // Delete confirmation modal state
    let delete_target = RwSignal::new(None::<(i64, String)>); // (id, name)
    let deleting = RwSignal::new(false);

    // Connection test in flight, by id
    let testing = RwSignal::new(None::<i64>);

    // Load data sources on mount
    let fetch_client = client.clone();
    Effect::new(move |_| {
        let client = fetch_client.clone();
        spawn_local(async move {
            loading.set(true);
            error.set(None);
            match client.list_datasources().await {
                Ok(list) => datasources.set(list),
                Err(err) => {
                    if let Some(msg) = form_error(err) {
                        error.set(Some(msg));
                    }
                }
            }
            loading.set(false);
        });
    });

    // Filtered list
    let filtered = Memo::new(move |_| {
        let query = search_query.get().to_lowercase();
        datasources
            .get()
            .into_iter()
            .filter(|ds| {
                query.is_empty()
                    || ds.name.to_lowercase().contains(&query)
                    || ds.database_type.to_lowercase().contains(&query)
                    || ds.database.to_lowercase().contains(&query)
            })
            .collect::<Vec<_>>()
    });

    // Handle delete
    let delete_client = client.clone();
    let handle_delete = move || {
        if let Some((id, _)) = delete_target.get() {
            let client = delete_client.clone();
            deleting.set(true);
            spawn_local(async move {
                match client.delete_datasource(id).await {
                    Ok(()) => {
                        datasources.update(|list| list.retain(|ds| ds.id != id));
                        delete_target.set(None);
                        toasts.success("Data source deleted");
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

    // Handle connection test
    let test_client = client.clone();
    let handle_test = move |id: i64, name: String| {
        let client = test_client.clone();
        testing.set(Some(id));
        spawn_local(async move {
            match client.test_datasource(id).await {
                Ok(()) => toasts.success(format!("Connection to \"{name}\" succeeded")),
                Err(err) => {
                    if let Some(msg) = form_error(err) {
                        toasts.error(format!("Connection to \"{name}\" failed: {msg}"));
                    }
                }
            }
            testing.set(None);
        });
    };

    view! {
        <div>
            // Page title and actions
            <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-4 mb-8">
                <div>
                    <h1 class="text-2xl font-bold text-theme-primary">"Data Sources"</h1>
                    <p class="text-theme-secondary mt-1">"Database connections available to tools"</p>
                </div>
                <A
                    href="/data-sources/create"
                    attr:class="px-4 py-2 text-sm font-medium text-white bg-accent-primary
                           hover:bg-accent-primary-hover rounded-lg transition-colors flex items-center gap-2"
                >
                    <Icon name=icons::PLUS class="w-4 h-4" />
                    "New Data Source"
                </A>
            </div>

            // Search bar
            <div class="relative mb-6">
                <div class="absolute left-3 top-1/2 -translate-y-1/2 w-5 h-5 text-theme-tertiary">
                    <Icon name=icons::SEARCH class="w-5 h-5" />
                </div>
                <input
                    type="text"
                    placeholder="Search data sources..."
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
                                <Icon name=icons::DATABASE class="w-10 h-10 text-theme-tertiary" />
                            </div>
                            <h3 class="text-lg font-medium text-theme-primary mb-2">"No data sources"</h3>
                            <p class="text-theme-secondary">"Register a database connection to get started"</p>
                        </div>
                    }.into_any());
                }

                let handle_test = handle_test.clone();
                Some(view! {
                    <div class="space-y-3">
                        {list.into_iter().map(|ds| {
                            let id = ds.id;
                            let name_for_test = ds.name.clone();
                            let name_for_delete = ds.name.clone();
                            let handle_test = handle_test.clone();
                            let location = match (&ds.host, ds.port) {
                                (Some(host), Some(port)) => format!("{host}:{port}"),
                                (Some(host), None) => host.clone(),
                                _ => ds.connection_string.clone().unwrap_or_else(|| "local".to_string()),
                            };
                            view! {
                                <div class="flex items-center gap-4 p-4 bg-theme-secondary rounded-xl border border-theme
                                            hover:border-accent-primary/50 transition-colors">
                                    <div class="w-10 h-10 bg-accent-primary/10 rounded-lg flex items-center justify-center flex-shrink-0">
                                        <Icon name=icons::DATABASE class="w-5 h-5 text-accent-primary" />
                                    </div>
                                    <div class="flex-1 min-w-0">
                                        <h3 class="font-medium text-theme-primary truncate">{ds.name.clone()}</h3>
                                        <p class="text-xs text-theme-tertiary truncate">
                                            {format!("{} · {} · {}", ds.database_type, ds.database, location)}
                                        </p>
                                    </div>
                                    <div class="flex items-center gap-2">
                                        // Test connection
                                        <button
                                            class="p-2 rounded-lg hover:bg-theme-tertiary transition-colors text-theme-secondary
                                                   disabled:opacity-50"
                                            title="Test connection"
                                            disabled=move || testing.get() == Some(id)
                                            on:click=move |_| handle_test(id, name_for_test.clone())
                                        >
                                            {move || {
                                                if testing.get() == Some(id) {
                                                    view! { <Icon name=icons::LOADER class="w-4 h-4 animate-spin" /> }.into_any()
                                                } else {
                                                    view! { <Icon name=icons::LIGHTNING class="w-4 h-4" /> }.into_any()
                                                }
                                            }}
                                        </button>
                                        // Edit
                                        <A
                                            href=format!("/data-sources/edit/{id}")
                                            attr:class="p-2 rounded-lg hover:bg-theme-tertiary transition-colors text-theme-secondary"
                                            attr:title="Edit"
                                        >
                                            <Icon name=icons::EDIT class="w-4 h-4" />
                                        </A>
                                        // Delete
                                        <button
                                            class="p-2 rounded-lg hover:bg-red-50 dark:hover:bg-red-900/20 transition-colors text-red-500"
                                            title="Delete"
                                            on:click=move |_| delete_target.set(Some((id, name_for_delete.clone())))
                                        >
                                            <Icon name=icons::TRASH class="w-4 h-4" />
                                        </button>
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
                            title="Delete Data Source"
                            name=name
                            note="Tools using this data source will stop working."
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

/// Delete confirmation modal, shared by the list pages
#[component]
pub fn DeleteConfirmModal(
    title: &'static str,
    name: String,
    note: &'static str,
    deleting: RwSignal<bool>,
    on_confirm: impl Fn() + Send + Sync + Clone + 'static,
    on_close: impl Fn() + Send + Sync + Clone + 'static,
) -> impl IntoView {
    let on_close_backdrop = on_close.clone();

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center">
            // Backdrop
            <div
                class="absolute inset-0 bg-black/50 backdrop-blur-sm"
                on:click=move |_| on_close_backdrop()
            ></div>

            // Modal
            <div class="relative bg-theme-primary rounded-xl shadow-2xl border border-theme p-6 w-full max-w-md mx-4">
                <div class="flex items-start gap-4">
                    <div class="flex-shrink-0 w-10 h-10 rounded-full bg-red-100 dark:bg-red-900/30 flex items-center justify-center">
                        <Icon name=icons::WARNING class="w-5 h-5 text-red-600 dark:text-red-400" />
                    </div>
                    <div class="flex-1">
                        <h3 class="text-lg font-semibold text-theme-primary">{title}</h3>
                        <p class="mt-2 text-sm text-theme-secondary">
                            "Are you sure you want to delete "
                            <span class="font-medium text-theme-primary">"\""{name}"\""</span>
                            "? "
                            {note}
                            " This action cannot be undone."
                        </p>
                    </div>
                </div>

                <div class="mt-6 flex justify-end gap-3">
                    <button
                        class="px-4 py-2 text-sm font-medium text-theme-secondary border border-theme
                               rounded-lg hover:bg-theme-secondary transition-colors"
                        on:click=move |_| on_close()
                        disabled=move || deleting.get()
                    >
                        "Cancel"
                    </button>
                    <button
                        class="px-4 py-2 text-sm font-medium text-white bg-red-600
                               hover:bg-red-700 rounded-lg transition-colors disabled:opacity-50 flex items-center gap-2"
                        on:click=move |_| on_confirm()
                        disabled=move || deleting.get()
                    >
                        {move || {
                            if deleting.get() {
                                view! {
                                    <Icon name=icons::LOADER class="animate-spin h-4 w-4" />
                                    "Deleting..."
                                }.into_any()
                            } else {
                                view! { "Delete" }.into_any()
                            }
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}
