//! Data source create/edit pages
//!
//! Both pages share one form component; the edit page loads the record
//! first and pre-fills it. The password field is write-only: leaving it
//! blank while editing keeps the stored one.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::form_error;
use crate::core::api::{DataSource, DataSourcePayload};
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::use_toasts;
use crate::ui::use_api_client;

const DATABASE_TYPES: [&str; 4] = ["postgresql", "mysql", "sqlite", "databricks"];

/// Create page: empty form, POSTs on save.
#[component]
pub fn CreateDataSourcePage() -> impl IntoView {
    let client = use_api_client();
    let toasts = use_toasts();
    let saving = RwSignal::new(false);

    let on_submit = Callback::new(move |payload: DataSourcePayload| {
        let client = client.clone();
        saving.set(true);
        spawn_local(async move {
            match client.create_datasource(&payload).await {
                Ok(created) => {
                    toasts.success(format!("Data source \"{}\" created", created.name));
                    let navigate = use_navigate();
                    navigate("/data-sources", Default::default());
                }
                Err(err) => {
                    if let Some(msg) = form_error(err) {
                        toasts.error(msg);
                    }
                }
            }
            saving.set(false);
        });
    });

    view! {
        <div>
            <FormHeader title="New Data Source" />
            <DataSourceForm saving=saving on_submit=on_submit />
        </div>
    }
}

/// Edit page: loads the record, then renders the pre-filled form.
#[component]
pub fn EditDataSourcePage() -> impl IntoView {
    let client = use_api_client();
    let toasts = use_toasts();
    let params = use_params_map();

    let record = RwSignal::new(None::<DataSource>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let record_id = Memo::new(move |_| {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
    });

    // Load the record on mount
    let fetch_client = client.clone();
    Effect::new(move |_| {
        let Some(id) = record_id.get() else {
            error.set(Some("Invalid data source id".to_string()));
            loading.set(false);
            return;
        };
        let client = fetch_client.clone();
        spawn_local(async move {
            loading.set(true);
            match client.get_datasource(id).await {
                Ok(ds) => record.set(Some(ds)),
                Err(err) => {
                    if let Some(msg) = form_error(err) {
                        error.set(Some(msg));
                    }
                }
            }
            loading.set(false);
        });
    });

    let on_submit = Callback::new(move |payload: DataSourcePayload| {
        let Some(id) = record_id.get_untracked() else {
            return;
        };
        let client = client.clone();
        saving.set(true);
        spawn_local(async move {
            match client.update_datasource(id, &payload).await {
                Ok(updated) => {
                    toasts.success(format!("Data source \"{}\" saved", updated.name));
                    let navigate = use_navigate();
                    navigate("/data-sources", Default::default());
                }
                Err(err) => {
                    if let Some(msg) = form_error(err) {
                        toasts.error(msg);
                    }
                }
            }
            saving.set(false);
        });
    });

    view! {
        <div>
            <FormHeader title="Edit Data Source" />

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
                record.get().map(|ds| view! {
                    <DataSourceForm initial=ds saving=saving on_submit=on_submit />
                }.into_any())
            }}
        </div>
    }
}

#[component]
fn FormHeader(title: &'static str) -> impl IntoView {
    view! {
        <div class="mb-8">
            <A
                href="/data-sources"
                attr:class="text-sm text-theme-secondary hover:text-theme-primary transition-colors"
            >
                "← Data Sources"
            </A>
            <h1 class="text-2xl font-bold text-theme-primary mt-2">{title}</h1>
        </div>
    }
}

/// Connection record form, shared by create and edit.
#[component]
fn DataSourceForm(
    /// Existing record when editing
    #[prop(optional)]
    initial: Option<DataSource>,
    saving: RwSignal<bool>,
    on_submit: Callback<DataSourcePayload>,
) -> impl IntoView {
    let editing = initial.is_some();

    let name = RwSignal::new(initial.as_ref().map(|d| d.name.clone()).unwrap_or_default());
    let database_type = RwSignal::new(
        initial
            .as_ref()
            .map(|d| d.database_type.clone())
            .unwrap_or_else(|| "postgresql".to_string()),
    );
    let host = RwSignal::new(
        initial
            .as_ref()
            .and_then(|d| d.host.clone())
            .unwrap_or_default(),
    );
    let port = RwSignal::new(
        initial
            .as_ref()
            .and_then(|d| d.port)
            .map(|p| p.to_string())
            .unwrap_or_default(),
    );
    let database = RwSignal::new(
        initial
            .as_ref()
            .map(|d| d.database.clone())
            .unwrap_or_default(),
    );
    let username = RwSignal::new(
        initial
            .as_ref()
            .and_then(|d| d.username.clone())
            .unwrap_or_default(),
    );
    let password = RwSignal::new(String::new());
    let connection_string = RwSignal::new(
        initial
            .as_ref()
            .and_then(|d| d.connection_string.clone())
            .unwrap_or_default(),
    );
    let ssl_mode = RwSignal::new(
        initial
            .as_ref()
            .and_then(|d| d.ssl_mode.clone())
            .unwrap_or_default(),
    );

    let local_error = RwSignal::new(None::<String>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        local_error.set(None);

        let name_val = name.get().trim().to_string();
        if name_val.is_empty() {
            local_error.set(Some("Name is required".to_string()));
            return;
        }
        let database_val = database.get().trim().to_string();
        if database_val.is_empty() {
            local_error.set(Some("Database name is required".to_string()));
            return;
        }
        let port_raw = port.get();
        let port_val = if port_raw.trim().is_empty() {
            None
        } else {
            match port_raw.trim().parse::<u16>() {
                Ok(p) => Some(p),
                Err(_) => {
                    local_error.set(Some("Port must be a number between 1 and 65535".to_string()));
                    return;
                }
            }
        };

        let non_empty = |s: String| {
            let s = s.trim().to_string();
            if s.is_empty() { None } else { Some(s) }
        };

        on_submit.run(DataSourcePayload {
            name: name_val,
            database_type: database_type.get(),
            host: non_empty(host.get()),
            port: port_val,
            database: database_val,
            username: non_empty(username.get()),
            password: non_empty(password.get()),
            connection_string: non_empty(connection_string.get()),
            ssl_mode: non_empty(ssl_mode.get()),
        });
    };

    view! {
        <form on:submit=submit class="max-w-2xl space-y-6">
            {move || local_error.get().map(|err| view! {
                <div class="p-3 bg-red-100 dark:bg-red-900/30 border border-red-300 dark:border-red-700 rounded-lg">
                    <p class="text-sm text-red-700 dark:text-red-300">{err}</p>
                </div>
            })}

            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                <TextField label="Name" value=name placeholder="warehouse" required=true />

                // Database type select
                <div>
                    <label class="block text-sm font-medium text-theme-primary mb-1">"Database Type"</label>
                    <select
                        class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                               text-theme-primary focus:outline-none focus:ring-2 focus:ring-accent-primary"
                        prop:value=move || database_type.get()
                        on:change=move |ev| database_type.set(event_target_value(&ev))
                    >
                        {DATABASE_TYPES.into_iter().map(|t| view! {
                            <option value=t selected=move || database_type.get() == t>{t}</option>
                        }).collect_view()}
                    </select>
                </div>

                <TextField label="Host" value=host placeholder="db.internal" required=false />
                <TextField label="Port" value=port placeholder="5432" required=false />
                <TextField label="Database" value=database placeholder="analytics" required=true />
                <TextField label="Username" value=username placeholder="readonly" required=false />

                // Password (write-only)
                <div>
                    <label class="block text-sm font-medium text-theme-primary mb-1">"Password"</label>
                    <input
                        type="password"
                        autocomplete="new-password"
                        placeholder=move || if editing { "Leave blank to keep current" } else { "" }
                        class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                               text-theme-primary placeholder-theme-tertiary
                               focus:outline-none focus:ring-2 focus:ring-accent-primary"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </div>

                <TextField label="SSL Mode" value=ssl_mode placeholder="require" required=false />
            </div>

            <TextField
                label="Connection String"
                value=connection_string
                placeholder="Overrides host/port/database when set"
                required=false
            />

            <div class="flex justify-end gap-3">
                <A
                    href="/data-sources"
                    attr:class="px-4 py-2 text-sm font-medium text-theme-secondary border border-theme
                           rounded-lg hover:bg-theme-secondary transition-colors"
                >
                    "Cancel"
                </A>
                <button
                    type="submit"
                    class="px-4 py-2 text-sm font-medium text-white bg-accent-primary
                           hover:bg-accent-primary-hover rounded-lg transition-colors disabled:opacity-50
                           flex items-center gap-2"
                    disabled=move || saving.get()
                >
                    {move || {
                        if saving.get() {
                            view! {
                                <Icon name=icons::LOADER class="animate-spin h-4 w-4" />
                                "Saving..."
                            }.into_any()
                        } else {
                            view! { "Save" }.into_any()
                        }
                    }}
                </button>
            </div>
        </form>
    }
}

/// Plain text input with label
#[component]
fn TextField(
    label: &'static str,
    value: RwSignal<String>,
    placeholder: &'static str,
    required: bool,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-theme-primary mb-1">
                {label}
                {required.then(|| view! { <span class="text-red-500">" *"</span> })}
            </label>
            <input
                type="text"
                placeholder=placeholder
                class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                       text-theme-primary placeholder-theme-tertiary
                       focus:outline-none focus:ring-2 focus:ring-accent-primary"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
