//! Tool create/edit pages
//!
//! One shared form with a row editor for the declared SQL parameters.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::form_error;
use crate::core::api::{DataSource, ParameterDefinition, Tool, ToolPayload};
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::use_toasts;
use crate::ui::use_api_client;

const PARAMETER_TYPES: [&str; 8] = [
    "string", "integer", "float", "boolean", "date", "datetime", "array", "object",
];

/// Editable parameter row.
///
/// Each field is its own signal so typing updates only that input; the
/// list itself re-renders only on add/remove. The id keys removal.
#[derive(Clone, Copy)]
struct ParameterRow {
    id: u64,
    name: RwSignal<String>,
    param_type: RwSignal<String>,
    description: RwSignal<String>,
    required: RwSignal<bool>,
}

impl ParameterRow {
    fn new(id: u64) -> Self {
        Self {
            id,
            name: RwSignal::new(String::new()),
            param_type: RwSignal::new("string".to_string()),
            description: RwSignal::new(String::new()),
            required: RwSignal::new(false),
        }
    }

    fn from_definition(id: u64, def: &ParameterDefinition) -> Self {
        Self {
            id,
            name: RwSignal::new(def.name.clone()),
            param_type: RwSignal::new(def.param_type.clone()),
            description: RwSignal::new(def.description.clone().unwrap_or_default()),
            required: RwSignal::new(def.required),
        }
    }

    /// Collect the row into a wire definition; rows without a name are
    /// dropped.
    fn to_definition(self) -> Option<ParameterDefinition> {
        let name = self.name.get_untracked().trim().to_string();
        if name.is_empty() {
            return None;
        }
        let description = self.description.get_untracked().trim().to_string();
        Some(ParameterDefinition {
            name,
            param_type: self.param_type.get_untracked(),
            description: if description.is_empty() {
                None
            } else {
                Some(description)
            },
            required: self.required.get_untracked(),
            default: None,
        })
    }
}

/// Create page: empty form, POSTs on save.
#[component]
pub fn CreateToolPage() -> impl IntoView {
    let client = use_api_client();
    let toasts = use_toasts();
    let saving = RwSignal::new(false);

    let on_submit = Callback::new(move |payload: ToolPayload| {
        let client = client.clone();
        saving.set(true);
        spawn_local(async move {
            match client.create_tool(&payload).await {
                Ok(created) => {
                    toasts.success(format!("Tool \"{}\" created", created.name));
                    let navigate = use_navigate();
                    navigate("/tools", Default::default());
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
            <FormHeader title="New Tool" />
            <ToolForm saving=saving on_submit=on_submit />
        </div>
    }
}

/// Edit page: loads the tool, then renders the pre-filled form.
#[component]
pub fn EditToolPage() -> impl IntoView {
    let client = use_api_client();
    let toasts = use_toasts();
    let params = use_params_map();

    let record = RwSignal::new(None::<Tool>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let record_id = Memo::new(move |_| {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
    });

    let fetch_client = client.clone();
    Effect::new(move |_| {
        let Some(id) = record_id.get() else {
            error.set(Some("Invalid tool id".to_string()));
            loading.set(false);
            return;
        };
        let client = fetch_client.clone();
        spawn_local(async move {
            loading.set(true);
            match client.get_tool(id).await {
                Ok(tool) => record.set(Some(tool)),
                Err(err) => {
                    if let Some(msg) = form_error(err) {
                        error.set(Some(msg));
                    }
                }
            }
            loading.set(false);
        });
    });

    let on_submit = Callback::new(move |payload: ToolPayload| {
        let Some(id) = record_id.get_untracked() else {
            return;
        };
        let client = client.clone();
        saving.set(true);
        spawn_local(async move {
            match client.update_tool(id, &payload).await {
                Ok(updated) => {
                    toasts.success(format!("Tool \"{}\" saved", updated.name));
                    let navigate = use_navigate();
                    navigate("/tools", Default::default());
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
            <FormHeader title="Edit Tool" />

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
                record.get().map(|tool| view! {
                    <ToolForm initial=tool saving=saving on_submit=on_submit />
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
                href="/tools"
                attr:class="text-sm text-theme-secondary hover:text-theme-primary transition-colors"
            >
                "← Tools"
            </A>
            <h1 class="text-2xl font-bold text-theme-primary mt-2">{title}</h1>
        </div>
    }
}

/// Tool definition form, shared by create and edit.
#[component]
fn ToolForm(
    /// Existing tool when editing
    #[prop(optional)]
    initial: Option<Tool>,
    saving: RwSignal<bool>,
    on_submit: Callback<ToolPayload>,
) -> impl IntoView {
    let client = use_api_client();

    let name = RwSignal::new(initial.as_ref().map(|t| t.name.clone()).unwrap_or_default());
    let description = RwSignal::new(
        initial
            .as_ref()
            .and_then(|t| t.description.clone())
            .unwrap_or_default(),
    );
    let sql = RwSignal::new(initial.as_ref().map(|t| t.sql.clone()).unwrap_or_default());
    let datasource_id = RwSignal::new(
        initial
            .as_ref()
            .map(|t| t.datasource_id.to_string())
            .unwrap_or_default(),
    );
    let initial_rows = initial
        .as_ref()
        .map(|t| {
            t.parameters
                .iter()
                .enumerate()
                .map(|(i, def)| ParameterRow::from_definition(i as u64, def))
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();
    let next_row_id = RwSignal::new(initial_rows.len() as u64);
    let parameters = RwSignal::new(initial_rows);
    let tool_type = initial
        .as_ref()
        .map(|t| t.tool_type.clone())
        .unwrap_or_else(|| "query".to_string());

    let datasources = RwSignal::new(Vec::<DataSource>::new());
    let local_error = RwSignal::new(None::<String>);

    // Load data sources for the select
    Effect::new(move |_| {
        let client = client.clone();
        spawn_local(async move {
            if let Ok(list) = client.list_datasources().await {
                datasources.set(list);
            }
            // Failures leave the select empty; validation reports the
            // missing choice on submit.
        });
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        local_error.set(None);

        let name_val = name.get().trim().to_string();
        if name_val.is_empty() {
            local_error.set(Some("Name is required".to_string()));
            return;
        }
        let sql_val = sql.get().trim().to_string();
        if sql_val.is_empty() {
            local_error.set(Some("SQL statement is required".to_string()));
            return;
        }
        let Ok(datasource_val) = datasource_id.get().parse::<i64>() else {
            local_error.set(Some("Choose a data source".to_string()));
            return;
        };
        let parameter_defs = parameters
            .get()
            .into_iter()
            .filter_map(ParameterRow::to_definition)
            .collect::<Vec<_>>();

        let description_val = description.get().trim().to_string();
        on_submit.run(ToolPayload {
            name: name_val,
            description: if description_val.is_empty() {
                None
            } else {
                Some(description_val)
            },
            tool_type: tool_type.clone(),
            sql: sql_val,
            datasource_id: datasource_val,
            parameters: parameter_defs,
        });
    };

    let add_parameter = move |_| {
        let id = next_row_id.get_untracked();
        next_row_id.set(id + 1);
        parameters.update(|list| list.push(ParameterRow::new(id)));
    };

    view! {
        <form on:submit=submit class="max-w-3xl space-y-6">
            {move || local_error.get().map(|err| view! {
                <div class="p-3 bg-red-100 dark:bg-red-900/30 border border-red-300 dark:border-red-700 rounded-lg">
                    <p class="text-sm text-red-700 dark:text-red-300">{err}</p>
                </div>
            })}

            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                // Name
                <div>
                    <label class="block text-sm font-medium text-theme-primary mb-1">
                        "Name" <span class="text-red-500">" *"</span>
                    </label>
                    <input
                        type="text"
                        placeholder="orders-by-region"
                        class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                               text-theme-primary placeholder-theme-tertiary
                               focus:outline-none focus:ring-2 focus:ring-accent-primary"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </div>

                // Data source select
                <div>
                    <label class="block text-sm font-medium text-theme-primary mb-1">
                        "Data Source" <span class="text-red-500">" *"</span>
                    </label>
                    <select
                        class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                               text-theme-primary focus:outline-none focus:ring-2 focus:ring-accent-primary"
                        prop:value=move || datasource_id.get()
                        on:change=move |ev| datasource_id.set(event_target_value(&ev))
                    >
                        <option value="">"Select a data source"</option>
                        {move || datasources.get().into_iter().map(|ds| {
                            let value = ds.id.to_string();
                            let selected = value.clone();
                            view! {
                                <option value=value selected=move || datasource_id.get() == selected>
                                    {ds.name.clone()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>
            </div>

            // Description
            <div>
                <label class="block text-sm font-medium text-theme-primary mb-1">"Description"</label>
                <input
                    type="text"
                    placeholder="What this tool returns"
                    class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                           text-theme-primary placeholder-theme-tertiary
                           focus:outline-none focus:ring-2 focus:ring-accent-primary"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                />
            </div>

            // SQL
            <div>
                <label class="block text-sm font-medium text-theme-primary mb-1">
                    "SQL" <span class="text-red-500">" *"</span>
                </label>
                <textarea
                    rows="6"
                    placeholder="SELECT * FROM orders WHERE region = :region"
                    class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                           text-theme-primary placeholder-theme-tertiary font-mono text-sm
                           focus:outline-none focus:ring-2 focus:ring-accent-primary"
                    prop:value=move || sql.get()
                    on:input=move |ev| sql.set(event_target_value(&ev))
                ></textarea>
            </div>

            // Parameters
            <div>
                <div class="flex items-center justify-between mb-2">
                    <label class="block text-sm font-medium text-theme-primary">"Parameters"</label>
                    <button
                        type="button"
                        class="text-sm text-accent-primary hover:text-accent-primary-hover
                               flex items-center gap-1"
                        on:click=add_parameter
                    >
                        <Icon name=icons::PLUS class="w-4 h-4" />
                        "Add Parameter"
                    </button>
                </div>

                {move || {
                    let list = parameters.get();
                    if list.is_empty() {
                        return view! {
                            <p class="text-sm text-theme-tertiary">"No parameters declared."</p>
                        }.into_any();
                    }
                    view! {
                        <div class="space-y-2">
                            {list.into_iter().map(|row| {
                                let row_id = row.id;
                                view! {
                                    <div class="flex items-center gap-2">
                                        <input
                                            type="text"
                                            placeholder="name"
                                            class="flex-1 px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                                                   text-theme-primary placeholder-theme-tertiary text-sm
                                                   focus:outline-none focus:ring-2 focus:ring-accent-primary"
                                            prop:value=move || row.name.get()
                                            on:input=move |ev| row.name.set(event_target_value(&ev))
                                        />
                                        <select
                                            class="px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                                                   text-theme-primary text-sm focus:outline-none focus:ring-2 focus:ring-accent-primary"
                                            prop:value=move || row.param_type.get()
                                            on:change=move |ev| row.param_type.set(event_target_value(&ev))
                                        >
                                            {PARAMETER_TYPES.into_iter().map(|t| view! {
                                                <option value=t selected=move || row.param_type.get() == t>{t}</option>
                                            }).collect_view()}
                                        </select>
                                        <input
                                            type="text"
                                            placeholder="description"
                                            class="flex-1 px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                                                   text-theme-primary placeholder-theme-tertiary text-sm
                                                   focus:outline-none focus:ring-2 focus:ring-accent-primary"
                                            prop:value=move || row.description.get()
                                            on:input=move |ev| row.description.set(event_target_value(&ev))
                                        />
                                        <label class="flex items-center gap-1 text-sm text-theme-secondary">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || row.required.get()
                                                on:change=move |ev| row.required.set(event_target_checked(&ev))
                                            />
                                            "required"
                                        </label>
                                        <button
                                            type="button"
                                            class="p-2 rounded-lg hover:bg-red-50 dark:hover:bg-red-900/20 text-red-500"
                                            on:click=move |_| {
                                                parameters.update(|list| list.retain(|r| r.id != row_id));
                                            }
                                        >
                                            <Icon name=icons::X class="w-4 h-4" />
                                        </button>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }.into_any()
                }}
            </div>

            <div class="flex justify-end gap-3">
                <A
                    href="/tools"
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
