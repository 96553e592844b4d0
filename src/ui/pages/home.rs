//! Console home page
//!
//! Backend health plus record counts, with quick links into the
//! management pages.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::form_error;
use crate::core::api::HealthStatus;
use crate::ui::icon::{Icon, icons};
use crate::ui::use_api_client;

/// Home/overview page component
#[component]
pub fn HomePage() -> impl IntoView {
    let client = use_api_client();

    let health = RwSignal::new(None::<HealthStatus>);
    let datasource_count = RwSignal::new(None::<usize>);
    let tool_count = RwSignal::new(None::<usize>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    // Load overview data on mount
    Effect::new(move |_| {
        let client = client.clone();
        spawn_local(async move {
            loading.set(true);
            error.set(None);

            let (health_result, datasources_result, tools_result) = futures::join!(
                client.health(),
                client.list_datasources(),
                client.list_tools()
            );

            match health_result {
                Ok(status) => health.set(Some(status)),
                Err(err) => {
                    if let Some(msg) = form_error(err) {
                        error.set(Some(msg));
                    }
                }
            }
            if let Ok(list) = datasources_result {
                datasource_count.set(Some(list.len()));
            }
            if let Ok(list) = tools_result {
                tool_count.set(Some(list.len()));
            }

            loading.set(false);
        });
    });

    view! {
        <div>
            <h1 class="text-2xl font-bold text-theme-primary mb-1">"Overview"</h1>
            <p class="text-theme-secondary mb-8">"Status of your DMCP backend at a glance"</p>

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

            {move || {
                if loading.get() {
                    return None;
                }
                Some(view! {
                    <div class="grid grid-cols-1 sm:grid-cols-3 gap-4 mb-10">
                        // Backend health card
                        <div class="p-5 bg-theme-secondary rounded-xl border border-theme">
                            <div class="flex items-center justify-between mb-2">
                                <p class="text-sm font-medium text-theme-secondary">"Backend"</p>
                                {move || {
                                    let healthy = health.get()
                                        .map(|h| h.status == "healthy" || h.status == "ok")
                                        .unwrap_or(false);
                                    if healthy {
                                        view! {
                                            <span class="px-2 py-0.5 text-xs font-medium bg-green-100 dark:bg-green-900/30 text-green-700 dark:text-green-400 rounded">
                                                "Healthy"
                                            </span>
                                        }.into_any()
                                    } else {
                                        view! {
                                            <span class="px-2 py-0.5 text-xs font-medium bg-red-100 dark:bg-red-900/30 text-red-700 dark:text-red-400 rounded">
                                                "Unreachable"
                                            </span>
                                        }.into_any()
                                    }
                                }}
                            </div>
                            <p class="text-xs text-theme-tertiary">
                                {move || health.get()
                                    .and_then(|h| h.message)
                                    .unwrap_or_else(|| "No status message".to_string())}
                            </p>
                        </div>

                        // Data source count
                        <StatCard
                            label="Data Sources"
                            icon=icons::DATABASE
                            count=datasource_count
                            href="/data-sources"
                        />

                        // Tool count
                        <StatCard
                            label="Tools"
                            icon=icons::TOOL
                            count=tool_count
                            href="/tools"
                        />
                    </div>
                })
            }}

            // Quick actions
            <h2 class="text-lg font-semibold text-theme-primary mb-4">"Quick Actions"</h2>
            <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                <QuickLink
                    href="/data-sources/create"
                    icon=icons::DATABASE
                    title="Add Data Source"
                    description="Register a database connection"
                />
                <QuickLink
                    href="/tools/create"
                    icon=icons::TOOL
                    title="Create Tool"
                    description="Define a parameterized query"
                />
                <QuickLink
                    href="/generate-token"
                    icon=icons::KEY
                    title="Generate Token"
                    description="Issue an API token for clients"
                />
            </div>
        </div>
    }
}

/// Count card linking into a management page
#[component]
fn StatCard(
    label: &'static str,
    icon: &'static str,
    count: RwSignal<Option<usize>>,
    href: &'static str,
) -> impl IntoView {
    view! {
        <A href=href attr:class="block">
            <div class="p-5 bg-theme-secondary rounded-xl border border-theme hover:border-accent-primary/50 transition-colors">
                <div class="flex items-center justify-between mb-2">
                    <p class="text-sm font-medium text-theme-secondary">{label}</p>
                    <Icon name=icon class="w-5 h-5 text-theme-tertiary" />
                </div>
                <p class="text-3xl font-bold text-theme-primary">
                    {move || count.get().map(|n| n.to_string()).unwrap_or_else(|| "—".to_string())}
                </p>
            </div>
        </A>
    }
}

/// Quick action link card
#[component]
fn QuickLink(
    href: &'static str,
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <A href=href attr:class="block">
            <div class="p-5 bg-theme-secondary rounded-xl border border-theme hover:border-accent-primary/50 transition-colors">
                <div class="w-10 h-10 bg-accent-primary/10 rounded-lg flex items-center justify-center mb-3">
                    <Icon name=icon class="w-5 h-5 text-accent-primary" />
                </div>
                <h3 class="font-medium text-theme-primary">{title}</h3>
                <p class="text-xs text-theme-tertiary mt-1">{description}</p>
            </div>
        </A>
    }
}
