use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::core::api::ApiClient;
use crate::core::config;
use crate::core::token_store::BrowserTokenStore;
use crate::ui::auth::provide_auth_context;
use crate::ui::notifications::provide_toasts;
use crate::ui::pages::{
    ChangePasswordPage, CreateDataSourcePage, CreateToolPage, DataSourcesPage, EditDataSourcePage,
    EditToolPage, GenerateTokenPage, HomePage, LoginPage, NotFoundPage, ProfilePage, ToolsPage,
};
use crate::ui::session::{ExpiryNotifier, SessionExpiredDialog, provide_session_context};
use crate::ui::theme::provide_theme_context;
use crate::ui::{ConsoleLayout, ProtectedRoute, PublicRoute, ToastContainer};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    provide_theme_context();
    provide_toasts();

    // Auth-failure broadcast: the API client emits, the session expiry
    // monitor subscribes. Wired here so neither knows about the other.
    let notifier = ExpiryNotifier::new();

    let client = ApiClient::new(
        config::api_base_url(),
        Arc::new(BrowserTokenStore),
        Arc::new(move || notifier.notify()),
    );
    provide_context(client);

    let auth = provide_auth_context();
    provide_session_context(auth, notifier);

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/dmcp-console.css"/>

        // sets the document title
        <Title text="DMCP Console"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <PublicRoute><LoginPage /></PublicRoute> }
                />
                <Route
                    path=StaticSegment("")
                    view=|| view! { <ProtectedRoute><ConsoleLayout><HomePage /></ConsoleLayout></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("data-sources")
                    view=|| view! { <ProtectedRoute><ConsoleLayout><DataSourcesPage /></ConsoleLayout></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("data-sources"), StaticSegment("create"))
                    view=|| view! { <ProtectedRoute><ConsoleLayout><CreateDataSourcePage /></ConsoleLayout></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("data-sources"), StaticSegment("edit"), ParamSegment("id"))
                    view=|| view! { <ProtectedRoute><ConsoleLayout><EditDataSourcePage /></ConsoleLayout></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("tools")
                    view=|| view! { <ProtectedRoute><ConsoleLayout><ToolsPage /></ConsoleLayout></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("tools"), StaticSegment("create"))
                    view=|| view! { <ProtectedRoute><ConsoleLayout><CreateToolPage /></ConsoleLayout></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("tools"), StaticSegment("edit"), ParamSegment("id"))
                    view=|| view! { <ProtectedRoute><ConsoleLayout><EditToolPage /></ConsoleLayout></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("generate-token")
                    view=|| view! { <ProtectedRoute><ConsoleLayout><GenerateTokenPage /></ConsoleLayout></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("change-password")
                    view=|| view! { <ProtectedRoute><ConsoleLayout><ChangePasswordPage /></ConsoleLayout></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("profile")
                    view=|| view! { <ProtectedRoute><ConsoleLayout><ProfilePage /></ConsoleLayout></ProtectedRoute> }
                />
            </Routes>

            // Mounted once, outside the route tree, so navigation cannot
            // orphan an active countdown.
            <SessionExpiredDialog />
            <ToastContainer />
        </Router>
    }
}
