//! Route guard components
//!
//! Wrap a routed view to gate it on the auth phase. While the phase is
//! still `Initializing` a loading screen is shown and no redirect
//! decision is made; once resolved, disallowed visitors are navigated
//! away with history replacement so the back button cannot bounce them
//! into a page that immediately redirects again. Guarded children are
//! only mounted once the check passes, so no protected data fetch starts
//! early.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::core::guard::{GuardOutcome, RouteClass, evaluate};
use crate::ui::auth::use_auth_context;
use crate::ui::icon::{Icon, icons};

/// Views that require a session.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    GuardedView(RouteClass::Protected, children)
}

/// Views only meaningful without a session (login).
#[component]
pub fn PublicRoute(children: ChildrenFn) -> impl IntoView {
    GuardedView(RouteClass::Public, children)
}

#[allow(non_snake_case)]
fn GuardedView(class: RouteClass, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth_context();

    // Navigate once the phase resolves against the route class. The
    // effect re-runs only on phase changes, so the redirect fires once.
    Effect::new(move |_| {
        let target = match evaluate(class, &auth.state.get()) {
            GuardOutcome::RedirectToLogin => "/login",
            GuardOutcome::RedirectToHome => "/",
            GuardOutcome::Wait | GuardOutcome::Render => return,
        };
        let navigate = use_navigate();
        navigate(
            target,
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    });

    view! {
        {move || {
            match evaluate(class, &auth.state.get()) {
                GuardOutcome::Render => children().into_any(),
                // Waiting for initialization, or about to navigate away:
                // nothing guarded is mounted.
                _ => view! { <LoadingScreen /> }.into_any(),
            }
        }}
    }
}

/// Full-screen spinner shown during the auth transient.
#[component]
fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-theme-primary flex items-center justify-center">
            <div class="text-center">
                <Icon name=icons::LOADER class="animate-spin h-10 w-10 text-accent-primary mx-auto" />
                <p class="mt-4 text-theme-secondary">"Loading..."</p>
            </div>
        </div>
    }
}
