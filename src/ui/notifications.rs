//! Toast notifications for operation outcomes
//!
//! A small queue of transient messages shown in the top-right corner.
//! Pages report save/delete/test results through [`ToastManager`].

use leptos::prelude::*;
use std::collections::VecDeque;

/// Maximum number of toasts shown at once
const MAX_TOASTS: usize = 4;

/// How long a toast stays on screen
#[cfg(not(feature = "ssr"))]
const TOAST_DISMISS_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// Queue of active toasts, provided via context at the app root.
#[derive(Clone, Copy)]
pub struct ToastManager {
    toasts: RwSignal<VecDeque<Toast>>,
    next_id: RwSignal<u64>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(VecDeque::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn toasts(&self) -> RwSignal<VecDeque<Toast>> {
        self.toasts
    }

    fn push(&self, level: ToastLevel, message: impl Into<String>) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.toasts.update(|queue| {
            queue.push_back(Toast {
                id,
                level,
                message: message.into(),
            });
            while queue.len() > MAX_TOASTS {
                queue.pop_front();
            }
        });

        // Auto-dismiss
        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::spawn_local;

            let toasts = self.toasts;
            spawn_local(async move {
                TimeoutFuture::new(TOAST_DISMISS_MS).await;
                toasts.update(|queue| queue.retain(|t| t.id != id));
            });
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastLevel::Info, message);
    }
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide a toast manager at the application root
pub fn provide_toasts() -> ToastManager {
    let manager = ToastManager::new();
    provide_context(manager);
    manager
}

/// Toast manager from the component tree
pub fn use_toasts() -> ToastManager {
    expect_context::<ToastManager>()
}

/// Container rendering the active toasts. Mounted once, at the app root.
#[component]
pub fn ToastContainer() -> impl IntoView {
    let manager = use_toasts();
    let toasts = manager.toasts();

    view! {
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2 max-w-sm">
            {move || {
                toasts.get().into_iter().map(|toast| {
                    let id = toast.id;
                    let (container_class, icon_class, icon_name) = match toast.level {
                        ToastLevel::Success => (
                            "bg-green-500/10 border-green-500/30",
                            "text-green-500",
                            crate::ui::icons::CHECK,
                        ),
                        ToastLevel::Error => (
                            "bg-red-500/10 border-red-500/30",
                            "text-red-500",
                            crate::ui::icons::WARNING,
                        ),
                        ToastLevel::Info => (
                            "bg-blue-500/10 border-blue-500/30",
                            "text-blue-500",
                            crate::ui::icons::CLOCK,
                        ),
                    };

                    view! {
                        <div class=format!(
                            "flex items-start gap-3 p-4 rounded-lg border backdrop-blur-sm shadow-lg {}",
                            container_class,
                        )>
                            <div class=icon_class>
                                <crate::ui::Icon name=icon_name class="w-5 h-5" />
                            </div>
                            <p class="flex-1 min-w-0 text-sm text-theme-primary">{toast.message.clone()}</p>
                            <button
                                class="text-theme-tertiary hover:text-theme-primary transition-colors"
                                on:click=move |_| {
                                    toasts.update(|queue| queue.retain(|t| t.id != id));
                                }
                            >
                                <crate::ui::Icon name=crate::ui::icons::X class="w-4 h-4" />
                            </button>
                        </div>
                    }
                }).collect_view()
            }}
        </div>
    }
}
