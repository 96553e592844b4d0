//! Session expiry wiring: broadcast, countdown clock and dialog
//!
//! The API client fires [`ExpiryNotifier::notify`] on every rejected
//! authenticated request. One subscriber, registered at the app root,
//! drives the pure countdown machine in `core::expiry` with a 1-second
//! interval and renders the dialog. The interval handle is stored so
//! dismissal or teardown cancels it; no callback fires after the dialog
//! is gone.

use leptos::prelude::*;

use crate::core::expiry::ExpiryMonitor;
#[cfg(not(feature = "ssr"))]
use crate::core::expiry::Tick;
use crate::ui::auth::{AuthContext, use_auth_context};
use crate::ui::icon::{Icon, icons};

#[cfg(not(feature = "ssr"))]
use gloo_timers::callback::Interval;

/// Broadcast channel for authentication failures.
///
/// A counter signal: emitting bumps it, subscribers watch transitions.
/// Late subscribers only see emissions made after they subscribed; there
/// is no replay.
#[derive(Clone, Copy)]
pub struct ExpiryNotifier {
    emissions: RwSignal<u32>,
}

impl ExpiryNotifier {
    pub fn new() -> Self {
        Self {
            emissions: RwSignal::new(0),
        }
    }

    /// Broadcast an authentication failure. Fire-and-forget: the caller
    /// does not wait for subscribers.
    pub fn notify(&self) {
        self.emissions.update(|n| *n += 1);
    }

    fn emissions(&self) -> RwSignal<u32> {
        self.emissions
    }
}

impl Default for ExpiryNotifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Reactive wrapper around the countdown machine.
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Countdown state; the dialog renders from this signal
    pub monitor: RwSignal<ExpiryMonitor>,
    #[cfg(not(feature = "ssr"))]
    timer: StoredValue<Option<Interval>, LocalStorage>,
}

impl SessionContext {
    /// React to an authentication-failure broadcast.
    fn begin(&self, auth: AuthContext) {
        // The machine ignores the trigger while logged out or while a
        // countdown is already running, so concurrent 401s cannot stack
        // timers.
        let started = self
            .monitor
            .try_update(|m| m.trigger(auth.is_authenticated_untracked()))
            .unwrap_or(false);
        if started {
            self.start_timer(auth);
        }
    }

    /// Close the dialog without logging out.
    pub fn dismiss(&self) {
        self.stop_timer();
        self.monitor.update(|m| m.dismiss());
    }

    /// Short-circuit the countdown and log out immediately.
    pub fn logout_now(&self, auth: AuthContext) {
        self.stop_timer();
        self.monitor.update(|m| m.dismiss());
        auth.logout();
    }

    #[cfg(not(feature = "ssr"))]
    fn start_timer(&self, auth: AuthContext) {
        let session = *self;
        let interval = Interval::new(1_000, move || session.on_tick(auth));
        // Replacing the stored handle drops (and thereby cancels) any
        // previous interval.
        self.timer.set_value(Some(interval));
    }

    #[cfg(feature = "ssr")]
    fn start_timer(&self, _auth: AuthContext) {}

    #[cfg(not(feature = "ssr"))]
    fn stop_timer(&self) {
        self.timer.set_value(None);
    }

    #[cfg(feature = "ssr")]
    fn stop_timer(&self) {}

    #[cfg(not(feature = "ssr"))]
    fn on_tick(&self, auth: AuthContext) {
        match self
            .monitor
            .try_update(|m| m.tick())
            .unwrap_or(Tick::Idle)
        {
            Tick::LogOut => {
                self.stop_timer();
                auth.logout();
            }
            Tick::Counting(_) | Tick::Idle => {}
        }
    }
}

/// Provide the session context and subscribe it to the auth-failure
/// broadcast. Called once, at the app root.
pub fn provide_session_context(auth: AuthContext, notifier: ExpiryNotifier) -> SessionContext {
    let monitor = RwSignal::new(ExpiryMonitor::new());

    #[cfg(not(feature = "ssr"))]
    let ctx = SessionContext {
        monitor,
        timer: StoredValue::new_local(None),
    };
    #[cfg(feature = "ssr")]
    let ctx = SessionContext { monitor };

    // `immediate = false`: only emissions after this point are observed.
    Effect::watch(
        move || notifier.emissions().get(),
        move |_, _, _| ctx.begin(auth),
        false,
    );

    provide_context(ctx);
    ctx
}

/// Session context from the component tree
pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}

/// Modal shown while the logout countdown is running.
///
/// Mounted once, inside the router, so navigation cannot orphan an
/// active countdown.
#[component]
pub fn SessionExpiredDialog() -> impl IntoView {
    let auth = use_auth_context();
    let session = use_session_context();

    view! {
        {move || {
            let monitor = session.monitor.get();
            if !monitor.is_active() {
                return None;
            }
            let remaining = monitor.remaining().unwrap_or(0);
            let unit = if remaining == 1 { "second" } else { "seconds" };

            Some(view! {
                <div class="fixed inset-0 z-50 flex items-center justify-center">
                    // Backdrop; clicking it dismisses without logging out
                    <div
                        class="absolute inset-0 bg-black/50 backdrop-blur-sm"
                        on:click=move |_| session.dismiss()
                    ></div>

                    // Dialog
                    <div class="relative bg-theme-primary rounded-xl shadow-2xl border border-theme p-6 w-full max-w-md mx-4">
                        <button
                            type="button"
                            class="absolute top-4 right-4 text-theme-tertiary hover:text-theme-secondary"
                            on:click=move |_| session.dismiss()
                        >
                            <Icon name=icons::X class="h-5 w-5" />
                        </button>

                        <div class="flex items-center gap-4">
                            <div class="flex-shrink-0 w-10 h-10 rounded-full bg-red-100 dark:bg-red-900/30 flex items-center justify-center">
                                <Icon name=icons::LOGOUT class="w-5 h-5 text-red-600 dark:text-red-400" />
                            </div>
                            <div>
                                <h3 class="text-lg font-semibold text-theme-primary">"Session Expired"</h3>
                                <p class="text-sm text-theme-secondary">
                                    "Your session has expired for security reasons."
                                </p>
                            </div>
                        </div>

                        <div class="py-4">
                            <div class="flex items-center justify-center gap-2 text-theme-secondary">
                                <Icon name=icons::CLOCK class="w-4 h-4" />
                                <span>"Logging you out in"</span>
                                <span class="font-bold text-lg text-red-600 dark:text-red-400">{remaining}</span>
                                <span>{unit}</span>
                            </div>
                        </div>

                        <div class="flex justify-end">
                            <button
                                class="px-4 py-2 text-sm font-medium text-theme-secondary border border-theme
                                       rounded-lg hover:bg-theme-secondary transition-colors"
                                on:click=move |_| session.logout_now(auth)
                            >
                                "Logout Now"
                            </button>
                        </div>
                    </div>
                </div>
            })
        }}
    }
}
