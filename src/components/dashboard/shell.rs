use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use crate::services::session::{use_session, SessionState};
use crate::services::toast::{use_toast, ToastState};
use crate::utils::formatting::initials;

/// How long the farewell toast stays on screen before the session is
/// cleared and the auth guard redirects to the login page.
pub const LOGOUT_REDIRECT_DELAY_MS: u32 = 1_000;

/// Show the farewell toast, then clear the session once the pause has
/// elapsed. Clearing the session re-runs the shell's auth guard, which
/// performs the actual redirect.
pub fn schedule_logout(session: SessionState, toasts: ToastState) {
    toasts.success("Logged out successfully");
    spawn_local(async move {
        TimeoutFuture::new(LOGOUT_REDIRECT_DELAY_MS).await;
        session.log_out();
    });
}

/// Shared dashboard chrome: sidebar navigation, the signed-in user card,
/// and the auth guard that bounces anonymous visitors to the login page.
#[component]
pub fn DashboardShell(
    /// Sidebar entry to highlight ("dashboard" or "invoices")
    active: &'static str,
    children: Children,
) -> impl IntoView {
    let session = use_session();
    let toasts = use_toast();

    let navigate = use_navigate();
    Effect::new(move |_| {
        if !session.is_authenticated() {
            navigate("/login", Default::default());
        }
    });

    let log_out = move |_| schedule_logout(session, toasts);

    let user_initials = move || {
        session
            .current_user()
            .map(|u| initials(&u.first_name, &u.last_name))
            .unwrap_or_default()
    };
    let user_name = move || {
        session
            .current_user()
            .map(|u| format!("{} {}", u.first_name, u.last_name))
            .unwrap_or_default()
    };
    let user_email = move || session.current_user().map(|u| u.email).unwrap_or_default();

    let link_class =
        |active: &'static str, name: &'static str| if active == name { "nav-item active" } else { "nav-item" };

    view! {
        <div class="dashboard-layout">
            <aside class="sidebar">
                <A attr:class="sidebar-logo" href="/">
                    "Refundable"
                </A>
                <nav class="sidebar-nav">
                    <A attr:class=link_class(active, "dashboard") href="/dashboard">
                        "Dashboard"
                    </A>
                    <A attr:class=link_class(active, "invoices") href="/invoices">
                        "Invoices"
                    </A>
                </nav>
                <div class="sidebar-user">
                    <div class="user-avatar">{user_initials}</div>
                    <div class="user-details">
                        <span class="user-name">{user_name}</span>
                        <span class="user-email">{user_email}</span>
                    </div>
                    <button class="logout-btn" on:click=log_out>
                        "Log out"
                    </button>
                </div>
            </aside>
            <main class="dashboard-main">{children()}</main>
        </div>
    }
}
