use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};
use wasm_bindgen_futures::spawn_local;

use crate::components::design_system::{Button, Input};
use crate::services::session::{authenticate, use_session, validate_login};
use crate::services::toast::use_toast;

use super::SocialButtons;

/// Login page. Validation failures surface as error toasts; a successful
/// mock login persists the session and redirects to the dashboard after a
/// short pause.
#[component]
pub fn Login() -> impl IntoView {
    let session = use_session();
    let toasts = use_toast();

    // Already signed in, go straight to the dashboard.
    let redirect = use_navigate();
    Effect::new(move |_| {
        if session.is_authenticated() {
            redirect("/dashboard", Default::default());
        }
    });

    // The hero form hands its email along in the query string.
    let query = use_query_map();
    let email = RwSignal::new(query.get_untracked().get("email").unwrap_or_default());
    let password = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let navigate = use_navigate();
    let on_submit = move |evt: ev::SubmitEvent| {
        evt.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if let Err(err) = validate_login(&email_value, &password_value) {
            toasts.error(err.to_string());
            return;
        }

        submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            // Simulated network round trip
            TimeoutFuture::new(1_500).await;
            match authenticate(&email_value, &password_value) {
                Ok(user) => {
                    session.log_in(user);
                    toasts.success("Login successful! Redirecting...");
                    TimeoutFuture::new(1_000).await;
                    navigate("/dashboard", Default::default());
                }
                Err(err) => {
                    toasts.error(err.to_string());
                    submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <p class="auth-subtitle">"Log in to track your refund claims"</p>
                <form class="auth-form" on:submit=on_submit>
                    <div class="form-group">
                        <label for="login-email">"Email"</label>
                        <Input
                            id="login-email"
                            value=email
                            input_type="email"
                            placeholder="you@company.com"
                            disabled=Signal::derive(move || submitting.get())
                        />
                    </div>
                    <div class="form-group">
                        <label for="login-password">"Password"</label>
                        <Input
                            id="login-password"
                            value=password
                            input_type="password"
                            placeholder="Your password"
                            disabled=Signal::derive(move || submitting.get())
                        />
                    </div>
                    <Button
                        button_type="submit"
                        class="btn-block"
                        disabled=Signal::derive(move || submitting.get())
                    >
                        {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                    </Button>
                </form>
                <div class="auth-divider">"or"</div>
                <SocialButtons />
                <p class="auth-switch">
                    "Don't have an account? " <A href="/signup">"Sign up"</A>
                </p>
            </div>
        </div>
    }
}
