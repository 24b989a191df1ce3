use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};
use wasm_bindgen_futures::spawn_local;

use crate::components::design_system::{Button, Input};
use crate::services::session::{register, use_session, SignupForm};
use crate::services::toast::use_toast;

use super::SocialButtons;

/// Signup page. All fields are validated up front; a successful mock
/// registration persists the new session and redirects to the dashboard.
#[component]
pub fn Signup() -> impl IntoView {
    let session = use_session();
    let toasts = use_toast();

    let redirect = use_navigate();
    Effect::new(move |_| {
        if session.is_authenticated() {
            redirect("/dashboard", Default::default());
        }
    });

    let query = use_query_map();
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(query.get_untracked().get("email").unwrap_or_default());
    let company = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let accepted_terms = RwSignal::new(false);
    let submitting = RwSignal::new(false);

    let navigate = use_navigate();
    let on_submit = move |evt: ev::SubmitEvent| {
        evt.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let form = SignupForm {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            email: email.get_untracked(),
            company: company.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
            accepted_terms: accepted_terms.get_untracked(),
        };

        let user = match register(&form) {
            Ok(user) => user,
            Err(err) => {
                toasts.error(err.to_string());
                return;
            }
        };

        submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            // Simulated network round trip
            TimeoutFuture::new(2_000).await;
            session.log_in(user);
            toasts.success("Account created successfully!");
            TimeoutFuture::new(1_000).await;
            navigate("/dashboard", Default::default());
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create your account"</h1>
                <p class="auth-subtitle">"Start recovering your tariff overpayments"</p>
                <form class="auth-form" on:submit=on_submit>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="signup-first-name">"First name"</label>
                            <Input id="signup-first-name" value=first_name placeholder="Jane" />
                        </div>
                        <div class="form-group">
                            <label for="signup-last-name">"Last name"</label>
                            <Input id="signup-last-name" value=last_name placeholder="Smith" />
                        </div>
                    </div>
                    <div class="form-group">
                        <label for="signup-email">"Work email"</label>
                        <Input
                            id="signup-email"
                            value=email
                            input_type="email"
                            placeholder="you@company.com"
                        />
                    </div>
                    <div class="form-group">
                        <label for="signup-company">"Company"</label>
                        <Input id="signup-company" value=company placeholder="Acme Imports" />
                    </div>
                    <div class="form-group">
                        <label for="signup-password">"Password"</label>
                        <Input
                            id="signup-password"
                            value=password
                            input_type="password"
                            placeholder="At least 8 characters"
                        />
                    </div>
                    <div class="form-group">
                        <label for="signup-confirm">"Confirm password"</label>
                        <Input
                            id="signup-confirm"
                            value=confirm_password
                            input_type="password"
                            placeholder="Repeat your password"
                        />
                    </div>
                    <label class="form-checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || accepted_terms.get()
                            on:change=move |evt| accepted_terms.set(event_target_checked(&evt))
                        />
                        <span>"I agree to the Terms of Service"</span>
                    </label>
                    <Button
                        button_type="submit"
                        class="btn-block"
                        disabled=Signal::derive(move || submitting.get())
                    >
                        {move || {
                            if submitting.get() { "Creating account..." } else { "Create Account" }
                        }}
                    </Button>
                </form>
                <div class="auth-divider">"or"</div>
                <SocialButtons />
                <p class="auth-switch">
                    "Already have an account? " <A href="/login">"Log in"</A>
                </p>
            </div>
        </div>
    }
}
