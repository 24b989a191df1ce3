//! Login and signup pages.

pub mod login;
pub mod signup;

use leptos::prelude::*;

use crate::components::design_system::{Button, ButtonVariant};
use crate::services::toast::use_toast;

pub use login::Login;
pub use signup::Signup;

/// Placeholder third-party sign-in buttons shared by both auth pages.
#[component]
pub(crate) fn SocialButtons() -> impl IntoView {
    let toasts = use_toast();

    let social = move |provider: &'static str| {
        Callback::new(move |_| {
            toasts.info(format!("{} login coming soon!", provider));
        })
    };

    view! {
        <div class="social-buttons">
            <Button variant=ButtonVariant::Social on_click=social("Google")>
                "Continue with Google"
            </Button>
            <Button variant=ButtonVariant::Social on_click=social("Microsoft")>
                "Continue with Microsoft"
            </Button>
        </div>
    }
}
