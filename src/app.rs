use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::auth::{Login, Signup};
use crate::components::dashboard::{Invoices, Overview};
use crate::components::design_system::ToastHost;
use crate::components::landing::Landing;
use crate::services::session::provide_session_state;
use crate::services::toast::provide_toast_state;

#[component]
pub fn App() -> impl IntoView {
    // Provide global services
    provide_toast_state();
    provide_session_state();

    view! {
        <Router>
            <ToastHost />
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=Landing />
                <Route path=path!("/login") view=Login />
                <Route path=path!("/signup") view=Signup />
                <Route path=path!("/dashboard") view=Overview />
                <Route path=path!("/invoices") view=Invoices />
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"That page doesn't exist."</p>
            <A href="/">"Back to Refundable"</A>
        </div>
    }
}
