use leptos::ev;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::utils::scroll::smooth_scroll_to;

/// Fixed top navigation bar with anchor links, a mobile hamburger menu,
/// and a shadow that appears once the page is scrolled.
#[component]
pub fn Navbar() -> impl IntoView {
    let menu_open = RwSignal::new(false);
    let scrolled = RwSignal::new(false);

    let scroll_handle = window_event_listener(ev::scroll, move |_| {
        let y = window().scroll_y().unwrap_or_default();
        scrolled.set(y > 50.0);
    });
    on_cleanup(move || scroll_handle.remove());

    let anchor = move |selector: &'static str| {
        move |evt: ev::MouseEvent| {
            evt.prevent_default();
            menu_open.set(false);
            smooth_scroll_to(selector);
        }
    };

    view! {
        <nav class=move || if scrolled.get() { "navbar scrolled" } else { "navbar" }>
            <div class="nav-container">
                <A attr:class="nav-logo" href="/">
                    "Refundable"
                </A>
                <div class=move || {
                    if menu_open.get() { "nav-links active" } else { "nav-links" }
                }>
                    <a href="#how-it-works" on:click=anchor("#how-it-works")>
                        "How It Works"
                    </a>
                    <a href="#calculator" on:click=anchor("#calculator")>
                        "Calculator"
                    </a>
                    <a href="#faq" on:click=anchor("#faq")>
                        "FAQ"
                    </a>
                    <A attr:class="nav-login" href="/login">
                        "Log In"
                    </A>
                    <A attr:class="btn btn-primary" href="/signup">
                        "Get Started"
                    </A>
                </div>
                <button
                    class=move || {
                        if menu_open.get() { "mobile-menu-btn active" } else { "mobile-menu-btn" }
                    }
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </nav>
    }
}
