//! Smooth scrolling for in-page anchor links.

use leptos::prelude::*;

/// Height of the fixed navbar; anchors land just below it.
pub const HEADER_OFFSET: f64 = 80.0;

/// Smoothly scroll the viewport to the element matching `selector`,
/// offset for the fixed header. Missing targets are ignored.
pub fn smooth_scroll_to(selector: &str) {
    let Some(target) = document().query_selector(selector).ok().flatten() else {
        return;
    };

    let current = window().scroll_y().unwrap_or_default();
    let top = target.get_bounding_client_rect().top() + current - HEADER_OFFSET;

    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}
