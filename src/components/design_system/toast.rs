use std::time::Duration;

use leptos::prelude::*;

use crate::services::toast::{use_toast, TOAST_DURATION_MS};

/// Renders the single active toast and schedules its auto-dismissal.
///
/// Each shown toast carries a unique id; the timer only dismisses the
/// toast it was armed for, so a newer toast is never cut short by an
/// older toast's timer.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toast();

    Effect::new(move |_| {
        if let Some(toast) = toasts.current.get() {
            let id = toast.id;
            set_timeout(
                move || toasts.dismiss(id),
                Duration::from_millis(TOAST_DURATION_MS as u64),
            );
        }
    });

    view! {
        {move || {
            toasts
                .current
                .get()
                .map(|toast| {
                    view! {
                        <div class=format!("toast active {}", toast.kind.class()) role="status">
                            {toast.message}
                        </div>
                    }
                })
        }}
    }
}
