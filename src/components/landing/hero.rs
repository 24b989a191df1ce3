use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::design_system::{Button, Input};
use crate::utils::animation::animate_value;
use crate::utils::formatting::format_grouped;

/// Target for the animated refund figure on the hero card.
const HERO_CARD_TARGET: f64 = 24_850.0;

#[derive(Clone, Copy, PartialEq, Eq)]
enum SubmitPhase {
    Idle,
    Submitting,
    Done,
}

/// Hero section with the email capture form and an animated sample
/// refund card.
#[component]
pub fn Hero() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let phase = RwSignal::new(SubmitPhase::Idle);

    let card_value = RwSignal::new(0.0_f64);
    set_timeout(
        move || animate_value(card_value, HERO_CARD_TARGET, 1_500.0),
        Duration::from_millis(500),
    );

    let on_submit = move |evt: ev::SubmitEvent| {
        evt.prevent_default();
        let address = email.get_untracked().trim().to_string();
        if address.is_empty() || phase.get_untracked() != SubmitPhase::Idle {
            return;
        }
        phase.set(SubmitPhase::Submitting);
        spawn_local(async move {
            TimeoutFuture::new(1_000).await;
            phase.set(SubmitPhase::Done);
            email.set(String::new());
            TimeoutFuture::new(3_000).await;
            phase.set(SubmitPhase::Idle);
        });
    };

    let button_label = move || match phase.get() {
        SubmitPhase::Idle => "Get Started",
        SubmitPhase::Submitting => "Submitting...",
        SubmitPhase::Done => "\u{2713} Submitted!",
    };

    view! {
        <section class="hero">
            <div class="hero-content">
                <h1>"Recover the tariffs you overpaid"</h1>
                <p class="hero-subtitle">
                    "Refundable finds duty overpayments in your import invoices and "
                    "files the refund claims for you. No recovery, no fee."
                </p>
                <form id="hero-email-form" class="hero-form" on:submit=on_submit>
                    <Input
                        value=email
                        input_type="email"
                        placeholder="Enter your work email"
                        disabled=Signal::derive(move || phase.get() != SubmitPhase::Idle)
                    />
                    <Button
                        button_type="submit"
                        disabled=Signal::derive(move || phase.get() != SubmitPhase::Idle)
                    >
                        {button_label}
                    </Button>
                </form>
            </div>
            <div class="hero-card">
                <span class="card-label">"Estimated refund"</span>
                <span class="card-value">
                    {move || format!("${}", format_grouped(card_value.get().round() as u32))}
                </span>
                <span class="card-caption">"based on a sample importer"</span>
            </div>
        </section>
    }
}
