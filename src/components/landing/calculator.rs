use leptos::ev;
use leptos::prelude::*;

use crate::services::calculator::{calculate_refund, clamp_amount, MAX_AMOUNT, MIN_AMOUNT};
use crate::utils::animation::animate_value;
use crate::utils::formatting::{format_currency, format_grouped, parse_grouped};

/// Interactive refund calculator: a text amount field kept in sync with a
/// range slider, with the gross refund figure eased to each new value.
#[component]
pub fn CalculatorSection() -> impl IntoView {
    let amount = RwSignal::new(50_000_u32);
    let amount_text = RwSignal::new(format_grouped(50_000));
    let gross_display = RwSignal::new(0.0_f64);

    let breakdown = Memo::new(move |_| calculate_refund(amount.get() as f64));

    Effect::new(move |_| {
        animate_value(gross_display, breakdown.get().gross_refund, 300.0);
    });

    let on_amount_input = move |evt: ev::Event| {
        let text = event_target_value(&evt);
        if let Some(value) = parse_grouped(&text) {
            amount.set(clamp_amount(value));
        }
        amount_text.set(text);
    };

    // Re-group the digits once the field loses focus
    let on_amount_blur = move |_| {
        amount_text.set(format_grouped(amount.get_untracked()));
    };

    let on_slider_input = move |evt: ev::Event| {
        if let Ok(value) = event_target_value(&evt).parse::<u32>() {
            amount.set(value);
            amount_text.set(format_grouped(value));
        }
    };

    view! {
        <section id="calculator" class="calculator">
            <h2>"See what you could get back"</h2>
            <div class="calculator-card">
                <div class="calculator-controls">
                    <label for="tariff-amount">"Tariffs paid in the last 12 months"</label>
                    <div class="amount-field">
                        <span class="amount-prefix">"$"</span>
                        <input
                            id="tariff-amount"
                            class="form-input"
                            type="text"
                            inputmode="numeric"
                            prop:value=move || amount_text.get()
                            on:input=on_amount_input
                            on:blur=on_amount_blur
                        />
                    </div>
                    <input
                        id="tariff-slider"
                        type="range"
                        min=MIN_AMOUNT.to_string()
                        max=MAX_AMOUNT.to_string()
                        step="1000"
                        prop:value=move || amount.get().to_string()
                        on:input=on_slider_input
                    />
                </div>
                <div class="calculator-result">
                    <span class="result-label">"Estimated gross refund"</span>
                    <span id="refund-amount" class="result-value">
                        {move || format!("${}", format_grouped(gross_display.get().round() as u32))}
                    </span>
                    <ul class="result-breakdown">
                        <li>
                            <span>"Tariff payment"</span>
                            <span id="breakdown-payment">
                                {move || format_currency(breakdown.get().payment.round() as u32)}
                            </span>
                        </li>
                        <li>
                            <span>"Your net refund"</span>
                            <span id="breakdown-net">
                                {move || format_currency(breakdown.get().net_refund.round() as u32)}
                            </span>
                        </li>
                        <li>
                            <span>"Our fee (15% of recovery)"</span>
                            <span id="breakdown-fee">
                                {move || format_currency(breakdown.get().fee.round() as u32)}
                            </span>
                        </li>
                    </ul>
                </div>
            </div>
        </section>
    }
}
