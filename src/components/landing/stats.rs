use leptos::html;
use leptos::prelude::*;

use crate::utils::animation::animate_value;
use crate::utils::formatting::format_grouped;
use crate::utils::observer::observe_once;

/// A single stat whose number counts up from zero once the element
/// scrolls into view.
#[component]
pub fn StatCounter(
    /// Final value the counter settles on
    target: f64,
    #[prop(optional)] prefix: &'static str,
    #[prop(optional)] suffix: &'static str,
    label: &'static str,
) -> impl IntoView {
    let displayed = RwSignal::new(0.0_f64);
    let node = NodeRef::<html::Div>::new();
    let started = StoredValue::new(false);

    Effect::new(move |_| {
        if started.get_value() {
            return;
        }
        if let Some(element) = node.get() {
            started.set_value(true);
            observe_once(&element, 0.5, move || {
                animate_value(displayed, target, 2_000.0);
            });
        }
    });

    view! {
        <div class="stat-item" node_ref=node>
            <span class="stat-value">
                {move || {
                    format!("{}{}{}", prefix, format_grouped(displayed.get().round() as u32), suffix)
                }}
            </span>
            <span class="stat-label">{label}</span>
        </div>
    }
}

/// The headline numbers strip.
#[component]
pub fn StatsSection() -> impl IntoView {
    view! {
        <section class="stats">
            <div class="stats-grid">
                <StatCounter target=142.0 prefix="$" suffix="M+" label="Duties recovered" />
                <StatCounter target=12_000.0 suffix="+" label="Businesses served" />
                <StatCounter target=98.0 suffix="%" label="Claim success rate" />
                <StatCounter target=45.0 label="Days to average payout" />
            </div>
        </section>
    }
}
