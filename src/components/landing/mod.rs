//! Marketing landing page.

pub mod calculator;
pub mod faq;
pub mod hero;
pub mod navbar;
pub mod stats;

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::utils::observer::observe_once;
use crate::utils::scroll::smooth_scroll_to;

use calculator::CalculatorSection;
use faq::Faq;
use hero::Hero;
use navbar::Navbar;
use stats::StatsSection;

/// Wraps a card so it fades in the first time it scrolls into view.
#[component]
fn Reveal(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let started = StoredValue::new(false);

    Effect::new(move |_| {
        if started.get_value() {
            return;
        }
        if let Some(element) = node.get() {
            started.set_value(true);
            let target = element.clone();
            observe_once(&element, 0.1, move || {
                let _ = target.class_list().add_1("visible");
            });
        }
    });

    view! {
        <div class=format!("{} animate-on-scroll", class) node_ref=node>
            {children()}
        </div>
    }
}

#[component]
fn HowItWorks() -> impl IntoView {
    view! {
        <section id="how-it-works" class="how-it-works">
            <h2>"How it works"</h2>
            <div class="steps-grid">
                <Reveal class="step-card">
                    <span class="step-number">"1"</span>
                    <h3>"Upload your invoices"</h3>
                    <p>
                        "Drop in your import invoices and entry summaries. "
                        "PDFs and scans both work."
                    </p>
                </Reveal>
                <Reveal class="step-card">
                    <span class="step-number">"2"</span>
                    <h3>"We find the overpayments"</h3>
                    <p>
                        "Our analysts check every tariff code and valuation "
                        "against current rulings and exclusions."
                    </p>
                </Reveal>
                <Reveal class="step-card">
                    <span class="step-number">"3"</span>
                    <h3>"Get your money back"</h3>
                    <p>
                        "We file the claims and track them to payout. "
                        "You only pay when a refund lands."
                    </p>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn ValueProps() -> impl IntoView {
    view! {
        <section class="value-props">
            <div class="props-grid">
                <Reveal class="prop-card">
                    <h3>"No recovery, no fee"</h3>
                    <p>"Our fee is 15% of what we actually recover. Nothing else."</p>
                </Reveal>
                <Reveal class="prop-card">
                    <h3>"Keep your broker"</h3>
                    <p>"We slot in beside your existing customs workflow."</p>
                </Reveal>
                <Reveal class="prop-card">
                    <h3>"Every claim tracked"</h3>
                    <p>"Watch each invoice move from pending to approved in one place."</p>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn Testimonials() -> impl IntoView {
    view! {
        <section class="testimonials">
            <h2>"Importers who got paid back"</h2>
            <div class="testimonials-grid">
                <Reveal class="testimonial-card">
                    <p>
                        "\"Refundable found $38,000 in misclassified entries our "
                        "broker had missed. The money was back in six weeks.\""
                    </p>
                    <span class="testimonial-author">
                        "Maria Chen, COO at Harbor Goods"
                    </span>
                </Reveal>
                <Reveal class="testimonial-card">
                    <p>
                        "\"We uploaded a year of invoices on a Friday and had a "
                        "claim estimate the following Tuesday.\""
                    </p>
                    <span class="testimonial-author">
                        "Devon Park, Founder of Atlas Imports"
                    </span>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    // Same offset-aware scrolling as the navbar anchors
    let anchor = |selector: &'static str| {
        move |evt: ev::MouseEvent| {
            evt.prevent_default();
            smooth_scroll_to(selector);
        }
    };

    view! {
        <footer class="footer">
            <div class="footer-content">
                <span class="footer-logo">"Refundable"</span>
                <div class="footer-links">
                    <a href="#how-it-works" on:click=anchor("#how-it-works")>
                        "How It Works"
                    </a>
                    <a href="#calculator" on:click=anchor("#calculator")>
                        "Calculator"
                    </a>
                    <a href="#faq" on:click=anchor("#faq")>
                        "FAQ"
                    </a>
                    <A href="/login">"Log In"</A>
                </div>
                <span class="footer-copy">"\u{00a9} 2024 Refundable. All rights reserved."</span>
            </div>
        </footer>
    }
}

/// Full landing page assembly.
#[component]
pub fn Landing() -> impl IntoView {
    view! {
        <Navbar />
        <main>
            <Hero />
            <HowItWorks />
            <ValueProps />
            <CalculatorSection />
            <StatsSection />
            <Testimonials />
            <Faq />
        </main>
        <Footer />
    }
}
