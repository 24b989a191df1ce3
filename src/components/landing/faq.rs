use leptos::prelude::*;

const FAQ_ITEMS: &[(&str, &str)] = &[
    (
        "Which tariff payments qualify for a refund?",
        "Duties paid on imports that were misclassified, over-valued, or \
         later covered by an exclusion can usually be reclaimed. We review \
         every invoice you upload and flag the entries worth filing.",
    ),
    (
        "How far back can claims go?",
        "Most refund claims can be filed for entries liquidated within the \
         last 180 days, and protest-eligible entries may reach further back. \
         The sooner invoices are uploaded, the more we can recover.",
    ),
    (
        "What does Refundable cost?",
        "Nothing up front. We keep 15% of the gross refund when a claim pays \
         out. If we recover nothing, you owe nothing.",
    ),
    (
        "Do I need to change my customs broker?",
        "No. We work alongside your existing broker and only need the entry \
         documents and invoices you already have.",
    ),
    (
        "How long does a refund take?",
        "Straightforward claims typically pay out in four to eight weeks. \
         Contested classifications can take longer, and we track every claim \
         in your dashboard either way.",
    ),
];

/// FAQ accordion. Opening a question closes whichever one was open.
#[component]
pub fn Faq() -> impl IntoView {
    let open = RwSignal::new(None::<usize>);

    view! {
        <section id="faq" class="faq">
            <h2>"Frequently asked questions"</h2>
            <div class="faq-list">
                {FAQ_ITEMS
                    .iter()
                    .enumerate()
                    .map(|(index, (question, answer))| {
                        view! {
                            <div class=move || {
                                if open.get() == Some(index) { "faq-item active" } else { "faq-item" }
                            }>
                                <button
                                    class="faq-question"
                                    on:click=move |_| {
                                        open.update(|current| {
                                            *current = if *current == Some(index) {
                                                None
                                            } else {
                                                Some(index)
                                            };
                                        });
                                    }
                                >
                                    {*question}
                                </button>
                                <div class="faq-answer">
                                    <p>{*answer}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
