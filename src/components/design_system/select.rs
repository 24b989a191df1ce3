use leptos::ev;
use leptos::prelude::*;

/// A styled select dropdown.
#[component]
pub fn Select(
    /// Initial selected value
    #[prop(into, optional)]
    value: String,
    /// Change handler, called with the newly selected value
    #[prop(into, optional)]
    on_change: Option<Callback<String>>,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    /// Select options
    children: Children,
) -> impl IntoView {
    let full_class = format!("filter-select {}", class);

    let handle_change = move |evt: ev::Event| {
        if let Some(callback) = on_change {
            let target = event_target::<web_sys::HtmlSelectElement>(&evt);
            callback.run(target.value());
        }
    };

    view! {
        <select class=full_class on:change=handle_change prop:value=value>
            {children()}
        </select>
    }
}
