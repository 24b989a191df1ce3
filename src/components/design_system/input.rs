use leptos::ev;
use leptos::prelude::*;

/// A styled text input bound to a signal.
#[component]
pub fn Input(
    /// The current value (two-way binding signal)
    #[prop(into)]
    value: RwSignal<String>,
    /// Placeholder text
    #[prop(into, optional)]
    placeholder: String,
    /// Input type (text, password, email, ...)
    #[prop(into, default = String::from("text"))]
    input_type: String,
    /// Element id, for pairing with a label
    #[prop(into, optional)]
    id: String,
    /// Input change handler (called with the new value)
    #[prop(into, optional)]
    on_input: Option<Callback<String>>,
    /// Whether the input is disabled
    #[prop(into, default = Signal::derive(|| false))]
    disabled: Signal<bool>,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    let full_class = format!("form-input {}", class);

    let handle_input = move |evt: ev::Event| {
        let new_value = event_target_value(&evt);
        value.set(new_value.clone());
        if let Some(callback) = on_input {
            callback.run(new_value);
        }
    };

    view! {
        <input
            class=full_class
            type=input_type
            id=id
            prop:value=move || value.get()
            placeholder=placeholder
            disabled=move || disabled.get()
            on:input=handle_input
        />
    }
}
