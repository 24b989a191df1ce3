use leptos::ev;
use leptos::prelude::*;

/// Button variant styles
#[derive(Default, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    /// Third-party sign-in buttons on the auth pages.
    Social,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Ghost => "btn btn-ghost",
            ButtonVariant::Social => "btn btn-social",
        }
    }
}

/// A styled button with the product's variants.
#[component]
pub fn Button(
    /// The visual variant of the button
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// HTML button type ("button" or "submit")
    #[prop(default = "button")]
    button_type: &'static str,
    /// Click handler
    #[prop(into, optional)]
    on_click: Option<Callback<ev::MouseEvent>>,
    /// Whether the button is disabled
    #[prop(into, default = Signal::derive(|| false))]
    disabled: Signal<bool>,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    /// Button content
    children: Children,
) -> impl IntoView {
    let full_class = format!("{} {}", variant.class(), class);

    let handle_click = move |evt: ev::MouseEvent| {
        if disabled.get_untracked() {
            return;
        }
        if let Some(callback) = on_click {
            callback.run(evt);
        }
    };

    view! {
        <button
            class=full_class
            type=button_type
            disabled=move || disabled.get()
            on:click=handle_click
        >
            {children()}
        </button>
    }
}
