use leptos::ev;
use leptos::prelude::*;

/// A modal dialog overlay. Closes on backdrop click, the close button,
/// or the Escape key.
#[component]
pub fn Modal(
    /// Whether the modal is shown
    open: RwSignal<bool>,
    /// Modal title shown in the header
    #[prop(optional)]
    title: &'static str,
    /// Called whenever the modal closes, regardless of how
    #[prop(into, optional)]
    on_close: Option<Callback<()>>,
    /// Modal body content
    children: ChildrenFn,
) -> impl IntoView {
    let close = move || {
        open.set(false);
        if let Some(callback) = on_close {
            callback.run(());
        }
    };

    let keydown = window_event_listener(ev::keydown, move |evt| {
        if open.get_untracked() && evt.key() == "Escape" {
            close();
        }
    });
    on_cleanup(move || keydown.remove());

    view! {
        <Show when=move || open.get()>
            <div class="modal active" on:click=move |_| close()>
                <div class="modal-content" on:click=|evt| evt.stop_propagation()>
                    <div class="modal-header">
                        <h2>{title}</h2>
                        <button class="modal-close" aria-label="Close" on:click=move |_| close()>
                            "\u{00d7}"
                        </button>
                    </div>
                    <div class="modal-body">{children()}</div>
                </div>
            </div>
        </Show>
    }
}
