use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::design_system::{Button, Modal};
use crate::services::toast::use_toast;

/// A file staged for the mock upload. Only the name survives selection;
/// nothing is ever transferred anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFile {
    pub name: String,
}

/// PDFs and images are accepted, everything else is silently skipped.
fn is_accepted(file: &web_sys::File) -> bool {
    let mime = file.type_();
    mime == "application/pdf" || mime.starts_with("image/")
}

fn staged_from_list(list: &web_sys::FileList) -> Vec<PendingFile> {
    let mut staged = Vec::new();
    for index in 0..list.length() {
        if let Some(file) = list.item(index) {
            if is_accepted(&file) {
                staged.push(PendingFile { name: file.name() });
            }
        }
    }
    staged
}

/// Invoice upload dialog with a click-or-drop zone. Submission is a mock:
/// a short delay, a success toast, and an activity-feed entry via
/// `on_uploaded`.
#[component]
pub fn UploadModal(
    /// Controls modal visibility; closing always clears the staged files
    open: RwSignal<bool>,
    /// Called with the file count after a successful mock upload
    #[prop(into)]
    on_uploaded: Callback<usize>,
) -> impl IntoView {
    let toasts = use_toast();

    let files = RwSignal::new(Vec::<PendingFile>::new());
    let drag_over = RwSignal::new(false);
    let uploading = RwSignal::new(false);
    let file_input = NodeRef::<html::Input>::new();

    let stage = move |list: Option<web_sys::FileList>| {
        if let Some(list) = list {
            files.update(|staged| staged.extend(staged_from_list(&list)));
        }
    };

    let on_drop = move |evt: ev::DragEvent| {
        evt.prevent_default();
        drag_over.set(false);
        stage(evt.data_transfer().and_then(|dt| dt.files()));
    };

    let on_file_change = move |_| {
        if let Some(input) = file_input.get_untracked() {
            stage(input.files());
            input.set_value("");
        }
    };

    let submit = move |_| {
        if uploading.get_untracked() {
            return;
        }
        let count = files.with_untracked(|staged| staged.len());
        if count == 0 {
            toasts.error("Please select at least one file");
            return;
        }

        uploading.set(true);
        toasts.info(format!("Uploading {} invoice(s)...", count));
        spawn_local(async move {
            TimeoutFuture::new(1_500).await;
            toasts.success("Invoices uploaded successfully!");
            on_uploaded.run(count);
            uploading.set(false);
            files.set(Vec::new());
            open.set(false);
        });
    };

    let clear_on_close = Callback::new(move |_| files.set(Vec::new()));

    view! {
        <Modal open=open title="Upload Invoices" on_close=clear_on_close>
            <div
                class=move || if drag_over.get() { "drop-zone dragover" } else { "drop-zone" }
                on:click=move |_| {
                    if let Some(input) = file_input.get_untracked() {
                        input.click();
                    }
                }
                on:dragover=move |evt: ev::DragEvent| {
                    evt.prevent_default();
                    drag_over.set(true);
                }
                on:dragleave=move |_| drag_over.set(false)
                on:drop=on_drop
            >
                <p>"Drag invoices here, or click to browse"</p>
                <span class="drop-hint">"PDF and image files"</span>
                <input
                    type="file"
                    multiple
                    accept="application/pdf,image/*"
                    class="file-input-hidden"
                    node_ref=file_input
                    on:change=on_file_change
                />
            </div>
            <div class="uploaded-files">
                {move || {
                    files
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, file)| {
                            view! {
                                <div class="file-item">
                                    <span>{file.name}</span>
                                    <button
                                        class="file-remove"
                                        aria-label="Remove file"
                                        on:click=move |_| {
                                            files.update(|staged| {
                                                staged.remove(index);
                                            });
                                        }
                                    >
                                        "\u{00d7}"
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <div class="modal-actions">
                <Button
                    on_click=Callback::new(submit)
                    disabled=Signal::derive(move || uploading.get())
                >
                    {move || if uploading.get() { "Uploading..." } else { "Submit Invoices" }}
                </Button>
            </div>
        </Modal>
    }
}
