use leptos::prelude::*;
use web_sys::{DragEvent, File, HtmlInputElement};

use crate::shared::file_preview::{add_file_list, PendingUploads, ACCEPTED_DOCUMENTS};
use crate::shared::icons::icon;

pub type UploadList = RwSignal<PendingUploads<File>, LocalStorage>;

/// Pending-upload list owned by the calling page. Leaving the page clears
/// it, which releases every preview.
pub fn use_upload_list() -> UploadList {
    let uploads: UploadList = RwSignal::new_local(PendingUploads::default());
    on_cleanup(move || {
        let _ = uploads.try_update(PendingUploads::clear);
    });
    uploads
}

#[component]
pub fn FileDropZone(
    uploads: UploadList,
    #[prop(optional, into)] title: String,
    #[prop(optional)] accept: Option<&'static str>,
) -> impl IntoView {
    let dragging = RwSignal::new(false);
    let accept = accept.unwrap_or(ACCEPTED_DOCUMENTS);
    let title = if title.is_empty() { "Supporting documents".to_string() } else { title };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        dragging.set(false);
        let files = ev.data_transfer().and_then(|dt| dt.files());
        uploads.update(|u| add_file_list(u, files));
    };

    let on_pick = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        uploads.update(|u| add_file_list(u, input.files()));
        input.set_value("");
    };

    view! {
        <div class="form__group">
            <label class="form__label">{title}</label>
            <label
                class="file-drop"
                class:file-drop--active=move || dragging.get()
                on:dragover=move |ev: DragEvent| {
                    ev.prevent_default();
                    dragging.set(true);
                }
                on:dragleave=move |_| dragging.set(false)
                on:drop=on_drop
            >
                {icon("upload")}
                <span class="file-drop__hint">
                    "Drag and drop files here, or click to browse (multiple files supported)"
                </span>
                <input type="file" multiple accept=accept class="file-drop__input" on:change=on_pick />
            </label>

            <div class="file-drop__list">
                <For
                    each=move || uploads.with(|u| u.rows())
                    key=|row| row.id
                    children=move |row| {
                        let id = row.id;
                        view! {
                            <div class="file-drop__item">
                                {match (row.is_image, row.url.clone()) {
                                    (true, Some(url)) => view! {
                                        <img class="file-drop__thumb" src=url alt=row.name.clone() />
                                    }.into_any(),
                                    _ => view! { <span class="file-drop__thumb">{icon("file")}</span> }.into_any(),
                                }}
                                <div class="file-drop__meta">
                                    <span class="file-drop__name">{row.name.clone()}</span>
                                    <span class="file-drop__size">{row.size_label.clone()}</span>
                                </div>
                                <button
                                    type="button"
                                    class="file-drop__remove"
                                    title="Remove"
                                    on:click=move |_| uploads.update(|u| u.remove(id))
                                >
                                    {icon("x")}
                                </button>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
