use dioxus::prelude::*;

/// Upload form for the gallery owner. The helper text below the picker is
/// kept current by the browser binding.
#[component]
pub fn UploadPanel(feedback: Signal<String>) -> Element {
    rsx! {
        form {
            class: "upload-form",
            method: "post",
            action: "/upload",
            enctype: "multipart/form-data",
            label { r#for: "file-upload", class: "upload-label", "Add media" }
            input {
                id: "file-upload",
                r#type: "file",
                name: "files",
                multiple: true,
                accept: "image/*,video/*,audio/*,application/pdf",
            }
            small { id: "upload-helper-text", class: "upload-helper", "{feedback}" }
            button { r#type: "submit", class: "upload-submit", "Upload" }
        }
    }
}
