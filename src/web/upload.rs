use std::rc::Rc;

use dioxus::core::{Runtime, RuntimeGuard};
use dioxus::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use super::{document, EventSubscription};
use crate::utils::upload_feedback_text;

pub const UPLOAD_INPUT_ID: &str = "file-upload";

/// Keep the upload helper text in step with the file picker.
pub fn watch_upload_input(
    runtime: Rc<Runtime>,
    mut feedback: Signal<String>,
) -> Option<EventSubscription> {
    let input = document()?
        .get_element_by_id(UPLOAD_INPUT_ID)?
        .dyn_into::<HtmlInputElement>()
        .ok()?;
    let element = input.clone();
    Some(EventSubscription::listen(&input, "change", move |_| {
        let selected = element.files().map(|files| files.length()).unwrap_or(0);
        let _guard = RuntimeGuard::new(runtime.clone());
        feedback.set(upload_feedback_text(selected));
    }))
}
