//! Browser binding: DOM host, listeners and page input.

mod dom_host;
mod listeners;
mod upload;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use dioxus::core::Runtime;
use dioxus::prelude::*;
use gloo_timers::callback::Timeout;
use tracing::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element};

pub use dom_host::DomHost;
pub use listeners::{EventSubscription, GlobalListeners};
pub use upload::watch_upload_input;

use crate::error::SlideshowError;
use crate::models::SlideshowInput;
use crate::slideshow::{FullscreenTarget, SlideshowController, StageView};

pub const CONTAINER_ID: &str = "slideshow-container";
pub const DATA_ELEMENT_ID: &str = "slideshow-data";

pub type WebController = SlideshowController<DomHost>;

pub(crate) fn document() -> Option<Document> {
    window()?.document()
}

/// Weak handle used by every DOM callback to reach the controller.
#[derive(Clone)]
pub struct ControllerHandle(Weak<RefCell<WebController>>);

impl ControllerHandle {
    /// Run `f` against the controller. When the controller is already
    /// borrowed (a callback fired from inside one of its own host calls)
    /// the call is deferred to the next turn of the event loop.
    pub fn dispatch<F>(&self, f: F)
    where
        F: FnOnce(&mut WebController) + 'static,
    {
        let Some(shared) = self.0.upgrade() else {
            return;
        };
        let Ok(mut controller) = shared.try_borrow_mut() else {
            let handle = self.clone();
            Timeout::new(0, move || handle.dispatch(f)).forget();
            return;
        };
        f(&mut controller);
    }
}

/// Current fullscreen owner as seen by the document.
pub fn fullscreen_target() -> FullscreenTarget {
    let Some(document) = document() else {
        return FullscreenTarget::None;
    };
    let element = document.fullscreen_element().or_else(|| {
        js_sys::Reflect::get(&document, &"webkitFullscreenElement".into())
            .ok()
            .and_then(|value| value.dyn_into::<Element>().ok())
    });
    match element {
        None => FullscreenTarget::None,
        Some(el) if el.id() == CONTAINER_ID => FullscreenTarget::Container,
        Some(el) if matches!(el.tag_name().to_ascii_lowercase().as_str(), "video" | "audio") => {
            FullscreenTarget::MediaElement
        }
        Some(_) => FullscreenTarget::None,
    }
}

/// Parse the JSON blob the page embeds for the slideshow.
pub fn read_input() -> Result<SlideshowInput, SlideshowError> {
    let script = document()
        .and_then(|d| d.get_element_by_id(DATA_ELEMENT_ID))
        .ok_or(SlideshowError::MissingElement(DATA_ELEMENT_ID))?;
    SlideshowInput::from_json(&script.text_content().unwrap_or_default())
}

/// A started slideshow and the page listeners feeding it.
pub struct Mounted {
    controller: Rc<RefCell<WebController>>,
    _listeners: GlobalListeners,
    _upload: Option<EventSubscription>,
}

impl Mounted {
    pub fn handle(&self) -> ControllerHandle {
        ControllerHandle(Rc::downgrade(&self.controller))
    }
}

/// Build the controller over the rendered page and start it. Must run
/// after the first render so the slots and container exist.
pub fn mount(
    input: SlideshowInput,
    view: Signal<StageView>,
    upload_feedback: Signal<String>,
) -> Result<Mounted, SlideshowError> {
    document()
        .and_then(|d| d.get_element_by_id(CONTAINER_ID))
        .ok_or(SlideshowError::MissingElement(CONTAINER_ID))?;

    let runtime = Runtime::current();
    let public_view = input.public_view;
    let controller = Rc::new_cyclic(|weak| {
        let host = DomHost::new(ControllerHandle(weak.clone()), runtime.clone(), view);
        RefCell::new(SlideshowController::new(host, input))
    });
    let handle = ControllerHandle(Rc::downgrade(&controller));
    let listeners = GlobalListeners::install(&handle);
    let upload = if public_view {
        None
    } else {
        watch_upload_input(runtime, upload_feedback)
    };

    handle.dispatch(|c| {
        c.start();
        c.on_fullscreen_change(fullscreen_target());
    });
    info!("slideshow mounted");

    Ok(Mounted {
        controller,
        _listeners: listeners,
        _upload: upload,
    })
}

/// Mount, logging instead of failing so a broken page still renders.
pub fn mount_or_log(
    input: SlideshowInput,
    view: Signal<StageView>,
    upload_feedback: Signal<String>,
) -> Option<Mounted> {
    match mount(input, view, upload_feedback) {
        Ok(mounted) => Some(mounted),
        Err(err) => {
            warn!(error = %err, "slideshow not mounted");
            None
        }
    }
}
