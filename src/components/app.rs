use crate::components::{SlideshowPage, UploadPanel};
use crate::models::SlideshowInput;
use crate::slideshow::{StageAction, StageView};
use crate::utils::upload_feedback_text;
use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
use tracing::debug;
#[cfg(target_arch = "wasm32")]
use tracing::warn;

fn load_input() -> SlideshowInput {
    #[cfg(target_arch = "wasm32")]
    {
        match crate::web::read_input() {
            Ok(input) => input,
            Err(err) => {
                warn!(error = %err, "no usable slideshow data, showing an empty slideshow");
                SlideshowInput::default()
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        SlideshowInput::default()
    }
}

/// Routes rendered-control actions to the mounted controller.
#[derive(Clone, Default)]
struct StageBridge {
    #[cfg(target_arch = "wasm32")]
    mounted: Rc<RefCell<Option<crate::web::Mounted>>>,
}

impl StageBridge {
    fn send(&self, action: StageAction) {
        #[cfg(target_arch = "wasm32")]
        {
            let handle = self.mounted.borrow().as_ref().map(|m| m.handle());
            if let Some(handle) = handle {
                handle.dispatch(move |c| c.handle(action));
                return;
            }
        }
        debug!(?action, "no slideshow mounted, dropping action");
    }
}

#[component]
pub fn SlideshowApp() -> Element {
    let input = use_hook(load_input);
    let public_view = input.public_view;
    let view = use_signal(StageView::default);
    let upload_feedback = use_signal(|| upload_feedback_text(0));
    let bridge = use_hook(StageBridge::default);

    #[cfg(target_arch = "wasm32")]
    {
        let bridge = bridge.clone();
        let input = input.clone();
        use_effect(move || {
            if bridge.mounted.borrow().is_some() {
                return;
            }
            let mounted = crate::web::mount_or_log(input.clone(), view, upload_feedback);
            *bridge.mounted.borrow_mut() = mounted;
        });
    }

    let on_action = use_callback(move |action: StageAction| bridge.send(action));

    let stage = view();
    let navbar_class = if stage.fullscreen.active || stage.chrome_autohidden {
        "navbar navbar-hidden"
    } else {
        "navbar"
    };

    rsx! {
        nav {
            class: "{navbar_class}",
            onmouseenter: move |_| on_action.call(StageAction::ControlsHover(true)),
            onmouseleave: move |_| on_action.call(StageAction::ControlsHover(false)),
            a { id: "return-link", class: "return-link", href: "/", "Back to gallery" }
            span { class: "navbar-title", "Slideshow" }
        }
        main { class: "slideshow-page",
            SlideshowPage { view, on_action }
            if !public_view {
                UploadPanel { feedback: upload_feedback }
            }
        }
    }
}
