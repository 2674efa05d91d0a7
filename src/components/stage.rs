use crate::components::{ControlsBar, Icon};
use crate::slideshow::{SlotView, StageAction, StageView};
use dioxus::prelude::*;

fn slot_class(base: &str, slot: SlotView) -> String {
    let mut class = base.to_string();
    if !slot.visible {
        class.push_str(" slot-hidden");
    }
    if slot.active {
        class.push_str(" slot-active");
    }
    class
}

/// The stage: container, the three render slots and the controls overlay.
///
/// The video and audio elements never get a `src` from here. `DomHost`
/// attaches and detaches their sources imperatively so the render tree
/// cannot reload a retired element.
#[component]
pub fn SlideshowPage(view: Signal<StageView>, on_action: EventHandler<StageAction>) -> Element {
    let stage = view();
    let image_presentation = stage.image_presentation;

    let mut container_class = "slideshow-container".to_string();
    if stage.fullscreen.container {
        container_class.push_str(" is-truly-fullscreen");
    }
    if stage.controls_hidden {
        container_class.push_str(" cursor-hidden");
    }

    rsx! {
        div {
            id: "slideshow-container",
            class: "{container_class}",
            tabindex: "-1",

            if stage.empty {
                p { class: "slideshow-empty", "No media items to display." }
            } else {
                div { id: "media-display-area", class: "media-display-area",
                    if stage.loading {
                        div {
                            class: "slideshow-spinner",
                            role: "status",
                            aria_label: "Loading",
                            Icon { name: "loader".to_string(), class: "spinner-icon".to_string() }
                        }
                    }
                    img {
                        id: "slideshow-image",
                        class: slot_class("slide-media", stage.image),
                        src: stage.image_src(),
                        alt: "{stage.image_alt}",
                        onload: move |_| on_action.call(StageAction::ImageLoaded(image_presentation)),
                        onerror: move |_| on_action.call(StageAction::ImageFailed(image_presentation)),
                    }
                    video {
                        id: "slideshow-video",
                        class: slot_class("slide-media", stage.video),
                        controls: true,
                        playsinline: true,
                        preload: "metadata",
                    }
                    audio {
                        id: "slideshow-audio",
                        class: slot_class("slide-media slide-audio", stage.audio),
                        controls: true,
                        preload: "metadata",
                    }
                }
                if !stage.fullscreen.controls_suppressed {
                    ControlsBar { view: stage.clone(), on_action }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_class_tracks_visibility_and_activity() {
        assert_eq!(slot_class("slide-media", SlotView::default()), "slide-media slot-hidden");
        assert_eq!(
            slot_class(
                "slide-media",
                SlotView {
                    visible: true,
                    active: true
                }
            ),
            "slide-media slot-active"
        );
        assert_eq!(
            slot_class(
                "slide-media",
                SlotView {
                    visible: true,
                    active: false
                }
            ),
            "slide-media"
        );
    }
}
