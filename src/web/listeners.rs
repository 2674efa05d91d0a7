// Event subscriptions and the page-wide listeners that feed the controller.
use tracing::debug;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    window, AddEventListenerOptions, Element, Event, EventTarget, HtmlElement, KeyboardEvent,
    MouseEvent, TouchEvent,
};

use super::{fullscreen_target, ControllerHandle, CONTAINER_ID};
use crate::slideshow::{command_for_key, ClickTarget, KeyInput, Slot};

/// A DOM listener that is removed again when dropped.
pub struct EventSubscription {
    target: EventTarget,
    event: &'static str,
    capture: bool,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventSubscription {
    pub fn listen<F>(target: &EventTarget, event: &'static str, handler: F) -> Self
    where
        F: FnMut(Event) + 'static,
    {
        Self::listen_with(target, event, false, false, handler)
    }

    pub fn listen_with<F>(
        target: &EventTarget,
        event: &'static str,
        capture: bool,
        once: bool,
        handler: F,
    ) -> Self
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_capture(capture);
        options.set_once(once);
        let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        );
        Self {
            target: target.clone(),
            event,
            capture,
            callback,
        }
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback_and_bool(
            self.event,
            self.callback.as_ref().unchecked_ref(),
            self.capture,
        );
    }
}

fn is_form_field_target(event: &Event) -> bool {
    let Some(target) = event.target() else {
        return false;
    };

    let mut current = target.dyn_into::<Element>().ok();
    while let Some(element) = current {
        let tag = element.tag_name().to_ascii_lowercase();
        if tag == "input" || tag == "textarea" || tag == "select" {
            return true;
        }
        if element
            .get_attribute("contenteditable")
            .map(|v| v != "false")
            .unwrap_or(false)
        {
            return true;
        }
        current = element.parent_element();
    }
    false
}

fn click_target(event: &MouseEvent) -> ClickTarget {
    let Some(element) = event
        .target()
        .and_then(|target| target.dyn_into::<HtmlElement>().ok())
    else {
        return ClickTarget::Other;
    };

    let id = element.id();
    if id == Slot::Image.element_id() {
        ClickTarget::Image
    } else if id == Slot::Video.element_id() {
        ClickTarget::Video {
            offset_y: f64::from(event.offset_y()),
            height: f64::from(element.client_height()),
            native_controls: element.has_attribute("controls"),
        }
    } else if id == CONTAINER_ID || id == "media-display-area" {
        ClickTarget::Container
    } else {
        ClickTarget::Other
    }
}

fn touch_point(event: &Event) -> Option<(f64, f64)> {
    let touch = event
        .dyn_ref::<TouchEvent>()?
        .changed_touches()
        .get(0)?;
    Some((f64::from(touch.client_x()), f64::from(touch.client_y())))
}

/// Listeners that live as long as the mounted slideshow.
pub struct GlobalListeners {
    _subscriptions: Vec<EventSubscription>,
}

impl GlobalListeners {
    pub fn install(handle: &ControllerHandle) -> Self {
        let mut subscriptions = Vec::new();
        let Some(document) = window().and_then(|w| w.document()) else {
            return Self {
                _subscriptions: subscriptions,
            };
        };

        // Keyboard shortcuts.
        {
            let handle = handle.clone();
            subscriptions.push(EventSubscription::listen(&document, "keydown", move |event| {
                let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let key = key_event.key();
                let ctrl = key_event.ctrl_key();
                let alt = key_event.alt_key();
                let meta = key_event.meta_key();
                let in_form_field = is_form_field_target(&event);
                let input = KeyInput {
                    key: &key,
                    ctrl,
                    alt,
                    meta,
                    in_form_field,
                };
                if command_for_key(&input).is_some() {
                    event.prevent_default();
                    handle.dispatch(move |ctrl_ref| {
                        ctrl_ref.on_key(&KeyInput {
                            key: &key,
                            ctrl,
                            alt,
                            meta,
                            in_form_field,
                        });
                    });
                } else {
                    handle.dispatch(|c| c.pointer_activity());
                }
            }));
        }

        // First gesture anywhere grants sound.
        for event in ["click", "keydown", "touchstart"] {
            let handle = handle.clone();
            subscriptions.push(EventSubscription::listen_with(
                &document,
                event,
                true,
                true,
                move |_| handle.dispatch(|c| c.first_user_gesture()),
            ));
        }

        // A drag on the seek bar may end anywhere on the page.
        for event in ["mouseup", "touchend"] {
            let handle = handle.clone();
            subscriptions.push(EventSubscription::listen(&document, event, move |_| {
                handle.dispatch(|c| c.pointer_released());
            }));
        }

        for event in ["fullscreenchange", "webkitfullscreenchange"] {
            let handle = handle.clone();
            subscriptions.push(EventSubscription::listen(&document, event, move |_| {
                let target = fullscreen_target();
                handle.dispatch(move |c| c.on_fullscreen_change(target));
            }));
        }

        if let Some(container) = document.get_element_by_id(CONTAINER_ID) {
            {
                let handle = handle.clone();
                subscriptions.push(EventSubscription::listen(&container, "mousemove", move |_| {
                    handle.dispatch(|c| c.pointer_activity());
                }));
            }
            {
                let handle = handle.clone();
                subscriptions.push(EventSubscription::listen(&container, "click", move |event| {
                    let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                        return;
                    };
                    let target = click_target(mouse);
                    handle.dispatch(move |c| c.stage_click(target));
                }));
            }
            {
                let handle = handle.clone();
                subscriptions.push(EventSubscription::listen(&container, "touchstart", move |event| {
                    let in_form_field = is_form_field_target(&event);
                    if let Some((x, y)) = touch_point(&event) {
                        handle.dispatch(move |c| c.touch_start(x, y, in_form_field));
                    }
                }));
            }
            {
                let handle = handle.clone();
                subscriptions.push(EventSubscription::listen(&container, "touchend", move |event| {
                    if let Some((x, y)) = touch_point(&event) {
                        handle.dispatch(move |c| c.touch_end(x, y));
                    }
                }));
            }
        } else {
            debug!("slideshow container not rendered, stage listeners skipped");
        }

        Self {
            _subscriptions: subscriptions,
        }
    }
}
