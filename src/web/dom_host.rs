use std::collections::HashMap;
use std::rc::Rc;

use dioxus::core::{Runtime, RuntimeGuard};
use dioxus::prelude::*;
use gloo_timers::callback::Timeout;
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlMediaElement;

use super::listeners::EventSubscription;
use super::{document, ControllerHandle, CONTAINER_ID};
use crate::slideshow::{
    AudioLevel, ChromeHost, MediaEvent, MediaSlot, MediaSurfaces, PresentationId, Scheduler,
    StageView, TimerKind, TimerRequest,
};

const MEDIA_EVENTS: [&str; 7] = [
    "loadedmetadata",
    "canplay",
    "timeupdate",
    "play",
    "pause",
    "ended",
    "error",
];

fn media_element(slot: MediaSlot) -> Option<HtmlMediaElement> {
    document()?
        .get_element_by_id(slot.slot().element_id())?
        .dyn_into::<HtmlMediaElement>()
        .ok()
}

fn read_media_event(name: &str, media: &HtmlMediaElement) -> Option<MediaEvent> {
    Some(match name {
        "loadedmetadata" => MediaEvent::LoadedMetadata {
            duration: media.duration(),
        },
        "canplay" => MediaEvent::CanPlay,
        "timeupdate" => MediaEvent::TimeUpdate {
            position: media.current_time(),
            duration: media.duration(),
        },
        "play" => MediaEvent::Play,
        "pause" => MediaEvent::Pause,
        "ended" => MediaEvent::Ended,
        "error" => MediaEvent::Error,
        _ => return None,
    })
}

fn rejection_reason(err: &JsValue) -> String {
    let name = js_sys::Reflect::get(err, &"name".into())
        .ok()
        .and_then(|value| value.as_string());
    let message = err
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string());
    match (name, message) {
        (Some(name), Some(message)) => format!("{name}: {message}"),
        (Some(name), None) => name,
        (None, Some(message)) => message,
        (None, None) => "play() was rejected".to_string(),
    }
}

/// Call a vendor-prefixed method by name, for browsers without the
/// unprefixed fullscreen API.
fn call_prefixed(target: &JsValue, method: &str) -> bool {
    js_sys::Reflect::get(target, &method.into())
        .ok()
        .and_then(|value| value.dyn_into::<js_sys::Function>().ok())
        .map(|function| function.call0(target).is_ok())
        .unwrap_or(false)
}

/// Browser implementation of the slideshow host traits.
pub struct DomHost {
    handle: ControllerHandle,
    runtime: Rc<Runtime>,
    view: Signal<StageView>,
    subscriptions: HashMap<MediaSlot, Vec<EventSubscription>>,
    timers: HashMap<TimerKind, Timeout>,
}

impl DomHost {
    pub fn new(handle: ControllerHandle, runtime: Rc<Runtime>, view: Signal<StageView>) -> Self {
        Self {
            handle,
            runtime,
            view,
            subscriptions: HashMap::new(),
            timers: HashMap::new(),
        }
    }
}

impl MediaSurfaces for DomHost {
    fn attach_media(&mut self, slot: MediaSlot, src: &str, presentation: PresentationId) {
        let Some(media) = media_element(slot) else {
            warn!(?slot, "media element missing, cannot attach source");
            return;
        };

        let subscriptions = MEDIA_EVENTS
            .into_iter()
            .map(|name| {
                let handle = self.handle.clone();
                let element = media.clone();
                EventSubscription::listen(&media, name, move |_| {
                    if let Some(event) = read_media_event(name, &element) {
                        handle.dispatch(move |c| c.on_media_event(presentation, slot, event));
                    }
                })
            })
            .collect();
        self.subscriptions.insert(slot, subscriptions);

        media.set_src(src);
        media.load();
        debug!(?slot, src, ?presentation, "attached media source");
    }

    fn detach_media(&mut self, slot: MediaSlot) {
        self.subscriptions.remove(&slot);
        if let Some(media) = media_element(slot) {
            let _ = media.pause();
            let _ = media.remove_attribute("src");
            media.load();
        }
    }

    fn pause_media(&mut self, slot: MediaSlot) {
        if let Some(media) = media_element(slot) {
            let _ = media.pause();
        }
    }

    fn request_play(&mut self, slot: MediaSlot, presentation: PresentationId) {
        let Some(media) = media_element(slot) else {
            return;
        };
        let handle = self.handle.clone();
        match media.play() {
            Ok(promise) => {
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                        let reason = rejection_reason(&err);
                        handle.dispatch(move |c| c.on_play_rejected(presentation, reason));
                    }
                });
            }
            Err(err) => {
                let reason = rejection_reason(&err);
                handle.dispatch(move |c| c.on_play_rejected(presentation, reason));
            }
        }
    }

    fn apply_audio(&mut self, slot: MediaSlot, level: AudioLevel) {
        if let Some(media) = media_element(slot) {
            media.set_volume(level.volume());
            media.set_muted(level.muted());
        }
    }

    fn seek_media(&mut self, slot: MediaSlot, position: f64) {
        if let Some(media) = media_element(slot) {
            media.set_current_time(position);
        }
    }
}

impl Scheduler for DomHost {
    fn schedule(&mut self, request: TimerRequest) {
        let handle = self.handle.clone();
        let token = request.token;
        let millis = u32::try_from(request.delay.as_millis()).unwrap_or(u32::MAX);
        // Dispatch from a fresh task so a callback that re-arms its own kind
        // never drops the timeout that is still running.
        let timeout = Timeout::new(millis, move || {
            wasm_bindgen_futures::spawn_local(async move {
                handle.dispatch(move |c| c.on_timer(token));
            });
        });
        self.timers.insert(token.kind, timeout);
    }

    fn cancel(&mut self, kind: TimerKind) {
        self.timers.remove(&kind);
    }
}

impl ChromeHost for DomHost {
    fn render(&mut self, view: &StageView) {
        let _guard = RuntimeGuard::new(self.runtime.clone());
        if *self.view.peek() != *view {
            self.view.set(view.clone());
        }
    }

    fn request_fullscreen(&mut self) {
        let Some(container) = document().and_then(|d| d.get_element_by_id(CONTAINER_ID)) else {
            warn!("slideshow container missing, cannot enter fullscreen");
            return;
        };
        if container.request_fullscreen().is_err()
            && !call_prefixed(&container, "webkitRequestFullscreen")
        {
            warn!("fullscreen request was refused");
        }
    }

    fn exit_fullscreen(&mut self) {
        let Some(document) = document() else {
            return;
        };
        if document.fullscreen_element().is_some() {
            document.exit_fullscreen();
        } else if !call_prefixed(&document, "webkitExitFullscreen") {
            debug!("nothing to exit, no fullscreen element");
        }
    }

    fn modal_open(&self) -> bool {
        document()
            .and_then(|d| d.query_selector(".modal.show").ok().flatten())
            .is_some()
    }

    fn focus_within_controls(&self) -> bool {
        document()
            .and_then(|d| d.active_element())
            .and_then(|el| el.closest(".controls-container, .navbar").ok().flatten())
            .is_some()
    }
}
