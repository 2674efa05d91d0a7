#![allow(dead_code)]

use std::time::Duration;

use gallery_slideshow::slideshow::{
    AudioLevel, ChromeHost, MediaEvent, MediaSlot, MediaSurfaces, PresentationId, Presented,
    Scheduler, SlideshowController, StageView, TimerKind, TimerRequest, TimerToken,
};
use gallery_slideshow::{MediaItem, SlideshowInput};

#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Attach(MediaSlot, String),
    Detach(MediaSlot),
    Pause(MediaSlot),
    Play(MediaSlot),
    Audio(MediaSlot, AudioLevel),
    Seek(MediaSlot, f64),
    EnterFullscreen,
    ExitFullscreen,
}

/// Host that records every command and runs timers on a virtual clock.
#[derive(Default)]
pub struct RecordingHost {
    pub calls: Vec<HostCall>,
    pub timers: Vec<(Duration, TimerToken)>,
    pub now: Duration,
    pub renders: usize,
    /// Image `src` of every rendered view, in order.
    pub image_srcs: Vec<Option<String>>,
    pub presented: Vec<(usize, Presented)>,
    pub attached: Vec<(MediaSlot, PresentationId)>,
    pub modal_open: bool,
    pub focus_within_controls: bool,
}

impl RecordingHost {
    pub fn last_presentation(&self, slot: MediaSlot) -> Option<PresentationId> {
        self.attached
            .iter()
            .rev()
            .find(|(s, _)| *s == slot)
            .map(|(_, id)| *id)
    }

    pub fn timer_due(&self, kind: TimerKind) -> Option<Duration> {
        self.timers
            .iter()
            .find(|(_, token)| token.kind == kind)
            .map(|(due, _)| *due)
    }
}

impl MediaSurfaces for RecordingHost {
    fn attach_media(&mut self, slot: MediaSlot, src: &str, presentation: PresentationId) {
        self.attached.push((slot, presentation));
        self.calls.push(HostCall::Attach(slot, src.to_string()));
    }

    fn detach_media(&mut self, slot: MediaSlot) {
        self.calls.push(HostCall::Detach(slot));
    }

    fn pause_media(&mut self, slot: MediaSlot) {
        self.calls.push(HostCall::Pause(slot));
    }

    fn request_play(&mut self, slot: MediaSlot, _presentation: PresentationId) {
        self.calls.push(HostCall::Play(slot));
    }

    fn apply_audio(&mut self, slot: MediaSlot, level: AudioLevel) {
        self.calls.push(HostCall::Audio(slot, level));
    }

    fn seek_media(&mut self, slot: MediaSlot, position: f64) {
        self.calls.push(HostCall::Seek(slot, position));
    }
}

impl Scheduler for RecordingHost {
    fn schedule(&mut self, request: TimerRequest) {
        self.timers.retain(|(_, token)| token.kind != request.token.kind);
        self.timers.push((self.now + request.delay, request.token));
    }

    fn cancel(&mut self, kind: TimerKind) {
        self.timers.retain(|(_, token)| token.kind != kind);
    }
}

impl ChromeHost for RecordingHost {
    fn render(&mut self, view: &StageView) {
        self.renders += 1;
        self.image_srcs.push(view.image_src());
    }

    fn request_fullscreen(&mut self) {
        self.calls.push(HostCall::EnterFullscreen);
    }

    fn exit_fullscreen(&mut self) {
        self.calls.push(HostCall::ExitFullscreen);
    }

    fn modal_open(&self) -> bool {
        self.modal_open
    }

    fn focus_within_controls(&self) -> bool {
        self.focus_within_controls
    }

    fn on_presented(&mut self, index: usize, presented: Presented) {
        self.presented.push((index, presented));
    }
}

pub struct Harness {
    pub ctrl: SlideshowController<RecordingHost>,
}

impl Harness {
    pub fn new(items: Vec<MediaItem>) -> Self {
        Self::with_input(SlideshowInput {
            items,
            ..SlideshowInput::default()
        })
    }

    pub fn with_input(input: SlideshowInput) -> Self {
        Self {
            ctrl: SlideshowController::new(RecordingHost::default(), input),
        }
    }

    /// Start and let the first transition finish.
    pub fn started(items: Vec<MediaItem>) -> Self {
        let mut harness = Self::new(items);
        harness.ctrl.start();
        harness.advance(300);
        harness
    }

    pub fn host(&self) -> &RecordingHost {
        self.ctrl.host()
    }

    pub fn view(&self) -> &StageView {
        self.ctrl.view()
    }

    pub fn take_calls(&mut self) -> Vec<HostCall> {
        std::mem::take(&mut self.ctrl.host_mut().calls)
    }

    /// Move the virtual clock forward, firing due timers in order.
    pub fn advance(&mut self, millis: u64) {
        let target = self.ctrl.host().now + Duration::from_millis(millis);
        loop {
            let next = self
                .ctrl
                .host()
                .timers
                .iter()
                .enumerate()
                .filter(|(_, (due, _))| *due <= target)
                .min_by_key(|(_, (due, _))| *due)
                .map(|(index, _)| index);
            let Some(index) = next else {
                break;
            };
            let (due, token) = self.ctrl.host_mut().timers.remove(index);
            self.ctrl.host_mut().now = due;
            self.ctrl.on_timer(token);
        }
        self.ctrl.host_mut().now = target;
    }

    /// Deliver an event from the element currently attached to `slot`.
    pub fn media_event(&mut self, slot: MediaSlot, event: MediaEvent) {
        let id = self
            .host()
            .last_presentation(slot)
            .expect("nothing attached to slot");
        self.ctrl.on_media_event(id, slot, event);
    }
}

pub fn image(name: &str) -> MediaItem {
    MediaItem::new(format!("/media/{name}"), "image/jpeg", name)
}

pub fn video(name: &str) -> MediaItem {
    MediaItem::new(format!("/media/{name}"), "video/mp4", name)
}

pub fn audio(name: &str) -> MediaItem {
    MediaItem::new(format!("/media/{name}"), "audio/mpeg", name)
}
