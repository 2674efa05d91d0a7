//! Seams between the controller and whatever renders it.
//!
//! The controller never touches the DOM directly. It issues imperative
//! media commands through [`MediaSurfaces`], timers through [`Scheduler`],
//! and publishes its [`StageView`] through [`ChromeHost`]. The browser
//! binding lives in `crate::web`; tests use a recording host.

use super::presenter::Presented;
use super::timers::{TimerKind, TimerRequest};
use super::view::StageView;
use super::volume::AudioLevel;
use crate::models::MediaKind;

/// One of the three fixed render targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Image,
    Video,
    Audio,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::Image, Slot::Video, Slot::Audio];

    pub fn element_id(self) -> &'static str {
        match self {
            Slot::Image => "slideshow-image",
            Slot::Video => "slideshow-video",
            Slot::Audio => "slideshow-audio",
        }
    }
}

/// The two slots backed by a native media element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaSlot {
    Video,
    Audio,
}

impl MediaSlot {
    pub fn slot(self) -> Slot {
        match self {
            MediaSlot::Video => Slot::Video,
            MediaSlot::Audio => Slot::Audio,
        }
    }

    pub fn kind(self) -> MediaKind {
        match self {
            MediaSlot::Video => MediaKind::Video,
            MediaSlot::Audio => MediaKind::Audio,
        }
    }
}

/// Identity of one completed load. Listeners attached for a presentation
/// carry its id, and the controller drops events from any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PresentationId(pub u64);

/// Lifecycle notifications from an audio/video element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    LoadedMetadata { duration: f64 },
    CanPlay,
    TimeUpdate { position: f64, duration: f64 },
    Play,
    Pause,
    Ended,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageEvent {
    Loaded,
    Failed,
}

/// What currently owns the browser's fullscreen, as reported by the
/// fullscreen-change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FullscreenTarget {
    #[default]
    None,
    /// The slideshow's own container.
    Container,
    /// A bare media element (platform video controls).
    MediaElement,
}

pub trait MediaSurfaces {
    /// Set the element's source and subscribe its listeners, tagged with
    /// `presentation`.
    fn attach_media(&mut self, slot: MediaSlot, src: &str, presentation: PresentationId);

    /// Drop the source, force the element to reload its empty state and
    /// unsubscribe its listeners.
    fn detach_media(&mut self, slot: MediaSlot);

    fn pause_media(&mut self, slot: MediaSlot);

    /// Asynchronous; a rejection comes back through
    /// `SlideshowController::on_play_rejected`.
    fn request_play(&mut self, slot: MediaSlot, presentation: PresentationId);

    fn apply_audio(&mut self, slot: MediaSlot, level: AudioLevel);

    fn seek_media(&mut self, slot: MediaSlot, position: f64);
}

pub trait Scheduler {
    /// Run the timer once after its delay; the host hands the token back to
    /// `SlideshowController::on_timer`.
    fn schedule(&mut self, request: TimerRequest);

    /// Advisory. A cancelled timer that still fires is ignored by the
    /// controller.
    fn cancel(&mut self, kind: TimerKind);
}

pub trait ChromeHost {
    fn render(&mut self, view: &StageView);

    fn request_fullscreen(&mut self);

    fn exit_fullscreen(&mut self);

    /// A blocking dialog is showing.
    fn modal_open(&self) -> bool {
        false
    }

    /// Keyboard focus sits inside the controls bar or the navbar.
    fn focus_within_controls(&self) -> bool {
        false
    }

    /// A load sequence finished attaching item `index`.
    fn on_presented(&mut self, _index: usize, _presented: Presented) {}
}

pub trait SlideshowHost: MediaSurfaces + Scheduler + ChromeHost {}

impl<T: MediaSurfaces + Scheduler + ChromeHost> SlideshowHost for T {}
