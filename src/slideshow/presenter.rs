//! Media presenter: owns the three render slots and the swap between them.
//!
//! A swap is split in two halves around the transition delay.
//! `begin_retire` deactivates every slot and pauses the outgoing media
//! element; `finish_retire` hides the slots, detaches the outgoing source
//! and clears the image. `present` then attaches the next item and leaves
//! exactly one slot visible and active.

use tracing::debug;

use super::host::{MediaSlot, MediaSurfaces, PresentationId, Slot};
use super::view::{StageView, TimelineView};
use crate::config::SlideshowConfig;
use crate::models::{MediaItem, MediaKind};
use crate::utils::time_label;

/// What ended up on stage for the current item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presented {
    Image,
    Video,
    Audio,
    Unsupported,
    /// Item without a path; broken-image placeholder.
    Invalid,
    /// Media element failed after its source was attached.
    Failed(MediaSlot),
}

impl Presented {
    /// Static presentations have no element to report playback events.
    pub fn is_static(self) -> bool {
        !matches!(self, Presented::Video | Presented::Audio)
    }

    pub fn kind(self) -> MediaKind {
        match self {
            Presented::Image => MediaKind::Image,
            Presented::Video => MediaKind::Video,
            Presented::Audio => MediaKind::Audio,
            Presented::Unsupported | Presented::Invalid => MediaKind::Unsupported,
            Presented::Failed(slot) => slot.kind(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    BrokenImage,
    Video,
    Audio,
    File,
}

impl Placeholder {
    pub fn for_failed(slot: MediaSlot) -> Self {
        match slot {
            MediaSlot::Video => Placeholder::Video,
            MediaSlot::Audio => Placeholder::Audio,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct MediaClock {
    position: f64,
    duration: f64,
}

impl Default for MediaClock {
    fn default() -> Self {
        Self {
            position: 0.0,
            duration: f64::NAN,
        }
    }
}

impl MediaClock {
    fn has_duration(&self) -> bool {
        self.duration.is_finite() && self.duration > 0.0
    }
}

#[derive(Debug, Default)]
pub struct Presenter {
    last_id: u64,
    current: PresentationId,
    presented: Option<Presented>,
    /// Element currently holding a source and listeners.
    attached: Option<MediaSlot>,
    /// Element the transport controls act on.
    seekable: Option<MediaSlot>,
    media_paused: bool,
    transitioning: bool,
    clock: MediaClock,
}

impl Presenter {
    pub fn current_id(&self) -> PresentationId {
        self.current
    }

    pub fn presented(&self) -> Option<Presented> {
        self.presented
    }

    pub fn seekable(&self) -> Option<MediaSlot> {
        self.seekable
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn media_paused(&self) -> bool {
        self.media_paused
    }

    pub fn set_media_paused(&mut self, paused: bool) {
        self.media_paused = paused;
    }

    pub fn has_duration(&self) -> bool {
        self.clock.has_duration()
    }

    pub fn duration(&self) -> f64 {
        self.clock.duration
    }

    /// Events from a previous item, or from an element already retired,
    /// are dropped.
    pub fn accepts(&self, presentation: PresentationId, slot: MediaSlot) -> bool {
        !self.transitioning && presentation == self.current && self.attached == Some(slot)
    }

    pub fn accepts_image(&self, presentation: PresentationId) -> bool {
        !self.transitioning && presentation == self.current
    }

    pub fn begin_retire<H: MediaSurfaces>(&mut self, host: &mut H, view: &mut StageView) {
        for slot in Slot::ALL {
            view.slot_mut(slot).active = false;
        }
        if !self.transitioning {
            if let Some(slot) = self.seekable {
                debug!(?slot, "pausing outgoing media element");
                host.pause_media(slot);
            }
        }
        self.transitioning = true;
        self.seekable = None;
    }

    pub fn finish_retire<H: MediaSurfaces>(&mut self, host: &mut H, view: &mut StageView) {
        for slot in Slot::ALL {
            view.slot_mut(slot).visible = false;
        }
        if let Some(slot) = self.attached.take() {
            debug!(?slot, "detaching outgoing media source");
            host.detach_media(slot);
        }
        view.image_source = None;
        view.image_alt.clear();
        view.timeline = None;
        view.time_label.clear();
        self.presented = None;
        self.media_paused = true;
        self.clock = MediaClock::default();
    }

    pub fn present<H: MediaSurfaces>(
        &mut self,
        host: &mut H,
        view: &mut StageView,
        item: &MediaItem,
        config: &SlideshowConfig,
    ) -> Presented {
        self.last_id += 1;
        self.current = PresentationId(self.last_id);
        self.transitioning = false;

        let presented = if !item.is_valid() {
            self.show_image(
                view,
                config.placeholders.path(Placeholder::BrokenImage),
                "Error: Invalid data".to_string(),
            );
            Presented::Invalid
        } else {
            match item.kind() {
                MediaKind::Image => {
                    self.show_image(view, &item.filepath, item.display_name().to_string());
                    Presented::Image
                }
                MediaKind::Video => {
                    self.show_media(host, view, MediaSlot::Video, &item.filepath);
                    Presented::Video
                }
                MediaKind::Audio => {
                    self.show_media(host, view, MediaSlot::Audio, &item.filepath);
                    Presented::Audio
                }
                MediaKind::Unsupported => {
                    let alt = format!(
                        "Unsupported: {} ({})",
                        item.display_name(),
                        item.normalized_mimetype()
                    );
                    self.show_image(view, config.placeholders.path(Placeholder::File), alt);
                    Presented::Unsupported
                }
            }
        };
        self.presented = Some(presented);
        presented
    }

    /// Swap a failed media element for its placeholder image. The element
    /// keeps its source until the next retire.
    pub fn fail_media(
        &mut self,
        view: &mut StageView,
        slot: MediaSlot,
        filename: &str,
        config: &SlideshowConfig,
    ) {
        *view.slot_mut(slot.slot()) = Default::default();
        self.show_image(
            view,
            config.placeholders.path(Placeholder::for_failed(slot)),
            format!("Error playing: {filename}"),
        );
        self.seekable = None;
        view.timeline = None;
        self.presented = Some(Presented::Failed(slot));
    }

    /// Image source failed; swap in the broken-image placeholder once.
    /// Returns false when the placeholder itself failed.
    pub fn fail_image(&mut self, view: &mut StageView, filename: &str, config: &SlideshowConfig) -> bool {
        let broken = config.placeholders.path(Placeholder::BrokenImage);
        if view.image_source.as_deref() == Some(broken) {
            return false;
        }
        view.image_source = Some(broken.to_string());
        view.image_alt = format!("Error loading: {filename}");
        true
    }

    pub fn update_clock(&mut self, position: Option<f64>, duration: f64) {
        if let Some(position) = position {
            self.clock.position = position;
        }
        self.clock.duration = duration;
    }

    pub fn mark_ended(&mut self) {
        self.media_paused = true;
        if self.clock.has_duration() {
            self.clock.position = self.clock.duration;
        }
    }

    /// Refresh the seek bar and time label from the media clock.
    pub fn render_timeline(&self, view: &mut StageView) {
        if self.seekable.is_none() {
            return;
        }
        view.timeline = Some(if self.clock.has_duration() {
            TimelineView {
                position: if self.clock.position.is_finite() {
                    self.clock.position
                } else {
                    0.0
                },
                max: self.clock.duration,
            }
        } else {
            TimelineView::default()
        });
        view.time_label = time_label(self.clock.position, self.clock.duration);
    }

    fn show_image(&mut self, view: &mut StageView, src: &str, alt: String) {
        view.image_source = Some(src.to_string());
        view.image_alt = alt;
        view.image_presentation = self.current;
        *view.slot_mut(Slot::Image) = super::view::SlotView {
            visible: true,
            active: true,
        };
    }

    fn show_media<H: MediaSurfaces>(
        &mut self,
        host: &mut H,
        view: &mut StageView,
        slot: MediaSlot,
        src: &str,
    ) {
        host.attach_media(slot, src, self.current);
        *view.slot_mut(slot.slot()) = super::view::SlotView {
            visible: true,
            active: true,
        };
        self.attached = Some(slot);
        self.seekable = Some(slot);
        self.media_paused = true;
        view.timeline = Some(TimelineView::default());
        view.time_label = "0:00 / 0:00".to_string();
    }
}
