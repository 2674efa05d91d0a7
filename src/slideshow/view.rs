//! Render model published by the controller after every operation.

use super::fullscreen::FullscreenChrome;
use super::host::{PresentationId, Slot};
use super::volume::VolumeIcon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlotView {
    pub visible: bool,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLink {
    pub href: String,
    pub filename: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineView {
    pub position: f64,
    pub max: f64,
}

impl Default for TimelineView {
    fn default() -> Self {
        Self {
            position: 0.0,
            max: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StageView {
    pub image: SlotView,
    pub video: SlotView,
    pub audio: SlotView,
    pub image_source: Option<String>,
    pub image_alt: String,
    /// Presentation the image slot's load/error events belong to.
    pub image_presentation: PresentationId,
    pub loading: bool,
    /// No items: show the empty message and hide the controls.
    pub empty: bool,
    pub counter: String,
    /// `None` hides the download affordance.
    pub download: Option<DownloadLink>,
    pub playing: bool,
    pub volume: f64,
    pub volume_icon: VolumeIcon,
    /// `None` hides the seek bar group.
    pub timeline: Option<TimelineView>,
    pub time_label: String,
    pub controls_hidden: bool,
    /// Navbar and return link hidden by auto-hide.
    pub chrome_autohidden: bool,
    pub fullscreen: FullscreenChrome,
}

impl StageView {
    /// Image URL tagged with the presentation, so the element reloads (and
    /// fires its load event) even when the same file follows itself.
    pub fn image_src(&self) -> Option<String> {
        self.image_source
            .as_ref()
            .map(|src| format!("{src}#p{}", self.image_presentation.0))
    }
}

impl Default for StageView {
    fn default() -> Self {
        Self {
            image: SlotView::default(),
            video: SlotView::default(),
            audio: SlotView::default(),
            image_source: None,
            image_alt: String::new(),
            image_presentation: PresentationId::default(),
            loading: false,
            empty: false,
            counter: String::new(),
            download: None,
            playing: false,
            volume: 1.0,
            volume_icon: VolumeIcon::Muted,
            timeline: None,
            time_label: String::new(),
            controls_hidden: false,
            chrome_autohidden: false,
            fullscreen: FullscreenChrome::default(),
        }
    }
}

impl StageView {
    pub fn slot(&self, slot: Slot) -> SlotView {
        match slot {
            Slot::Image => self.image,
            Slot::Video => self.video,
            Slot::Audio => self.audio,
        }
    }

    pub fn slot_mut(&mut self, slot: Slot) -> &mut SlotView {
        match slot {
            Slot::Image => &mut self.image,
            Slot::Video => &mut self.video,
            Slot::Audio => &mut self.audio,
        }
    }

    pub fn active_slots(&self) -> Vec<Slot> {
        Slot::ALL
            .into_iter()
            .filter(|slot| self.slot(*slot).active)
            .collect()
    }

    pub fn play_pause_title(&self) -> &'static str {
        if self.playing {
            "Pause (Spacebar)"
        } else {
            "Play (Spacebar)"
        }
    }
}
