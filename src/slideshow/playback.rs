//! Playback state machine.
//!
//! Three sources feed it: the auto-advance timer for static items, the
//! native play/pause/ended events of audio and video elements, and explicit
//! user commands. The machine owns the single playing intent; the
//! controller turns its answers into timers and element commands.

use std::time::Duration;

use super::presenter::Presented;
use crate::config::SlideshowConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The user asked for it.
    UserPaused,
    /// Reconciled from the platform: a pause outlived the grace window or a
    /// play request was rejected.
    AutoPaused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    Playing,
    Stopped(StopReason),
}

/// What to do about a media `pause` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseAssessment {
    /// Already stopped, or the pause belongs to a transition.
    Ignore,
    /// Playing intent is still set; wait out the grace window.
    StartGrace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndedAction {
    Advance,
    RefreshOnly,
}

#[derive(Debug, Clone)]
pub struct PlaybackMachine {
    status: PlaybackStatus,
    has_user_interacted_for_sound: bool,
}

impl Default for PlaybackMachine {
    /// A slideshow starts out playing.
    fn default() -> Self {
        Self {
            status: PlaybackStatus::Playing,
            has_user_interacted_for_sound: false,
        }
    }
}

impl PlaybackMachine {
    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    pub fn is_playing(&self) -> bool {
        self.status == PlaybackStatus::Playing
    }

    pub fn has_user_interacted_for_sound(&self) -> bool {
        self.has_user_interacted_for_sound
    }

    /// Monotonic. Returns true only the first time.
    pub fn mark_user_interacted(&mut self) -> bool {
        !std::mem::replace(&mut self.has_user_interacted_for_sound, true)
    }

    pub fn user_play(&mut self) {
        self.status = PlaybackStatus::Playing;
    }

    pub fn user_pause(&mut self) {
        self.status = PlaybackStatus::Stopped(StopReason::UserPaused);
    }

    /// Flip for static items, which have no element to report back.
    pub fn user_toggle(&mut self) -> bool {
        if self.is_playing() {
            self.user_pause();
        } else {
            self.user_play();
        }
        self.is_playing()
    }

    pub fn on_media_play(&mut self) {
        self.status = PlaybackStatus::Playing;
    }

    pub fn assess_pause(&self, transitioning: bool) -> PauseAssessment {
        if transitioning || !self.is_playing() {
            PauseAssessment::Ignore
        } else {
            PauseAssessment::StartGrace
        }
    }

    /// The grace window ran out with the element still paused.
    pub fn on_grace_expired(&mut self) {
        if self.is_playing() {
            self.status = PlaybackStatus::Stopped(StopReason::AutoPaused);
        }
    }

    pub fn on_play_rejected(&mut self) {
        if self.is_playing() {
            self.status = PlaybackStatus::Stopped(StopReason::AutoPaused);
        }
    }

    pub fn on_ended(&self) -> EndedAction {
        if self.is_playing() {
            EndedAction::Advance
        } else {
            EndedAction::RefreshOnly
        }
    }

    /// Display time for a static presentation, or `None` when the show is
    /// stopped or the presentation is driven by a media element.
    pub fn static_advance_delay(
        &self,
        presented: Presented,
        config: &SlideshowConfig,
    ) -> Option<Duration> {
        if !self.is_playing() {
            return None;
        }
        match presented {
            Presented::Image => Some(config.image_duration()),
            Presented::Invalid | Presented::Unsupported | Presented::Failed(_) => {
                Some(config.fallback_duration())
            }
            Presented::Video | Presented::Audio => None,
        }
    }
}
