//! Auto-hide of the controls overlay in app-initiated fullscreen.

use std::time::Duration;

use crate::config::SlideshowConfig;

/// What is on stage, as far as the hide delay is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageActivity {
    /// Media running, or a static item with playing intent.
    Playing,
    PausedStatic,
    PausedMedia,
    /// Nothing presented yet (mid-transition or empty).
    Idle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HideDecision {
    Hide,
    /// Something still needs the controls; restart the timer.
    Retry,
    /// Not in app fullscreen; leave the controls alone.
    Stand,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AutoHide {
    hovering: bool,
}

impl AutoHide {
    /// Pointer entered or left the controls bar or the navbar.
    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    /// Delay before hiding, or `None` when no timer should run.
    pub fn delay(
        &self,
        app_fullscreen: bool,
        modal_open: bool,
        activity: StageActivity,
        config: &SlideshowConfig,
    ) -> Option<Duration> {
        if self.hovering || !app_fullscreen || modal_open {
            return None;
        }
        match activity {
            StageActivity::Playing | StageActivity::PausedMedia => {
                Some(config.controls_hide_delay())
            }
            StageActivity::PausedStatic => Some(config.paused_static_hide_delay()),
            StageActivity::Idle => None,
        }
    }

    /// Re-checked when the timer fires.
    pub fn decide(
        &self,
        app_fullscreen: bool,
        modal_open: bool,
        focus_within_controls: bool,
    ) -> HideDecision {
        if focus_within_controls || modal_open {
            HideDecision::Retry
        } else if app_fullscreen {
            HideDecision::Hide
        } else {
            HideDecision::Stand
        }
    }
}
