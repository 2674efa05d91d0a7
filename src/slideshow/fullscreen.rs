//! Fullscreen state mirrored from the browser's fullscreen-change signal.

use super::host::FullscreenTarget;

/// Chrome adjustments that follow from the current fullscreen target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FullscreenChrome {
    /// Any fullscreen at all: navbar and return link are hidden.
    pub active: bool,
    /// The slideshow container itself is fullscreen.
    pub container: bool,
    /// A bare media element went fullscreen; the custom overlay is
    /// suppressed entirely instead of auto-hidden.
    pub controls_suppressed: bool,
}

impl FullscreenChrome {
    pub fn button_icon(self) -> &'static str {
        if self.active {
            "fullscreen-exit"
        } else {
            "fullscreen"
        }
    }

    pub fn button_title(self) -> &'static str {
        if self.active {
            "Exit Fullscreen (F or Esc)"
        } else {
            "Toggle Fullscreen (F)"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenRequest {
    Enter,
    Exit,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FullscreenState {
    target: FullscreenTarget,
}

impl FullscreenState {
    /// App-initiated fullscreen: the container, not a bare media element,
    /// is the fullscreen target.
    pub fn is_app_fullscreen(&self) -> bool {
        self.target == FullscreenTarget::Container
    }

    /// What the fullscreen button should ask the browser for.
    pub fn toggle_request(&self) -> FullscreenRequest {
        match self.target {
            FullscreenTarget::None => FullscreenRequest::Enter,
            _ => FullscreenRequest::Exit,
        }
    }

    pub fn on_change(&mut self, target: FullscreenTarget) -> FullscreenChrome {
        self.target = target;
        self.chrome()
    }

    pub fn chrome(&self) -> FullscreenChrome {
        FullscreenChrome {
            active: self.target != FullscreenTarget::None,
            container: self.target == FullscreenTarget::Container,
            controls_suppressed: self.target == FullscreenTarget::MediaElement,
        }
    }
}
