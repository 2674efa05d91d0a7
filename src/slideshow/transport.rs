//! Input mapping for the transport controls: keyboard shortcuts, swipe
//! gestures and the seek-bar drag.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportCommand {
    TogglePlay,
    Next,
    Previous,
    ToggleFullscreen,
}

/// The parts of a keydown the slideshow cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyInput<'a> {
    pub key: &'a str,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
    /// Focus is inside an input, textarea or select.
    pub in_form_field: bool,
}

impl<'a> KeyInput<'a> {
    pub fn plain(key: &'a str) -> Self {
        Self {
            key,
            ..Self::default()
        }
    }
}

pub fn command_for_key(input: &KeyInput<'_>) -> Option<TransportCommand> {
    if input.in_form_field || input.ctrl || input.alt || input.meta {
        return None;
    }

    match input.key.to_ascii_lowercase().as_str() {
        " " | "spacebar" => Some(TransportCommand::TogglePlay),
        "arrowright" => Some(TransportCommand::Next),
        "arrowleft" => Some(TransportCommand::Previous),
        "f" => Some(TransportCommand::ToggleFullscreen),
        _ => None,
    }
}

/// Horizontal swipe detection on the stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    start: Option<(f64, f64)>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f64, y: f64) {
        self.start = Some((x, y));
    }

    /// Forget any touch in progress; the next `end` yields nothing.
    pub fn cancel(&mut self) {
        self.start = None;
    }

    /// A swipe must travel past `threshold` and dominate vertical movement.
    /// Leftward goes to the next item, rightward to the previous one.
    pub fn end(&mut self, x: f64, y: f64, threshold: f64) -> Option<TransportCommand> {
        let (start_x, start_y) = self.start.take()?;
        let dx = x - start_x;
        let dy = y - start_y;
        if dx.abs() > dy.abs() && dx.abs() > threshold {
            Some(if dx < 0.0 {
                TransportCommand::Next
            } else {
                TransportCommand::Previous
            })
        } else {
            None
        }
    }
}

/// True between pointer-down on the seek bar and its release/change.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeekDrag {
    dragging: bool,
}

impl SeekDrag {
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn begin(&mut self) {
        self.dragging = true;
    }

    pub fn release(&mut self) -> bool {
        std::mem::replace(&mut self.dragging, false)
    }
}
