//! Slideshow engine: playlist navigation, playback intent, media swap and
//! the overlay chrome, independent of any rendering backend.

mod auto_hide;
mod controller;
mod cursor;
mod fullscreen;
mod host;
mod playback;
mod presenter;
mod timers;
mod transport;
mod view;
mod volume;

pub use auto_hide::{AutoHide, HideDecision, StageActivity};
pub use controller::{ClickTarget, SlideshowController, StageAction};
pub use cursor::PlaylistCursor;
pub use fullscreen::{FullscreenChrome, FullscreenRequest, FullscreenState};
pub use host::{
    ChromeHost, FullscreenTarget, ImageEvent, MediaEvent, MediaSlot, MediaSurfaces,
    PresentationId, Scheduler, SlideshowHost, Slot,
};
pub use playback::{EndedAction, PauseAssessment, PlaybackMachine, PlaybackStatus, StopReason};
pub use presenter::{Placeholder, Presented, Presenter};
pub use timers::{TimerKind, TimerRequest, TimerSlots, TimerToken};
pub use transport::{command_for_key, KeyInput, SeekDrag, SwipeTracker, TransportCommand};
pub use view::{DownloadLink, SlotView, StageView, TimelineView};
pub use volume::{AudioLevel, VolumeIcon};
