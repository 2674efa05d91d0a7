//! Slideshow controller.
//!
//! The single owner of slideshow state. Every input (user command, media
//! event, timer) enters through a method here, runs to completion on the
//! event-loop thread and ends by publishing the updated [`StageView`].
//!
//! A load is two-phase: `load` cancels the previous item's timers, retires
//! its element and arms the transition timer; `finish_load` runs when that
//! timer fires and attaches the new item. A newer load re-arms the
//! transition timer, so the older continuation is dropped as stale.

use tracing::{debug, info, warn};

use super::auto_hide::{AutoHide, HideDecision, StageActivity};
use super::cursor::PlaylistCursor;
use super::fullscreen::{FullscreenRequest, FullscreenState};
use super::host::{FullscreenTarget, ImageEvent, MediaEvent, MediaSlot, PresentationId, SlideshowHost};
use super::playback::{EndedAction, PauseAssessment, PlaybackMachine, PlaybackStatus};
use super::presenter::{Presented, Presenter};
use super::timers::{TimerKind, TimerRequest, TimerSlots, TimerToken};
use super::transport::{command_for_key, KeyInput, SeekDrag, SwipeTracker, TransportCommand};
use super::view::{DownloadLink, StageView};
use super::volume::AudioLevel;
use crate::config::SlideshowConfig;
use crate::error::SlideshowError;
use crate::models::{MediaItem, MediaKind, SlideshowInput};
use crate::utils::time_label;

/// Where a click on the stage landed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickTarget {
    Image,
    Container,
    Video {
        offset_y: f64,
        height: f64,
        native_controls: bool,
    },
    /// Buttons, sliders and anything else inside the stage.
    Other,
}

/// Input coming from the rendered controls bar and stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StageAction {
    TogglePlay,
    Next,
    Previous,
    ToggleFullscreen,
    SetVolume(f64),
    SeekStart,
    SeekInput(f64),
    SeekCommit(f64),
    ControlsHover(bool),
    Activity,
    ImageLoaded(PresentationId),
    ImageFailed(PresentationId),
}

pub struct SlideshowController<H: SlideshowHost> {
    host: H,
    config: SlideshowConfig,
    cursor: PlaylistCursor,
    public_view: bool,
    playback: PlaybackMachine,
    presenter: Presenter,
    audio: AudioLevel,
    seek: SeekDrag,
    swipe: SwipeTracker,
    fullscreen: FullscreenState,
    auto_hide: AutoHide,
    timers: TimerSlots,
    /// Index waiting for the transition timer.
    pending: Option<usize>,
    view: StageView,
}

impl<H: SlideshowHost> SlideshowController<H> {
    pub fn new(host: H, input: SlideshowInput) -> Self {
        let SlideshowInput {
            items,
            public_view,
            config,
        } = input;
        Self {
            host,
            config,
            cursor: PlaylistCursor::new(items),
            public_view,
            playback: PlaybackMachine::default(),
            presenter: Presenter::default(),
            audio: AudioLevel::default(),
            seek: SeekDrag::default(),
            swipe: SwipeTracker::default(),
            fullscreen: FullscreenState::default(),
            auto_hide: AutoHide::default(),
            timers: TimerSlots::default(),
            pending: None,
            view: StageView::default(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn view(&self) -> &StageView {
        &self.view
    }

    pub fn config(&self) -> &SlideshowConfig {
        &self.config
    }

    pub fn status(&self) -> PlaybackStatus {
        self.playback.status()
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    pub fn has_user_interacted_for_sound(&self) -> bool {
        self.playback.has_user_interacted_for_sound()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.cursor.index()
    }

    pub fn current_item(&self) -> Option<&MediaItem> {
        self.cursor.current()
    }

    pub fn presented(&self) -> Option<Presented> {
        self.presenter.presented()
    }

    pub fn audio_level(&self) -> AudioLevel {
        self.audio
    }

    pub fn is_dragging_seek_bar(&self) -> bool {
        self.seek.is_dragging()
    }

    pub fn is_app_fullscreen(&self) -> bool {
        self.fullscreen.is_app_fullscreen()
    }

    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_timer_armed(&self, kind: TimerKind) -> bool {
        self.timers.is_armed(kind)
    }

    /// Initial load of the first item, or the empty state.
    pub fn start(&mut self) {
        if self.cursor.is_empty() {
            self.show_empty();
            return;
        }
        info!(
            items = self.cursor.len(),
            public = self.public_view,
            "starting slideshow"
        );
        self.view.fullscreen = self.fullscreen.chrome();
        self.load(0);
    }

    pub fn handle(&mut self, action: StageAction) {
        match action {
            StageAction::TogglePlay => self.toggle_play(),
            StageAction::Next => self.next(),
            StageAction::Previous => self.prev(),
            StageAction::ToggleFullscreen => self.toggle_fullscreen(),
            StageAction::SetVolume(volume) => self.set_volume(volume),
            StageAction::SeekStart => self.begin_seek_drag(),
            StageAction::SeekInput(position) => self.seek_input(position),
            StageAction::SeekCommit(position) => self.commit_seek(position),
            StageAction::ControlsHover(hovering) => self.controls_hover(hovering),
            StageAction::Activity => self.pointer_activity(),
            StageAction::ImageLoaded(id) => self.on_image_event(id, ImageEvent::Loaded),
            StageAction::ImageFailed(id) => self.on_image_event(id, ImageEvent::Failed),
        }
    }

    pub fn next(&mut self) {
        self.cancel_item_timers();
        match self.cursor.next_index() {
            Some(index) => self.load(index),
            None => self.show_empty(),
        }
    }

    pub fn prev(&mut self) {
        self.cancel_item_timers();
        match self.cursor.prev_index() {
            Some(index) => self.load(index),
            None => self.show_empty(),
        }
    }

    pub fn jump_to(&mut self, requested: isize) {
        self.cancel_item_timers();
        match self.cursor.resolve(requested) {
            Some(index) => self.load(index),
            None => self.show_empty(),
        }
    }

    pub fn toggle_play(&mut self) {
        if self.cursor.is_empty() {
            return;
        }
        match self.presenter.seekable() {
            Some(slot) => {
                if self.playback.is_playing() {
                    self.playback.user_pause();
                    self.disarm(TimerKind::PauseGrace);
                    self.host.pause_media(slot);
                } else {
                    if self.audio.muted() && !self.playback.has_user_interacted_for_sound() {
                        self.playback.mark_user_interacted();
                        self.audio.unmute();
                        self.host.apply_audio(slot, self.audio);
                    }
                    self.playback.user_play();
                    self.host.request_play(slot, self.presenter.current_id());
                }
            }
            None => {
                let playing = self.playback.user_toggle();
                self.disarm(TimerKind::AutoAdvance);
                if playing && !self.is_transitioning() {
                    if let Some(presented) = self.presenter.presented() {
                        self.arm_static_advance(presented);
                    }
                }
            }
        }
        info!(status = ?self.playback.status(), "toggled playback");
        self.reset_controls_hide_timer();
        self.publish();
    }

    /// Slider input in `0.0..=1.0`.
    pub fn set_volume(&mut self, volume: f64) {
        if self.audio.set_volume(volume) {
            self.playback.mark_user_interacted();
        }
        if let Some(slot) = self.presenter.seekable() {
            self.host.apply_audio(slot, self.audio);
        }
        self.reset_controls_hide_timer();
        self.publish();
    }

    /// First click, keypress or touch anywhere on the page.
    pub fn first_user_gesture(&mut self) {
        if !self.playback.mark_user_interacted() {
            return;
        }
        info!("first user gesture, sound allowed");
        if self.audio.muted() && self.audio.volume() > 0.0 {
            self.audio.unmute();
            if let Some(slot) = self.presenter.seekable() {
                self.host.apply_audio(slot, self.audio);
                if self.playback.is_playing() && self.presenter.media_paused() {
                    debug!(?slot, "retrying playback with sound");
                    self.host.request_play(slot, self.presenter.current_id());
                }
            }
        }
        self.publish();
    }

    pub fn begin_seek_drag(&mut self) {
        if self.presenter.seekable().is_some() {
            self.seek.begin();
        }
        self.reset_controls_hide_timer();
        self.publish();
    }

    /// Live slider movement; updates the label without seeking.
    pub fn seek_input(&mut self, position: f64) {
        if self.seek.is_dragging()
            && self.presenter.seekable().is_some()
            && self.presenter.has_duration()
        {
            self.view.time_label = time_label(position, self.presenter.duration());
        }
        self.reset_controls_hide_timer();
        self.publish();
    }

    pub fn commit_seek(&mut self, position: f64) {
        self.seek.release();
        if let Some(slot) = self.presenter.seekable() {
            if self.presenter.has_duration() {
                let duration = self.presenter.duration();
                let position = position.clamp(0.0, duration);
                self.host.seek_media(slot, position);
                self.presenter.update_clock(Some(position), duration);
            }
            self.presenter.render_timeline(&mut self.view);
        }
        self.reset_controls_hide_timer();
        self.publish();
    }

    /// Pointer released anywhere; ends a drag that never produced a change.
    pub fn pointer_released(&mut self) {
        if self.seek.release() {
            self.presenter.render_timeline(&mut self.view);
            self.publish();
        }
    }

    pub fn toggle_fullscreen(&mut self) {
        match self.fullscreen.toggle_request() {
            FullscreenRequest::Enter => {
                debug!("requesting fullscreen on the slideshow container");
                self.host.request_fullscreen();
            }
            FullscreenRequest::Exit => {
                debug!("exiting fullscreen");
                self.host.exit_fullscreen();
            }
        }
    }

    pub fn on_fullscreen_change(&mut self, target: FullscreenTarget) {
        let chrome = self.fullscreen.on_change(target);
        info!(?target, "fullscreen changed");
        self.view.fullscreen = chrome;
        if !chrome.active {
            self.view.controls_hidden = false;
            self.view.chrome_autohidden = false;
        }
        self.reset_controls_hide_timer();
        self.publish();
    }

    /// Returns true when the key was handled and its default should be
    /// prevented.
    pub fn on_key(&mut self, input: &KeyInput<'_>) -> bool {
        let Some(command) = command_for_key(input) else {
            return false;
        };
        self.run_command(command);
        self.reset_controls_hide_timer();
        self.publish();
        true
    }

    /// Touches that start on a form field (the seek and volume sliders)
    /// never count as swipes.
    pub fn touch_start(&mut self, x: f64, y: f64, in_form_field: bool) {
        if in_form_field {
            self.swipe.cancel();
        } else {
            self.swipe.begin(x, y);
        }
    }

    pub fn touch_end(&mut self, x: f64, y: f64) {
        if let Some(command) = self.swipe.end(x, y, self.config.swipe_threshold_px) {
            self.run_command(command);
            self.reset_controls_hide_timer();
            self.publish();
        }
    }

    pub fn stage_click(&mut self, target: ClickTarget) {
        let toggles = match target {
            ClickTarget::Image | ClickTarget::Container => true,
            ClickTarget::Video {
                offset_y,
                height,
                native_controls,
            } => {
                let on_native_controls = self.presenter.seekable() == Some(MediaSlot::Video)
                    && native_controls
                    && offset_y > height - self.config.native_controls_band_px;
                !on_native_controls
            }
            ClickTarget::Other => false,
        };
        if toggles {
            self.toggle_play();
        }
        self.reset_controls_hide_timer();
        self.publish();
    }

    /// Pointer movement, focus on a control, or any other activity that
    /// should bring the controls back.
    pub fn pointer_activity(&mut self) {
        self.reset_controls_hide_timer();
        self.publish();
    }

    pub fn controls_hover(&mut self, hovering: bool) {
        self.auto_hide.set_hovering(hovering);
        if hovering {
            self.disarm(TimerKind::ControlsHide);
            self.show_controls();
        } else {
            self.reset_controls_hide_timer();
        }
        self.publish();
    }

    pub fn on_media_event(&mut self, presentation: PresentationId, slot: MediaSlot, event: MediaEvent) {
        if !self.presenter.accepts(presentation, slot)
            || matches!(self.presenter.presented(), Some(Presented::Failed(_)))
        {
            debug!(?slot, ?event, "dropping event from a retired element");
            return;
        }

        match event {
            MediaEvent::LoadedMetadata { duration } => {
                self.view.loading = false;
                self.presenter.update_clock(None, duration);
                if !self.seek.is_dragging() {
                    self.presenter.render_timeline(&mut self.view);
                }
            }
            MediaEvent::CanPlay => {
                self.view.loading = false;
            }
            MediaEvent::TimeUpdate { position, duration } => {
                if self.seek.is_dragging() {
                    return;
                }
                self.presenter.update_clock(Some(position), duration);
                self.presenter.render_timeline(&mut self.view);
            }
            MediaEvent::Play => {
                self.presenter.set_media_paused(false);
                self.playback.on_media_play();
                self.disarm(TimerKind::PauseGrace);
                self.reset_controls_hide_timer();
            }
            MediaEvent::Pause => {
                self.presenter.set_media_paused(true);
                if self.playback.assess_pause(self.presenter.is_transitioning())
                    == PauseAssessment::StartGrace
                {
                    debug!(?slot, "unexpected pause, starting grace window");
                    self.arm(TimerKind::PauseGrace, self.config.pause_grace());
                }
                self.reset_controls_hide_timer();
            }
            MediaEvent::Ended => {
                self.presenter.mark_ended();
                self.presenter.render_timeline(&mut self.view);
                if self.playback.on_ended() == EndedAction::Advance {
                    debug!(?slot, "media ended, advancing");
                    self.next();
                    return;
                }
            }
            MediaEvent::Error => {
                self.view.loading = false;
                let filename = self
                    .cursor
                    .current()
                    .map(|item| item.display_name().to_string())
                    .unwrap_or_default();
                let err = SlideshowError::MediaLoad {
                    kind: slot.kind(),
                    filename: filename.clone(),
                };
                warn!(error = %err, "showing placeholder");
                self.presenter
                    .fail_media(&mut self.view, slot, &filename, &self.config);
                self.disarm(TimerKind::PauseGrace);
                self.arm_static_advance(Presented::Failed(slot));
            }
        }
        self.publish();
    }

    pub fn on_image_event(&mut self, presentation: PresentationId, event: ImageEvent) {
        if !self.presenter.accepts_image(presentation) {
            debug!(?event, "dropping image event from a previous item");
            return;
        }
        self.view.loading = false;
        if event == ImageEvent::Failed {
            let filename = self
                .cursor
                .current()
                .map(|item| item.display_name().to_string())
                .unwrap_or_default();
            if self
                .presenter
                .fail_image(&mut self.view, &filename, &self.config)
            {
                let err = SlideshowError::MediaLoad {
                    kind: MediaKind::Image,
                    filename,
                };
                warn!(error = %err, "showing broken-image placeholder");
            }
        }
        self.publish();
    }

    /// A play request was refused by the platform, usually autoplay policy.
    pub fn on_play_rejected(&mut self, presentation: PresentationId, reason: impl Into<String>) {
        if presentation != self.presenter.current_id() {
            return;
        }
        let err = SlideshowError::AutoplayRejected {
            reason: reason.into(),
        };
        warn!(error = %err, "playback did not start");
        self.playback.on_play_rejected();
        self.disarm(TimerKind::PauseGrace);
        self.publish();
    }

    pub fn on_timer(&mut self, token: TimerToken) {
        if !self.timers.claim(token) {
            debug!(?token, "ignoring stale timer");
            return;
        }
        match token.kind {
            TimerKind::Transition => self.finish_load(),
            TimerKind::AutoAdvance => {
                debug!("display time elapsed, advancing");
                self.next();
            }
            TimerKind::PauseGrace => {
                if self.presenter.seekable().is_some() && self.presenter.media_paused() {
                    info!("media stayed paused past the grace window, stopping");
                    self.playback.on_grace_expired();
                }
                self.reset_controls_hide_timer();
                self.publish();
            }
            TimerKind::ControlsHide => self.hide_controls(),
        }
    }

    fn run_command(&mut self, command: TransportCommand) {
        if self.cursor.is_empty() {
            return;
        }
        match command {
            TransportCommand::TogglePlay => self.toggle_play(),
            TransportCommand::Next => self.next(),
            TransportCommand::Previous => self.prev(),
            TransportCommand::ToggleFullscreen => self.toggle_fullscreen(),
        }
    }

    fn load(&mut self, index: usize) {
        self.cancel_item_timers();
        self.cursor.set(index);
        debug!(index, "load requested");
        self.view.loading = true;
        self.presenter.begin_retire(&mut self.host, &mut self.view);
        self.seek.release();
        self.pending = Some(index);
        self.arm(TimerKind::Transition, self.config.transition());
        self.reset_controls_hide_timer();
        self.publish();
    }

    fn finish_load(&mut self) {
        let Some(index) = self.pending.take() else {
            return;
        };
        let Some(item) = self.cursor.get(index).cloned() else {
            return;
        };
        self.presenter.finish_retire(&mut self.host, &mut self.view);
        self.publish();

        self.view.counter = self.cursor.counter_label();
        self.view.download = if self.public_view || !item.is_valid() {
            None
        } else {
            Some(DownloadLink {
                href: item.filepath.clone(),
                filename: item.display_name().to_string(),
            })
        };

        let presented = self
            .presenter
            .present(&mut self.host, &mut self.view, &item, &self.config);
        match presented {
            Presented::Video | Presented::Audio => {
                if let Some(slot) = self.presenter.seekable() {
                    self.host.apply_audio(slot, self.audio);
                    if self.playback.is_playing() {
                        self.host.request_play(slot, self.presenter.current_id());
                    }
                }
            }
            Presented::Image => self.arm_static_advance(presented),
            Presented::Invalid => {
                let err = SlideshowError::InvalidItem { index };
                warn!(error = %err, "showing placeholder");
                self.view.loading = false;
                self.arm_static_advance(presented);
            }
            Presented::Unsupported => {
                let err = SlideshowError::UnsupportedKind {
                    mimetype: item.normalized_mimetype(),
                };
                warn!(error = %err, "showing placeholder");
                self.view.loading = false;
                self.arm_static_advance(presented);
            }
            Presented::Failed(_) => {}
        }

        info!(
            index,
            total = self.cursor.len(),
            kind = %presented.kind(),
            "presented item"
        );
        self.host.on_presented(index, presented);
        self.reset_controls_hide_timer();
        self.publish();
    }

    fn show_empty(&mut self) {
        for kind in TimerKind::ALL {
            self.disarm(kind);
        }
        self.pending = None;
        info!("no media items to display");
        self.view = StageView {
            empty: true,
            counter: self.cursor.counter_label(),
            fullscreen: self.fullscreen.chrome(),
            ..StageView::default()
        };
        self.publish();
    }

    fn arm_static_advance(&mut self, presented: Presented) {
        if let Some(delay) = self.playback.static_advance_delay(presented, &self.config) {
            debug!(?presented, delay_ms = delay.as_millis() as u64, "arming auto-advance");
            self.arm(TimerKind::AutoAdvance, delay);
        }
    }

    fn cancel_item_timers(&mut self) {
        self.disarm(TimerKind::PauseGrace);
        self.disarm(TimerKind::AutoAdvance);
    }

    fn arm(&mut self, kind: TimerKind, delay: std::time::Duration) {
        let token = self.timers.arm(kind);
        self.host.schedule(TimerRequest { token, delay });
    }

    fn disarm(&mut self, kind: TimerKind) {
        if self.timers.cancel(kind) {
            self.host.cancel(kind);
        }
    }

    fn stage_activity(&self) -> StageActivity {
        match self.presenter.presented() {
            None => StageActivity::Idle,
            Some(presented) if presented.is_static() => {
                if self.playback.is_playing() {
                    StageActivity::Playing
                } else {
                    StageActivity::PausedStatic
                }
            }
            Some(_) => {
                if self.presenter.media_paused() {
                    StageActivity::PausedMedia
                } else {
                    StageActivity::Playing
                }
            }
        }
    }

    fn show_controls(&mut self) {
        self.view.controls_hidden = false;
        self.view.chrome_autohidden = false;
    }

    fn reset_controls_hide_timer(&mut self) {
        self.disarm(TimerKind::ControlsHide);
        self.show_controls();
        if let Some(delay) = self.auto_hide.delay(
            self.fullscreen.is_app_fullscreen(),
            self.host.modal_open(),
            self.stage_activity(),
            &self.config,
        ) {
            self.arm(TimerKind::ControlsHide, delay);
        }
    }

    fn hide_controls(&mut self) {
        match self.auto_hide.decide(
            self.fullscreen.is_app_fullscreen(),
            self.host.modal_open(),
            self.host.focus_within_controls(),
        ) {
            HideDecision::Retry => self.reset_controls_hide_timer(),
            HideDecision::Hide => {
                debug!("auto-hiding controls");
                self.view.controls_hidden = true;
                self.view.chrome_autohidden = true;
            }
            HideDecision::Stand => {}
        }
        self.publish();
    }

    fn publish(&mut self) {
        self.view.playing = self.playback.is_playing() && !self.view.empty;
        self.view.volume = self.audio.volume();
        self.view.volume_icon = self.audio.icon();
        self.host.render(&self.view);
    }
}
