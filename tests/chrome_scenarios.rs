mod common;

use std::time::Duration;

use common::{audio, image, video, Harness, HostCall};
use gallery_slideshow::slideshow::{
    ClickTarget, DownloadLink, FullscreenTarget, KeyInput, PlaybackStatus, StageAction,
    StopReason, TimerKind,
};
use gallery_slideshow::SlideshowInput;

fn in_app_fullscreen(items: Vec<gallery_slideshow::MediaItem>) -> Harness {
    let mut h = Harness::started(items);
    h.ctrl.toggle_fullscreen();
    h.ctrl.on_fullscreen_change(FullscreenTarget::Container);
    h
}

#[test]
fn empty_list_renders_message_and_arms_nothing() {
    let mut h = Harness::new(Vec::new());
    h.ctrl.start();

    assert!(h.view().empty);
    assert!(!h.view().playing);
    assert_eq!(h.view().counter, "0/0");
    assert!(h.host().timers.is_empty());
    assert!(h.host().renders > 0);

    assert!(h.ctrl.on_key(&KeyInput::plain("ArrowRight")));
    h.ctrl.toggle_play();
    h.advance(60_000);
    assert!(h.host().presented.is_empty());
    assert!(h.host().calls.is_empty());
}

#[test]
fn counter_and_download_follow_the_current_item() {
    let mut h = Harness::started(vec![image("a.jpg"), image("b.jpg")]);
    assert_eq!(h.view().counter, "1/2");
    assert_eq!(
        h.view().download,
        Some(DownloadLink {
            href: "/media/a.jpg".to_string(),
            filename: "a.jpg".to_string(),
        })
    );

    h.ctrl.handle(StageAction::Next);
    h.advance(300);
    assert_eq!(h.view().counter, "2/2");
    assert_eq!(
        h.view().download.as_ref().map(|link| link.href.as_str()),
        Some("/media/b.jpg")
    );
}

#[test]
fn public_view_hides_download() {
    let mut h = Harness::with_input(SlideshowInput {
        items: vec![image("a.jpg")],
        public_view: true,
        ..SlideshowInput::default()
    });
    h.ctrl.start();
    h.advance(300);

    assert_eq!(h.view().download, None);
}

#[test]
fn keyboard_shortcuts_drive_transport() {
    let mut h = Harness::started(vec![image("a.jpg"), image("b.jpg")]);

    assert!(h.ctrl.on_key(&KeyInput::plain("ArrowRight")));
    h.advance(300);
    assert_eq!(h.ctrl.current_index(), Some(1));

    assert!(h.ctrl.on_key(&KeyInput::plain("ArrowLeft")));
    h.advance(300);
    assert_eq!(h.ctrl.current_index(), Some(0));

    assert!(h.ctrl.on_key(&KeyInput::plain(" ")));
    assert_eq!(h.ctrl.status(), PlaybackStatus::Stopped(StopReason::UserPaused));

    assert!(h.ctrl.on_key(&KeyInput::plain("f")));
    assert_eq!(h.host().calls.last(), Some(&HostCall::EnterFullscreen));
}

#[test]
fn typing_in_a_form_field_is_not_a_shortcut() {
    let mut h = Harness::started(vec![image("a.jpg"), image("b.jpg")]);
    let typing = KeyInput {
        in_form_field: true,
        ..KeyInput::plain("ArrowRight")
    };

    assert!(!h.ctrl.on_key(&typing));
    assert!(!h.ctrl.is_transitioning());
}

#[test]
fn horizontal_swipe_navigates() {
    let mut h = Harness::started(vec![image("a.jpg"), image("b.jpg"), image("c.jpg")]);

    h.ctrl.touch_start(300.0, 200.0, false);
    h.ctrl.touch_end(200.0, 210.0);
    h.advance(300);
    assert_eq!(h.ctrl.current_index(), Some(1));

    h.ctrl.touch_start(100.0, 200.0, false);
    h.ctrl.touch_end(180.0, 190.0);
    h.advance(300);
    assert_eq!(h.ctrl.current_index(), Some(0));

    h.ctrl.touch_start(100.0, 200.0, false);
    h.ctrl.touch_end(110.0, 320.0);
    assert!(!h.ctrl.is_transitioning());
}

#[test]
fn dragging_a_slider_is_not_a_swipe() {
    let mut h = Harness::started(vec![audio("a.mp3"), image("b.jpg")]);

    h.ctrl.touch_start(200.0, 500.0, true);
    h.ctrl.touch_end(120.0, 505.0);
    h.advance(300);

    assert!(!h.ctrl.is_transitioning());
    assert_eq!(h.ctrl.current_index(), Some(0));
    assert_eq!(h.host().presented.len(), 1);
}

#[test]
fn stage_click_toggles_except_on_native_controls() {
    let mut h = Harness::started(vec![video("a.mp4")]);

    h.ctrl.stage_click(ClickTarget::Video {
        offset_y: 290.0,
        height: 300.0,
        native_controls: true,
    });
    assert_eq!(h.ctrl.status(), PlaybackStatus::Playing);

    h.ctrl.stage_click(ClickTarget::Video {
        offset_y: 120.0,
        height: 300.0,
        native_controls: true,
    });
    assert_eq!(h.ctrl.status(), PlaybackStatus::Stopped(StopReason::UserPaused));

    h.ctrl.stage_click(ClickTarget::Other);
    assert_eq!(h.ctrl.status(), PlaybackStatus::Stopped(StopReason::UserPaused));

    h.ctrl.stage_click(ClickTarget::Container);
    assert_eq!(h.ctrl.status(), PlaybackStatus::Playing);
}

#[test]
fn fullscreen_button_follows_the_change_signal() {
    let mut h = Harness::started(vec![image("a.jpg")]);

    h.ctrl.toggle_fullscreen();
    assert_eq!(h.host().calls.last(), Some(&HostCall::EnterFullscreen));
    assert!(!h.ctrl.is_app_fullscreen());

    h.ctrl.on_fullscreen_change(FullscreenTarget::Container);
    assert!(h.ctrl.is_app_fullscreen());
    assert!(h.view().fullscreen.container);
    assert_eq!(h.view().fullscreen.button_title(), "Exit Fullscreen (F or Esc)");

    h.ctrl.toggle_fullscreen();
    assert_eq!(h.host().calls.last(), Some(&HostCall::ExitFullscreen));
    h.ctrl.on_fullscreen_change(FullscreenTarget::None);
    assert!(!h.view().fullscreen.active);
    assert_eq!(h.view().fullscreen.button_title(), "Toggle Fullscreen (F)");
    assert!(!h.ctrl.is_timer_armed(TimerKind::ControlsHide));
}

#[test]
fn controls_auto_hide_in_app_fullscreen() {
    let mut h = in_app_fullscreen(vec![image("a.jpg")]);
    let now = h.host().now;
    assert_eq!(
        h.host().timer_due(TimerKind::ControlsHide),
        Some(now + Duration::from_millis(3_000))
    );

    h.advance(3_000);
    assert!(h.view().controls_hidden);
    assert!(h.view().chrome_autohidden);

    h.ctrl.pointer_activity();
    assert!(!h.view().controls_hidden);
    assert!(h.ctrl.is_timer_armed(TimerKind::ControlsHide));
}

#[test]
fn paused_static_item_keeps_controls_longer() {
    let mut h = in_app_fullscreen(vec![image("a.jpg")]);
    h.ctrl.toggle_play();

    let now = h.host().now;
    assert_eq!(
        h.host().timer_due(TimerKind::ControlsHide),
        Some(now + Duration::from_millis(5_000))
    );
}

#[test]
fn hovering_the_controls_suspends_hiding() {
    let mut h = in_app_fullscreen(vec![image("a.jpg")]);

    h.ctrl.handle(StageAction::ControlsHover(true));
    assert!(!h.ctrl.is_timer_armed(TimerKind::ControlsHide));
    h.advance(10_000);
    assert!(!h.view().controls_hidden);

    h.ctrl.handle(StageAction::ControlsHover(false));
    assert!(h.ctrl.is_timer_armed(TimerKind::ControlsHide));
}

#[test]
fn focus_inside_controls_postpones_hiding() {
    let mut h = in_app_fullscreen(vec![image("a.jpg")]);
    h.ctrl.host_mut().focus_within_controls = true;

    h.advance(3_000);
    assert!(!h.view().controls_hidden);
    assert!(h.ctrl.is_timer_armed(TimerKind::ControlsHide));

    h.ctrl.host_mut().focus_within_controls = false;
    h.advance(3_000);
    assert!(h.view().controls_hidden);
}

#[test]
fn open_modal_blocks_the_hide_timer() {
    let mut h = Harness::started(vec![image("a.jpg")]);
    h.ctrl.host_mut().modal_open = true;
    h.ctrl.on_fullscreen_change(FullscreenTarget::Container);

    assert!(!h.ctrl.is_timer_armed(TimerKind::ControlsHide));
}

#[test]
fn native_media_fullscreen_suppresses_the_overlay() {
    let mut h = Harness::started(vec![video("a.mp4")]);
    h.ctrl.on_fullscreen_change(FullscreenTarget::MediaElement);

    assert!(h.view().fullscreen.active);
    assert!(h.view().fullscreen.controls_suppressed);
    assert!(!h.ctrl.is_app_fullscreen());
    assert!(!h.ctrl.is_timer_armed(TimerKind::ControlsHide));
}

#[test]
fn leaving_fullscreen_restores_hidden_chrome() {
    let mut h = in_app_fullscreen(vec![image("a.jpg")]);
    h.advance(3_000);
    assert!(h.view().controls_hidden);

    h.ctrl.on_fullscreen_change(FullscreenTarget::None);
    assert!(!h.view().controls_hidden);
    assert!(!h.view().chrome_autohidden);
}
