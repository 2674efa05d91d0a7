use crate::components::Icon;
use crate::slideshow::{StageAction, StageView};
use dioxus::prelude::*;

/// Transport widgets over the stage: prev/play/next, counter, seek bar,
/// volume, download and fullscreen.
#[component]
pub fn ControlsBar(view: StageView, on_action: EventHandler<StageAction>) -> Element {
    let container_class = if view.controls_hidden {
        "controls-container controls-hidden"
    } else {
        "controls-container"
    };
    let play_icon = if view.playing { "pause" } else { "play" };

    let on_volume_change = move |e: Event<FormData>| {
        if let Ok(val) = e.value().parse::<f64>() {
            on_action.call(StageAction::SetVolume((val / 100.0).clamp(0.0, 1.0)));
        }
    };

    let on_seek_input = move |e: Event<FormData>| {
        if let Ok(position) = e.value().parse::<f64>() {
            on_action.call(StageAction::SeekInput(position));
        }
    };

    let on_seek_commit = move |e: Event<FormData>| {
        if let Ok(position) = e.value().parse::<f64>() {
            on_action.call(StageAction::SeekCommit(position));
        }
    };

    rsx! {
        div {
            class: "{container_class}",
            onmouseenter: move |_| on_action.call(StageAction::ControlsHover(true)),
            onmouseleave: move |_| on_action.call(StageAction::ControlsHover(false)),
            onfocusin: move |_| on_action.call(StageAction::Activity),

            div { class: "transport-group",
                button {
                    id: "prev-btn",
                    r#type: "button",
                    class: "control-btn",
                    title: "Previous (Left Arrow)",
                    onclick: move |_| on_action.call(StageAction::Previous),
                    Icon { name: "prev".to_string(), class: "control-icon".to_string() }
                }
                button {
                    id: "play-pause-btn",
                    r#type: "button",
                    class: "control-btn control-btn-primary",
                    title: view.play_pause_title(),
                    onclick: move |_| on_action.call(StageAction::TogglePlay),
                    Icon { name: play_icon.to_string(), class: "control-icon".to_string() }
                }
                button {
                    id: "next-btn",
                    r#type: "button",
                    class: "control-btn",
                    title: "Next (Right Arrow)",
                    onclick: move |_| on_action.call(StageAction::Next),
                    Icon { name: "next".to_string(), class: "control-icon".to_string() }
                }
                span { id: "counter", class: "counter", "{view.counter}" }
            }

            if let Some(timeline) = view.timeline {
                div { class: "seek-group",
                    input {
                        id: "media-progress-bar",
                        r#type: "range",
                        min: "0",
                        max: "{timeline.max}",
                        step: "0.1",
                        value: "{timeline.position}",
                        class: "seek-bar",
                        onmousedown: move |_| on_action.call(StageAction::SeekStart),
                        ontouchstart: move |_| on_action.call(StageAction::SeekStart),
                        oninput: on_seek_input,
                        onchange: on_seek_commit,
                    }
                    span { id: "time-display", class: "time-display", "{view.time_label}" }
                }
            }

            div { class: "aux-group",
                div { class: "volume-group",
                    Icon {
                        name: view.volume_icon.icon_name().to_string(),
                        class: "control-icon".to_string(),
                    }
                    input {
                        id: "volume-control",
                        r#type: "range",
                        min: "0",
                        max: "100",
                        value: (view.volume * 100.0).round() as i32,
                        class: "volume-slider",
                        title: "Volume",
                        oninput: on_volume_change,
                    }
                }
                if let Some(link) = view.download.clone() {
                    a {
                        id: "download-link",
                        class: "control-btn",
                        href: "{link.href}",
                        download: "{link.filename}",
                        title: "Download {link.filename}",
                        Icon { name: "download".to_string(), class: "control-icon".to_string() }
                    }
                }
                button {
                    id: "fullscreen-btn",
                    r#type: "button",
                    class: "control-btn",
                    title: view.fullscreen.button_title(),
                    onclick: move |_| on_action.call(StageAction::ToggleFullscreen),
                    Icon {
                        name: view.fullscreen.button_icon().to_string(),
                        class: "control-icon".to_string(),
                    }
                }
            }
        }
    }
}
