//! Slideshow timing, thresholds and placeholder asset locations.
//!
//! All values have defaults; the page may override any subset through the
//! `config` object of the embedded slideshow data.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::slideshow::Placeholder;

fn default_image_duration_ms() -> u64 {
    15_000
}

fn default_transition_ms() -> u64 {
    300
}

fn default_controls_hide_delay_ms() -> u64 {
    3_000
}

fn default_paused_static_extension_ms() -> u64 {
    2_000
}

fn default_pause_grace_ms() -> u64 {
    400
}

fn default_swipe_threshold_px() -> f64 {
    30.0
}

fn default_native_controls_band_px() -> f64 {
    40.0
}

fn default_broken_image() -> String {
    "/static/images/broken_image.png".to_string()
}

fn default_video_placeholder() -> String {
    "/static/images/video_placeholder.png".to_string()
}

fn default_audio_placeholder() -> String {
    "/static/images/audio_placeholder.png".to_string()
}

fn default_file_placeholder() -> String {
    "/static/images/file_placeholder.png".to_string()
}

/// Fixed image shown for each failure path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceholderAssets {
    #[serde(default = "default_broken_image")]
    pub broken_image: String,
    #[serde(default = "default_video_placeholder")]
    pub video: String,
    #[serde(default = "default_audio_placeholder")]
    pub audio: String,
    #[serde(default = "default_file_placeholder")]
    pub file: String,
}

impl Default for PlaceholderAssets {
    fn default() -> Self {
        Self {
            broken_image: default_broken_image(),
            video: default_video_placeholder(),
            audio: default_audio_placeholder(),
            file: default_file_placeholder(),
        }
    }
}

impl PlaceholderAssets {
    pub fn path(&self, placeholder: Placeholder) -> &str {
        match placeholder {
            Placeholder::BrokenImage => &self.broken_image,
            Placeholder::Video => &self.video,
            Placeholder::Audio => &self.audio,
            Placeholder::File => &self.file,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideshowConfig {
    #[serde(default = "default_image_duration_ms")]
    pub image_duration_ms: u64,
    /// Unsupported, invalid and errored items; half the image duration
    /// unless set explicitly.
    #[serde(default)]
    pub fallback_duration_ms: Option<u64>,
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
    #[serde(default = "default_controls_hide_delay_ms")]
    pub controls_hide_delay_ms: u64,
    #[serde(default = "default_paused_static_extension_ms")]
    pub paused_static_extension_ms: u64,
    #[serde(default = "default_pause_grace_ms")]
    pub pause_grace_ms: u64,
    #[serde(default = "default_swipe_threshold_px")]
    pub swipe_threshold_px: f64,
    #[serde(default = "default_native_controls_band_px")]
    pub native_controls_band_px: f64,
    #[serde(default)]
    pub placeholders: PlaceholderAssets,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            image_duration_ms: default_image_duration_ms(),
            fallback_duration_ms: None,
            transition_ms: default_transition_ms(),
            controls_hide_delay_ms: default_controls_hide_delay_ms(),
            paused_static_extension_ms: default_paused_static_extension_ms(),
            pause_grace_ms: default_pause_grace_ms(),
            swipe_threshold_px: default_swipe_threshold_px(),
            native_controls_band_px: default_native_controls_band_px(),
            placeholders: PlaceholderAssets::default(),
        }
    }
}

impl SlideshowConfig {
    pub fn image_duration(&self) -> Duration {
        Duration::from_millis(self.image_duration_ms)
    }

    pub fn fallback_duration(&self) -> Duration {
        Duration::from_millis(
            self.fallback_duration_ms
                .unwrap_or(self.image_duration_ms / 2),
        )
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub fn controls_hide_delay(&self) -> Duration {
        Duration::from_millis(self.controls_hide_delay_ms)
    }

    pub fn paused_static_hide_delay(&self) -> Duration {
        Duration::from_millis(
            self.controls_hide_delay_ms
                .saturating_add(self.paused_static_extension_ms),
        )
    }

    pub fn pause_grace(&self) -> Duration {
        Duration::from_millis(self.pause_grace_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_half_the_image_duration_by_default() {
        let config = SlideshowConfig::default();
        assert_eq!(config.image_duration(), Duration::from_secs(15));
        assert_eq!(config.fallback_duration(), Duration::from_millis(7_500));
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config: SlideshowConfig =
            serde_json::from_str(r#"{"image_duration_ms": 4000, "pause_grace_ms": 250}"#)
                .unwrap();
        assert_eq!(config.image_duration(), Duration::from_secs(4));
        assert_eq!(config.fallback_duration(), Duration::from_secs(2));
        assert_eq!(config.pause_grace(), Duration::from_millis(250));
        assert_eq!(config.transition(), Duration::from_millis(300));
        assert_eq!(config.placeholders, PlaceholderAssets::default());
    }

    #[test]
    fn paused_static_delay_extends_base() {
        let config = SlideshowConfig::default();
        assert_eq!(config.paused_static_hide_delay(), Duration::from_secs(5));
    }

    #[test]
    fn huge_hide_delays_saturate() {
        let config: SlideshowConfig = serde_json::from_str(&format!(
            r#"{{"controls_hide_delay_ms": {}, "paused_static_extension_ms": 2000}}"#,
            u64::MAX
        ))
        .unwrap();
        assert_eq!(
            config.paused_static_hide_delay(),
            Duration::from_millis(u64::MAX)
        );
    }
}
