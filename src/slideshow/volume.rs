//! Volume and mute state shared by the video and audio slots.

/// Icon variant shown next to the volume slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VolumeIcon {
    #[default]
    Muted,
    Low,
    High,
}

impl VolumeIcon {
    pub fn icon_name(self) -> &'static str {
        match self {
            VolumeIcon::Muted => "volume-mute",
            VolumeIcon::Low => "volume-low",
            VolumeIcon::High => "volume-high",
        }
    }
}

/// Volume in `0.0..=1.0` plus the element mute flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioLevel {
    volume: f64,
    muted: bool,
}

impl Default for AudioLevel {
    /// Full volume, muted until the first user gesture allows sound.
    fn default() -> Self {
        Self {
            volume: 1.0,
            muted: true,
        }
    }
}

impl AudioLevel {
    pub fn new(volume: f64, muted: bool) -> Self {
        Self {
            volume: clamp_volume(volume),
            muted,
        }
    }

    pub fn volume(self) -> f64 {
        self.volume
    }

    pub fn muted(self) -> bool {
        self.muted
    }

    /// Zero mutes; anything positive unmutes. Returns true when the new
    /// level counts as a sound-enabling interaction.
    pub fn set_volume(&mut self, volume: f64) -> bool {
        self.volume = clamp_volume(volume);
        if self.volume > 0.0 {
            self.muted = false;
            true
        } else {
            self.muted = true;
            false
        }
    }

    pub fn unmute(&mut self) -> bool {
        std::mem::replace(&mut self.muted, false)
    }

    pub fn icon(self) -> VolumeIcon {
        if self.muted || self.volume == 0.0 {
            VolumeIcon::Muted
        } else if self.volume <= 0.5 {
            VolumeIcon::Low
        } else {
            VolumeIcon::High
        }
    }
}

fn clamp_volume(volume: f64) -> f64 {
    if volume.is_finite() {
        volume.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_volume_always_mutes() {
        let mut level = AudioLevel::new(0.7, false);
        level.set_volume(0.0);
        assert!(level.muted());
        assert_eq!(level.icon(), VolumeIcon::Muted);
    }

    #[test]
    fn positive_volume_unmutes_and_picks_icon_by_midpoint() {
        let mut level = AudioLevel::default();
        assert!(level.muted());

        assert!(level.set_volume(0.5));
        assert!(!level.muted());
        assert_eq!(level.icon(), VolumeIcon::Low);

        level.set_volume(0.51);
        assert_eq!(level.icon(), VolumeIcon::High);
    }

    #[test]
    fn out_of_range_volume_is_clamped() {
        let mut level = AudioLevel::default();
        level.set_volume(3.0);
        assert_eq!(level.volume(), 1.0);
        level.set_volume(f64::NAN);
        assert_eq!(level.volume(), 0.0);
        assert!(level.muted());
    }

    #[test]
    fn unmute_reports_previous_state() {
        let mut level = AudioLevel::default();
        assert!(level.unmute());
        assert!(!level.unmute());
    }
}
