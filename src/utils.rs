/// Utility helpers for the slideshow

/// Format a media position as `m:ss`.
/// Unknown, infinite and negative values render as `--:--`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "--:--".to_string();
    }
    let total = seconds.floor() as u64;
    let mins = total / 60;
    let secs = total % 60;
    format!("{}:{:02}", mins, secs)
}

/// Time label shown next to the seek bar.
pub fn time_label(position: f64, duration: f64) -> String {
    format!("{} / {}", format_time(position), format_time(duration))
}

/// Helper text for the upload form's file input.
pub fn upload_feedback_text(selected: u32) -> String {
    if selected > 0 {
        format!("{selected} file(s) selected.")
    } else {
        "Allowed file types: Images, Videos, Audio, PDF".to_string()
    }
}
