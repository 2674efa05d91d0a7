use thiserror::Error;

use crate::models::MediaKind;

/// Failures the slideshow knows how to name.
///
/// Runtime media failures are recovered in place (placeholder plus, when
/// playing, an auto-advance); only startup parsing and DOM binding return
/// these to a caller.
#[derive(Debug, Error)]
pub enum SlideshowError {
    #[error("item {index} has no file path")]
    InvalidItem { index: usize },

    #[error("failed to load {kind} \"{filename}\"")]
    MediaLoad { kind: MediaKind, filename: String },

    #[error("playback request was rejected: {reason}")]
    AutoplayRejected { reason: String },

    #[error("unsupported media type \"{mimetype}\"")]
    UnsupportedKind { mimetype: String },

    #[error("invalid slideshow data: {0}")]
    Input(#[from] serde_json::Error),

    #[error("required element #{0} is missing from the page")]
    MissingElement(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        let err = SlideshowError::MediaLoad {
            kind: MediaKind::Video,
            filename: "clip.mp4".to_string(),
        };
        assert_eq!(err.to_string(), "failed to load video \"clip.mp4\"");
        assert_eq!(
            SlideshowError::MissingElement("slideshow-video").to_string(),
            "required element #slideshow-video is missing from the page"
        );
    }
}
