use serde::{Deserialize, Serialize};

use crate::config::SlideshowConfig;
use crate::error::SlideshowError;

const FALLBACK_MIMETYPE: &str = "application/octet-stream";
const FALLBACK_FILENAME: &str = "Unknown File";

/// One entry of the gallery listing, as resolved by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MediaItem {
    #[serde(default)]
    pub filepath: String,
    #[serde(default)]
    pub mimetype: String,
    #[serde(default, alias = "originalFilename")]
    pub original_filename: String,
}

/// What a mimetype resolves to for presentation purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Video,
    Audio,
    Unsupported,
}

impl MediaKind {
    /// Case-insensitive prefix match on the mimetype; anything unknown or
    /// missing is `Unsupported`.
    pub fn from_mimetype(mimetype: &str) -> Self {
        let mime = mimetype.trim().to_ascii_lowercase();
        if mime.starts_with("image/") {
            MediaKind::Image
        } else if mime.starts_with("video/") {
            MediaKind::Video
        } else if mime.starts_with("audio/") {
            MediaKind::Audio
        } else {
            MediaKind::Unsupported
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
            MediaKind::Unsupported => "unsupported",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl MediaItem {
    pub fn new(
        filepath: impl Into<String>,
        mimetype: impl Into<String>,
        original_filename: impl Into<String>,
    ) -> Self {
        Self {
            filepath: filepath.into(),
            mimetype: mimetype.into(),
            original_filename: original_filename.into(),
        }
    }

    /// An item without a path cannot be rendered at all.
    pub fn is_valid(&self) -> bool {
        !self.filepath.trim().is_empty()
    }

    pub fn kind(&self) -> MediaKind {
        MediaKind::from_mimetype(&self.mimetype)
    }

    pub fn normalized_mimetype(&self) -> String {
        let mime = self.mimetype.trim();
        if mime.is_empty() {
            FALLBACK_MIMETYPE.to_string()
        } else {
            mime.to_ascii_lowercase()
        }
    }

    pub fn display_name(&self) -> &str {
        let name = self.original_filename.trim();
        if name.is_empty() {
            FALLBACK_FILENAME
        } else {
            name
        }
    }
}

/// Everything the page hands to the slideshow at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SlideshowInput {
    #[serde(default)]
    pub items: Vec<MediaItem>,
    /// Read-only viewing mode; suppresses the download affordance.
    #[serde(default, alias = "isPublicSlideshowView")]
    pub public_view: bool,
    #[serde(default)]
    pub config: SlideshowConfig,
}

impl SlideshowInput {
    pub fn from_json(raw: &str) -> Result<Self, SlideshowError> {
        let input: SlideshowInput = serde_json::from_str(raw)?;
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mimetype_resolution_is_case_insensitive() {
        assert_eq!(MediaKind::from_mimetype("IMAGE/JPEG"), MediaKind::Image);
        assert_eq!(MediaKind::from_mimetype("Video/mp4"), MediaKind::Video);
        assert_eq!(MediaKind::from_mimetype("audio/MPEG"), MediaKind::Audio);
    }

    #[test]
    fn unknown_or_missing_mimetype_is_unsupported() {
        assert_eq!(MediaKind::from_mimetype(""), MediaKind::Unsupported);
        assert_eq!(
            MediaKind::from_mimetype("application/pdf"),
            MediaKind::Unsupported
        );
        assert_eq!(MediaItem::default().normalized_mimetype(), FALLBACK_MIMETYPE);
    }

    #[test]
    fn item_without_path_is_invalid() {
        let item = MediaItem::new("", "image/png", "a.png");
        assert!(!item.is_valid());
        assert!(MediaItem::new("/a.png", "image/png", "a.png").is_valid());
    }

    #[test]
    fn display_name_falls_back() {
        assert_eq!(MediaItem::new("/x", "image/png", "").display_name(), "Unknown File");
        assert_eq!(MediaItem::new("/x", "image/png", "x.png").display_name(), "x.png");
    }

    #[test]
    fn input_parses_with_missing_fields() {
        let raw = r#"{"items":[{"filepath":"/a.jpg","mimetype":"image/jpeg"}],"public_view":true}"#;
        let input = SlideshowInput::from_json(raw).unwrap();
        assert_eq!(input.items.len(), 1);
        assert_eq!(input.items[0].original_filename, "");
        assert!(input.public_view);
        assert_eq!(input.config, SlideshowConfig::default());
    }

    #[test]
    fn malformed_input_is_an_error() {
        assert!(matches!(
            SlideshowInput::from_json("{items: nope"),
            Err(SlideshowError::Input(_))
        ));
    }
}
