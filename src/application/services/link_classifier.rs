use std::sync::LazyLock;

use regex::Regex;

use crate::domain::entities::PostMetadata;

/// Extensions (and trailing path segments) recognised as direct image links.
const IMAGE_FORMATS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "tif", "tiff", "webp", "svg", "heic",
];

static YOUTUBE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:http|https)://(?:www\.|m\.)?(?:(?:youtube\.com/(?:(?:v/)|(?:(?:watch|embed/watch)(?:/|.*v=))|(?:embed/)|(?:user/[^/]+/u/[0-9]/)))|(?:youtu\.be/))([^#&?]*)",
    )
    .unwrap()
});

const YOUTUBE_VIDEO_ID_LEN: usize = 11;

/// Classifies post links as images, YouTube videos, or neither.
pub struct LinkClassifier;

impl LinkClassifier {
    /// Returns true if the link, ignoring its query string, ends in a known
    /// image format.
    pub fn is_image_link(link: &str) -> bool {
        let path = link.split('?').next().unwrap_or(link).to_ascii_lowercase();

        IMAGE_FORMATS.iter().any(|format| {
            path.strip_suffix(format)
                .is_some_and(|rest| rest.ends_with('.') || rest.ends_with('/'))
        })
    }

    /// Returns true for youtube.com and youtu.be video links.
    pub fn is_youtube_link(link: &str) -> bool {
        YOUTUBE_RE.is_match(link.trim())
    }

    /// Extracts the 11-character video id of a YouTube link.
    pub fn youtube_video_id(link: &str) -> Option<&str> {
        YOUTUBE_RE
            .captures(link.trim())
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str())
            .filter(|id| id.len() == YOUTUBE_VIDEO_ID_LEN)
    }

    /// High quality thumbnail of a YouTube video.
    pub fn youtube_thumbnail_url(video_id: &str) -> String {
        format!("https://i.ytimg.com/vi/{video_id}/hqdefault.jpg")
    }

    /// Returns true if `specific` (or the post's `link` when absent) looks like
    /// an image, or if the post metadata describes an image for either link.
    pub fn is_image(specific: Option<&str>, link: &str, metadata: Option<&PostMetadata>) -> bool {
        let candidate = specific.filter(|s| !s.is_empty()).unwrap_or(link);
        if Self::is_image_link(candidate) {
            return true;
        }

        metadata.is_some_and(|metadata| {
            specific.is_some_and(|s| metadata.image(s).is_some()) || metadata.image(link).is_some()
        })
    }

    /// URL whose size should be loaded for `target`: the target itself for
    /// images, nothing otherwise. YouTube thumbnails have a fixed size.
    pub fn image_url(target: &str, link: &str, metadata: Option<&PostMetadata>) -> Option<String> {
        if Self::is_youtube_link(target) {
            return None;
        }

        Self::is_image(Some(target), link, metadata).then(|| target.to_string())
    }
}
