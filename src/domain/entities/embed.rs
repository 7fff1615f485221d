use std::collections::HashMap;

use serde::Serialize;

use super::{ImageMetadata, MessageAttachment, OpenGraphData};

/// YouTube thumbnail embed that starts playback when pressed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YouTubeEmbed {
    /// 11-character video id.
    pub video_id: String,
    /// `hqdefault.jpg` thumbnail.
    pub thumbnail_url: String,
    /// Playback start offset in seconds.
    pub start_seconds: u64,
    /// Display width.
    pub width: f64,
    /// Display height.
    pub height: f64,
}

/// Inline image embed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageEmbed {
    /// Link the image was found at.
    pub link: String,
    /// Resolved image URI, once the size load finished.
    pub uri: Option<String>,
    /// Display width (zero until loaded).
    pub width: f64,
    /// Display height, falling back to a fixed placeholder height.
    pub height: f64,
    /// Server-provided metadata for the link.
    pub image_metadata: Option<ImageMetadata>,
}

/// Open Graph link preview card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenGraphPreview {
    /// Link being previewed (as posted).
    pub link: String,
    /// Open Graph data, if already fetched.
    pub open_graph_data: Option<OpenGraphData>,
    /// Image metadata for the post.
    pub images_metadata: Option<HashMap<String, ImageMetadata>>,
    /// Rendered inside a reply thread.
    pub is_reply_post: bool,
}

/// Additional content chosen for a post.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Embed {
    /// YouTube player thumbnail.
    YouTube(YouTubeEmbed),
    /// Inline image.
    Image(ImageEmbed),
    /// Open Graph card.
    OpenGraph(OpenGraphPreview),
    /// Message attachments of the post.
    Attachments {
        /// Post the attachments belong to.
        post_id: String,
        /// Attachments in post order.
        attachments: Vec<MessageAttachment>,
    },
    /// Nothing to show.
    #[default]
    None,
}

impl Embed {
    /// Short name of the embed kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::YouTube(_) => "youtube",
            Self::Image(_) => "image",
            Self::OpenGraph(_) => "open_graph",
            Self::Attachments { .. } => "attachments",
            Self::None => "none",
        }
    }

    /// Returns true if nothing is rendered.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns true for the toggleable YouTube and image embeds.
    #[must_use]
    pub const fn is_toggleable(&self) -> bool {
        matches!(self, Self::YouTube(_) | Self::Image(_))
    }
}

impl std::fmt::Display for Embed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind())
    }
}
