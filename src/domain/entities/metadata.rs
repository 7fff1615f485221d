//! Post metadata supplied alongside a post: image sizes, Open Graph data and
//! message attachments.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Natural size of an image referenced by a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageMetadata {
    /// Width in pixels.
    #[serde(default)]
    pub width: u32,
    /// Height in pixels.
    #[serde(default)]
    pub height: u32,
    /// Image format (e.g., "png").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Frame count for animated images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_count: Option<u32>,
}

impl ImageMetadata {
    /// Creates metadata with the given dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            format: None,
            frame_count: None,
        }
    }

    /// Returns true if both dimensions are known and non-zero.
    #[must_use]
    pub const fn has_dimensions(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Metadata attached to a post by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMetadata {
    /// Image sizes keyed by the link they belong to.
    #[serde(default)]
    pub images: HashMap<String, ImageMetadata>,
}

impl PostMetadata {
    /// Adds an image entry.
    #[must_use]
    pub fn with_image(mut self, link: impl Into<String>, image: ImageMetadata) -> Self {
        self.images.insert(link.into(), image);
        self
    }

    /// Looks up the image entry for a link.
    #[must_use]
    pub fn image(&self, link: &str) -> Option<&ImageMetadata> {
        self.images.get(link)
    }
}

/// Image advertised by an Open Graph page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct OpenGraphImage {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub secure_url: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// Open Graph metadata for a link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct OpenGraphData {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub site_name: Option<String>,
    #[serde(default)]
    pub images: Vec<OpenGraphImage>,
}

/// Field of a message attachment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct AttachmentField {
    pub title: String,
    pub value: String,
    #[serde(default)]
    pub short: bool,
}

/// Rich message attachment posted by an integration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct MessageAttachment {
    #[serde(default)]
    pub fallback: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub pretext: Option<String>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub title_link: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub thumb_url: Option<String>,
    #[serde(default)]
    pub fields: Vec<AttachmentField>,
}

/// Free-form post properties; only attachments matter here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostProps {
    /// Message attachments. `Some(vec![])` still counts as present.
    #[serde(default)]
    pub attachments: Option<Vec<MessageAttachment>>,
}

impl PostProps {
    /// Creates props carrying the given attachments.
    #[must_use]
    pub const fn with_attachments(attachments: Vec<MessageAttachment>) -> Self {
        Self {
            attachments: Some(attachments),
        }
    }

    /// Returns the attachments when at least one is present.
    #[must_use]
    pub fn non_empty_attachments(&self) -> Option<&[MessageAttachment]> {
        self.attachments
            .as_deref()
            .filter(|attachments| !attachments.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_metadata_json() {
        let json = r#"{
            "images": {
                "https://example.com/a.png": {"width": 640, "height": 480, "format": "png"}
            }
        }"#;

        let metadata: PostMetadata = serde_json::from_str(json).expect("valid metadata");
        let image = metadata.image("https://example.com/a.png").expect("entry");

        assert_eq!(image.width, 640);
        assert_eq!(image.format.as_deref(), Some("png"));
        assert!(image.has_dimensions());
    }

    #[test]
    fn test_empty_attachments_are_present_but_not_rendered() {
        let props = PostProps::with_attachments(vec![]);
        assert!(props.attachments.is_some());
        assert!(props.non_empty_attachments().is_none());
    }
}
