//! Inputs of a post embed.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{DeviceDimensions, Link, OpenGraphData, PostMetadata, PostProps};

/// Mobile platform the post is shown on. Decides how YouTube plays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Standalone iOS player.
    Ios,
    /// Standalone Android player when a developer key is configured,
    /// otherwise the link is opened externally.
    #[default]
    Android,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ios => write!(f, "ios"),
            Self::Android => write!(f, "android"),
        }
    }
}

/// Everything a post embed is rendered from.
#[derive(Debug, Clone, Default)]
pub struct EmbedProps {
    /// Post identifier.
    pub post_id: String,
    /// First link of the post and its redirect target.
    pub link: Link,
    /// Post properties (attachments).
    pub post_props: PostProps,
    /// Server metadata (image sizes).
    pub metadata: Option<PostMetadata>,
    /// Open Graph data fetched for the link.
    pub open_graph_data: Option<OpenGraphData>,
    /// User preference for link previews.
    pub show_link_previews: bool,
    /// Post is shown inside a reply thread.
    pub is_reply_post: bool,
    /// Device window size.
    pub device: DeviceDimensions,
    /// Platform used for playback.
    pub platform: Platform,
    /// Google developer key for the Android player.
    pub google_developer_key: Option<String>,
}

impl EmbedProps {
    /// Creates props for a post link with previews enabled.
    #[must_use]
    pub fn new(post_id: impl Into<String>, link: impl Into<Link>) -> Self {
        Self {
            post_id: post_id.into(),
            link: link.into(),
            show_link_previews: true,
            ..Self::default()
        }
    }

    /// Sets the post metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: PostMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Sets the Open Graph data.
    #[must_use]
    pub fn with_open_graph(mut self, data: OpenGraphData) -> Self {
        self.open_graph_data = Some(data);
        self
    }

    /// Sets the post properties.
    #[must_use]
    pub fn with_post_props(mut self, post_props: PostProps) -> Self {
        self.post_props = post_props;
        self
    }

    /// Sets the expanded link.
    #[must_use]
    pub fn with_expanded_link(mut self, expanded: impl Into<String>) -> Self {
        self.link.set_expanded(expanded);
        self
    }

    /// Sets the link preview preference.
    #[must_use]
    pub const fn with_link_previews(mut self, show_link_previews: bool) -> Self {
        self.show_link_previews = show_link_previews;
        self
    }

    /// Marks the post as a reply.
    #[must_use]
    pub const fn as_reply(mut self) -> Self {
        self.is_reply_post = true;
        self
    }

    /// Sets the device dimensions.
    #[must_use]
    pub const fn with_device(mut self, device: DeviceDimensions) -> Self {
        self.device = device;
        self
    }

    /// Sets the playback platform and optional developer key.
    #[must_use]
    pub fn with_platform(mut self, platform: Platform, google_developer_key: Option<String>) -> Self {
        self.platform = platform;
        self.google_developer_key = google_developer_key.filter(|key| !key.is_empty());
        self
    }
}
