//! Render-time choice between the YouTube, image, Open Graph and attachment
//! embeds of a post.

use tracing::trace;

use super::link_classifier::LinkClassifier;
use super::youtube_time::YouTubeTimeParser;
use crate::application::dto::EmbedProps;
use crate::domain::entities::{
    Dimensions, Embed, ImageEmbed, LoadState, OpenGraphPreview, YouTubeEmbed,
};
use crate::domain::services::DimensionCalculator;

/// Natural height of the YouTube thumbnail box.
pub const MAX_YOUTUBE_IMAGE_HEIGHT: f64 = 202.0;
/// Natural width of the YouTube thumbnail box.
pub const MAX_YOUTUBE_IMAGE_WIDTH: f64 = 360.0;
/// Placeholder height of an image whose size is not known yet.
pub const MAX_IMAGE_HEIGHT: f64 = 150.0;

pub struct EmbedPolicy;

impl EmbedPolicy {
    /// Chooses the embed for a post given its props and load state.
    ///
    /// Toggleable embeds (YouTube, or an image without Open Graph data) win
    /// unless loading failed; everything else falls through to Open Graph
    /// and attachments.
    pub fn decide(props: &EmbedProps, state: &LoadState) -> Embed {
        let link = props.link.effective();

        if link.is_empty() && props.post_props.attachments.is_none() {
            return Embed::None;
        }

        let is_youtube = LinkClassifier::is_youtube_link(link);
        let is_image = LinkClassifier::is_image(
            Some(link),
            props.link.original(),
            props.metadata.as_ref(),
        );
        let is_open_graph = props.open_graph_data.is_some();

        trace!(
            link,
            is_youtube,
            is_image,
            is_open_graph,
            load_error = state.link_load_error,
            "Resolving post embed"
        );

        if ((is_image && !is_open_graph) || is_youtube)
            && !state.link_load_error
            && let Some(embed) = Self::toggleable_embed(props, state, is_image, is_youtube)
        {
            return embed;
        }

        Self::open_graph_or_attachments(props, is_youtube, is_image && !state.link_load_error)
    }

    /// Display size of the YouTube thumbnail for the post's viewport.
    pub fn youtube_dimensions(props: &EmbedProps) -> Dimensions {
        DimensionCalculator::calculate(
            MAX_YOUTUBE_IMAGE_HEIGHT,
            MAX_YOUTUBE_IMAGE_WIDTH,
            DimensionCalculator::viewport_width(&props.device, props.is_reply_post),
            None,
        )
    }

    fn toggleable_embed(
        props: &EmbedProps,
        state: &LoadState,
        is_image: bool,
        is_youtube: bool,
    ) -> Option<Embed> {
        let link = props.link.effective();
        if link.is_empty() {
            return None;
        }

        if is_youtube {
            return Self::youtube_embed(props, link);
        }

        if is_image {
            return Some(Self::image_embed(props, state, link));
        }

        None
    }

    fn youtube_embed(props: &EmbedProps, link: &str) -> Option<Embed> {
        let video_id = LinkClassifier::youtube_video_id(link)?;
        let dimensions = Self::youtube_dimensions(props);

        Some(Embed::YouTube(YouTubeEmbed {
            video_id: video_id.to_string(),
            thumbnail_url: LinkClassifier::youtube_thumbnail_url(video_id),
            start_seconds: YouTubeTimeParser::parse(props.link.original()),
            width: dimensions.width,
            height: dimensions.height,
        }))
    }

    fn image_embed(props: &EmbedProps, state: &LoadState, link: &str) -> Embed {
        let image_metadata = props
            .metadata
            .as_ref()
            .and_then(|metadata| metadata.image(link))
            .cloned();

        let height = if state.height > 0.0 {
            state.height
        } else {
            MAX_IMAGE_HEIGHT
        };

        Embed::Image(ImageEmbed {
            link: link.to_string(),
            uri: state.uri.clone(),
            width: state.width,
            height,
            image_metadata,
        })
    }

    fn open_graph_or_attachments(props: &EmbedProps, is_youtube: bool, is_image: bool) -> Embed {
        if is_youtube || (is_image && props.open_graph_data.is_none()) {
            return Embed::None;
        }

        if let Some(attachments) = props.post_props.non_empty_attachments() {
            return Embed::Attachments {
                post_id: props.post_id.clone(),
                attachments: attachments.to_vec(),
            };
        }

        if props.open_graph_data.is_none() && props.metadata.is_some() {
            return Embed::None;
        }

        let link = props.link.original();
        if !link.is_empty() && props.show_link_previews {
            return Embed::OpenGraph(OpenGraphPreview {
                link: link.to_string(),
                open_graph_data: props.open_graph_data.clone(),
                images_metadata: props.metadata.as_ref().map(|m| m.images.clone()),
                is_reply_post: props.is_reply_post,
            });
        }

        Embed::None
    }
}
