//! Stateful embed of a single post: owns the props, the load state and the
//! mounted flag, and turns them into an [`Embed`] on render.

use tracing::{debug, trace};

use crate::application::dto::EmbedProps;
use crate::application::services::{EmbedPolicy, ImagePreviewService, LinkClassifier, PreviewFile};
use crate::application::use_cases::{LoadEmbedUseCase, LoadReport, SizeProbe};
use crate::domain::entities::{Embed, LoadState};
use crate::domain::services::DimensionCalculator;

/// Additional content of a posted message.
#[derive(Debug, Clone)]
pub struct PostEmbed {
    props: EmbedProps,
    state: LoadState,
    mounted: bool,
}

impl PostEmbed {
    /// Creates an unmounted embed. Image posts with known metadata start with
    /// their display size already computed.
    #[must_use]
    pub fn new(props: EmbedProps) -> Self {
        let state = Self::initial_state(&props);
        Self {
            props,
            state,
            mounted: false,
        }
    }

    fn initial_state(props: &EmbedProps) -> LoadState {
        let link = props.link.original();
        let metadata = props.metadata.as_ref();

        let known = metadata
            .filter(|_| LinkClassifier::is_image(None, link, metadata))
            .and_then(|metadata| metadata.image(link))
            .filter(|image| image.has_dimensions());

        match known {
            Some(image) => LoadState::with_dimensions(DimensionCalculator::calculate(
                f64::from(image.height),
                f64::from(image.width),
                DimensionCalculator::viewport_width(&props.device, props.is_reply_post),
                None,
            )),
            None => LoadState::default(),
        }
    }

    /// Current props.
    #[must_use]
    pub const fn props(&self) -> &EmbedProps {
        &self.props
    }

    /// Current load state.
    #[must_use]
    pub const fn state(&self) -> &LoadState {
        &self.state
    }

    /// Returns true between [`mount`](Self::mount) and [`unmount`](Self::unmount).
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Marks the embed as shown. Load results are only applied while mounted.
    pub fn mount(&mut self) {
        self.mounted = true;
    }

    /// Marks the embed as gone; late load results are dropped.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    /// Replaces the props. Returns true when the link changed, in which case
    /// the load state starts over and the caller should load again.
    pub fn set_props(&mut self, props: EmbedProps) -> bool {
        let link_changed = props.link.original() != self.props.link.original();
        self.props = props;

        if link_changed {
            debug!(link = self.props.link.original(), "Post link changed");
            self.state = Self::initial_state(&self.props);
        }

        link_changed
    }

    /// Mounts the embed and runs its first load.
    pub async fn mount_and_load(&mut self, loader: &LoadEmbedUseCase) {
        self.mount();
        self.load(loader, false).await;
    }

    /// Replaces the props and reloads when the link changed.
    pub async fn update(&mut self, props: EmbedProps, loader: &LoadEmbedUseCase) {
        if self.set_props(props) {
            self.load(loader, true).await;
        }
    }

    /// Runs a load pass and applies its result.
    pub async fn load(&mut self, loader: &LoadEmbedUseCase, link_changed: bool) {
        let report = loader.execute(&self.props, link_changed).await;
        self.apply(report);
    }

    /// Applies a finished load pass. Ignored when unmounted or when the link
    /// changed while the pass was running.
    pub fn apply(&mut self, report: LoadReport) {
        if !self.mounted {
            trace!(link = %report.link, "Dropping load result for unmounted embed");
            return;
        }

        if report.link != self.props.link.original() {
            trace!(link = %report.link, "Dropping stale load result");
            return;
        }

        if let Some(expanded) = report.expanded_link {
            self.props.link.set_expanded(expanded);
        }

        match report.probe {
            SizeProbe::NotRequested => {}
            SizeProbe::Resolved {
                uri, width, height, ..
            } => self.set_image_size(&uri, width, height),
            SizeProbe::Failed { .. } => self.handle_link_load_error(),
        }
    }

    /// Records the natural size of the embedded image.
    pub fn set_image_size(&mut self, uri: &str, original_width: u32, original_height: u32) {
        if !self.mounted {
            return;
        }

        if original_width == 0 && original_height == 0 {
            self.handle_link_load_error();
            return;
        }

        let dimensions = if LinkClassifier::is_youtube_link(self.props.link.original()) {
            EmbedPolicy::youtube_dimensions(&self.props)
        } else {
            DimensionCalculator::calculate(
                f64::from(original_height),
                f64::from(original_width),
                DimensionCalculator::viewport_width(&self.props.device, self.props.is_reply_post),
                None,
            )
        };

        self.state
            .mark_loaded(uri, original_width, original_height, dimensions);
    }

    /// Called when the image or thumbnail fails to load.
    pub fn handle_link_load_error(&mut self) {
        debug!(link = self.props.link.effective(), "Embed failed to load");
        self.state.mark_error();
    }

    /// Chooses what to show for the post right now.
    #[must_use]
    pub fn render(&self) -> Embed {
        EmbedPolicy::decide(&self.props, &self.state)
    }

    /// File for the full-screen viewer when the image is pressed.
    #[must_use]
    pub fn preview_file(&self) -> Option<PreviewFile> {
        ImagePreviewService::preview_file(&self.props.link, &self.state)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::entities::{
        ImageMetadata, LoadPhase, MessageAttachment, OpenGraphData, PostMetadata, PostProps,
    };
    use crate::domain::errors::EmbedError;
    use crate::domain::ports::mocks::{MockImageSizePort, MockRedirectPort};

    const IMAGE_LINK: &str = "https://example.com/cat.png";
    const SHORT_LINK: &str = "https://bit.ly/xyz";

    fn loader(redirect: MockRedirectPort, sizes: MockImageSizePort) -> LoadEmbedUseCase {
        LoadEmbedUseCase::new(Arc::new(redirect), Arc::new(sizes))
    }

    fn idle_redirects() -> MockRedirectPort {
        let mut redirect = MockRedirectPort::new();
        redirect.expect_redirect_location().never();
        redirect
    }

    #[test]
    fn test_initial_dimensions_from_metadata() {
        let metadata = PostMetadata::default().with_image(IMAGE_LINK, ImageMetadata::new(640, 320));
        let embed = PostEmbed::new(EmbedProps::new("p1", IMAGE_LINK).with_metadata(metadata));

        assert!((embed.state().width - 320.0).abs() < 0.01);
        assert!((embed.state().height - 160.0).abs() < 0.01);
        assert_eq!(embed.state().phase(), LoadPhase::NotLoaded);
    }

    #[tokio::test]
    async fn test_mount_loads_image_size() {
        let loader = loader(idle_redirects(), MockImageSizePort::new().with_size(IMAGE_LINK, 1000, 500));
        let mut embed = PostEmbed::new(EmbedProps::new("p1", IMAGE_LINK));

        embed.mount_and_load(&loader).await;

        assert_eq!(embed.state().phase(), LoadPhase::Loaded);
        assert_eq!(embed.state().original_width, 1000);
        match embed.render() {
            Embed::Image(image) => {
                assert_eq!(image.uri.as_deref(), Some(IMAGE_LINK));
                assert!((image.width - 320.0).abs() < 0.01);
                assert!((image.height - 160.0).abs() < 0.01);
            }
            other => panic!("Expected image, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_size_failure_falls_back_to_attachments() {
        let loader = loader(idle_redirects(), MockImageSizePort::new());
        let attachment = MessageAttachment {
            title: Some("Deploy".to_string()),
            ..MessageAttachment::default()
        };
        let props = EmbedProps::new("p1", IMAGE_LINK)
            .with_post_props(PostProps::with_attachments(vec![attachment]));
        let mut embed = PostEmbed::new(props);

        embed.mount_and_load(&loader).await;

        assert_eq!(embed.state().phase(), LoadPhase::Error);
        assert_eq!(embed.render().kind(), "attachments");
    }

    #[tokio::test]
    async fn test_result_after_unmount_is_dropped() {
        let loader = loader(idle_redirects(), MockImageSizePort::new().with_size(IMAGE_LINK, 10, 10));
        let mut embed = PostEmbed::new(EmbedProps::new("p1", IMAGE_LINK));
        embed.mount();

        let report = loader.execute(embed.props(), false).await;
        embed.unmount();
        embed.apply(report);

        assert_eq!(embed.state().phase(), LoadPhase::NotLoaded);
        assert_eq!(embed.state().uri, None);
    }

    #[tokio::test]
    async fn test_stale_result_is_dropped() {
        let loader = loader(idle_redirects(), MockImageSizePort::new().with_size(IMAGE_LINK, 10, 10));
        let mut embed = PostEmbed::new(EmbedProps::new("p1", IMAGE_LINK));
        embed.mount();

        let report = loader.execute(embed.props(), false).await;
        assert!(embed.set_props(EmbedProps::new("p1", "https://example.com/dog.png")));
        embed.apply(report);

        assert_eq!(embed.state().phase(), LoadPhase::NotLoaded);
    }

    #[tokio::test]
    async fn test_redirect_expands_link_once() {
        let mut redirect = MockRedirectPort::new();
        redirect
            .expect_redirect_location()
            .times(1)
            .returning(|_| Ok(Some("https://youtu.be/dQw4w9WgXcQ".to_string())));
        let loader = loader(redirect, MockImageSizePort::new());
        let mut embed = PostEmbed::new(EmbedProps::new("p1", SHORT_LINK));

        embed.mount_and_load(&loader).await;
        let first = embed.render();
        let second = embed.render();

        assert_eq!(embed.props().link.expanded(), Some("https://youtu.be/dQw4w9WgXcQ"));
        assert_eq!(first.kind(), "youtube");
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_link_change_resets_state_and_reloads() {
        let mut redirect = MockRedirectPort::new();
        redirect
            .expect_redirect_location()
            .times(1)
            .returning(|link| Err(EmbedError::redirect(link.to_string(), "offline")));
        let loader = loader(redirect, MockImageSizePort::new());
        let mut embed = PostEmbed::new(EmbedProps::new("p1", IMAGE_LINK));

        embed.mount_and_load(&loader).await;
        assert_eq!(embed.state().phase(), LoadPhase::Error);

        let props = EmbedProps::new("p1", SHORT_LINK).with_open_graph(OpenGraphData::default());
        embed.update(props, &loader).await;

        assert_eq!(embed.state().phase(), LoadPhase::NotLoaded);
        assert_eq!(embed.render().kind(), "open_graph");
    }

    #[tokio::test]
    async fn test_update_with_same_link_does_not_reload() {
        let loader = loader(idle_redirects(), MockImageSizePort::new().with_size(IMAGE_LINK, 10, 10));
        let mut embed = PostEmbed::new(EmbedProps::new("p1", IMAGE_LINK));
        embed.mount_and_load(&loader).await;

        embed
            .update(EmbedProps::new("p1", IMAGE_LINK).as_reply(), &loader)
            .await;

        assert_eq!(embed.state().phase(), LoadPhase::Loaded);
        assert!(embed.props().is_reply_post);
    }

    #[test]
    fn test_zero_size_marks_error() {
        let mut embed = PostEmbed::new(EmbedProps::new("p1", IMAGE_LINK));
        embed.mount();
        embed.set_image_size(IMAGE_LINK, 0, 0);
        assert_eq!(embed.state().phase(), LoadPhase::Error);
    }

    #[test]
    fn test_youtube_size_uses_fixed_box() {
        let mut embed = PostEmbed::new(EmbedProps::new("p1", "https://youtu.be/dQw4w9WgXcQ"));
        embed.mount();
        embed.set_image_size("https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg", 480, 360);

        assert!((embed.state().width - 320.0).abs() < 0.01);
        assert!((embed.state().height - 179.55).abs() < 0.01);
    }

    #[tokio::test]
    async fn test_preview_file_after_load() {
        let loader = loader(idle_redirects(), MockImageSizePort::new().with_size(IMAGE_LINK, 800, 600));
        let mut embed = PostEmbed::new(EmbedProps::new("p1", IMAGE_LINK));
        assert!(embed.preview_file().is_none());

        embed.mount_and_load(&loader).await;

        let file = embed.preview_file().expect("loaded image");
        assert_eq!(file.caption, "cat.png");
        assert_eq!((file.width, file.height), (800, 600));
    }
}
