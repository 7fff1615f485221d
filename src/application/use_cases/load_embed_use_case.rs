//! Size and redirect loading run when a post embed mounts or its link changes.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::EmbedProps;
use crate::application::services::LinkClassifier;
use crate::domain::errors::EmbedError;
use crate::domain::ports::{ImageSizePort, RedirectPort};

/// Where a resolved image size came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeSource {
    /// Server-provided post metadata.
    Metadata,
    /// Fetched from the image itself.
    Network,
}

/// Outcome of the image size lookup.
#[derive(Debug, Clone)]
pub enum SizeProbe {
    /// The link is not an image (or is YouTube); no size was needed.
    NotRequested,
    /// Size resolved.
    Resolved {
        /// URI the size belongs to.
        uri: String,
        /// Natural width.
        width: u32,
        /// Natural height.
        height: u32,
        /// Where the size came from.
        source: SizeSource,
    },
    /// Size lookup failed.
    Failed {
        /// URI that could not be sized.
        uri: String,
        /// Failure reason.
        error: EmbedError,
    },
}

/// Result of one load pass, applied by the embed afterwards.
#[derive(Debug, Clone)]
pub struct LoadReport {
    /// Original link the pass ran for.
    pub link: String,
    /// Redirect target learned during the pass.
    pub expanded_link: Option<String>,
    /// Whether redirect resolution was requested.
    pub redirect_requested: bool,
    /// Image size lookup outcome.
    pub probe: SizeProbe,
}

impl LoadReport {
    fn empty(link: &str) -> Self {
        Self {
            link: link.to_string(),
            expanded_link: None,
            redirect_requested: false,
            probe: SizeProbe::NotRequested,
        }
    }
}

/// Classifies the post link and loads what its embed needs.
pub struct LoadEmbedUseCase {
    redirect_port: Arc<dyn RedirectPort>,
    image_size_port: Arc<dyn ImageSizePort>,
}

impl LoadEmbedUseCase {
    /// Creates new use case.
    #[must_use]
    pub fn new(
        redirect_port: Arc<dyn RedirectPort>,
        image_size_port: Arc<dyn ImageSizePort>,
    ) -> Self {
        Self {
            redirect_port,
            image_size_port,
        }
    }

    /// Runs one load pass.
    ///
    /// YouTube links need nothing. Image links get their size from metadata
    /// or the network. Any other link is redirect-resolved once (unless an
    /// expanded link is already known and the link did not change) and the
    /// target is classified a second time.
    pub async fn execute(&self, props: &EmbedProps, link_changed: bool) -> LoadReport {
        let link = props.link.original();
        let mut report = LoadReport::empty(link);

        if link.is_empty() {
            return report;
        }

        if LinkClassifier::is_youtube_link(link) {
            debug!(link, "YouTube link, thumbnail has a fixed size");
            return report;
        }

        let metadata = props.metadata.as_ref();
        let mut image_url = LinkClassifier::image_url(link, link, metadata);

        if image_url.is_none() {
            match props.link.expanded() {
                Some(expanded) if !link_changed => {
                    image_url = LinkClassifier::image_url(expanded, link, metadata);
                }
                _ => {
                    report.redirect_requested = true;
                    if let Some(target) = self.resolve_redirect(link).await {
                        image_url = LinkClassifier::image_url(&target, link, metadata);
                        report.expanded_link = Some(target);
                    }
                }
            }
        }

        if let Some(uri) = image_url {
            report.probe = self.probe_size(props, uri).await;
        }

        report
    }

    async fn resolve_redirect(&self, link: &str) -> Option<String> {
        debug!(link, "Resolving redirect location");
        match self.redirect_port.redirect_location(link).await {
            Ok(Some(target)) if target != link => {
                info!(link, target = %target, "Link expanded");
                Some(target)
            }
            Ok(_) => {
                debug!(link, "Link does not redirect");
                None
            }
            Err(e) => {
                warn!(link, error = %e, "Failed to resolve redirect");
                None
            }
        }
    }

    async fn probe_size(&self, props: &EmbedProps, uri: String) -> SizeProbe {
        let known = props.metadata.as_ref().and_then(|metadata| {
            metadata
                .image(props.link.original())
                .or_else(|| metadata.image(&uri))
                .filter(|image| image.has_dimensions())
        });

        if let Some(image) = known {
            debug!(uri = %uri, "Image size taken from post metadata");
            return SizeProbe::Resolved {
                width: image.width,
                height: image.height,
                uri,
                source: SizeSource::Metadata,
            };
        }

        match self.image_size_port.image_size(&uri).await {
            Ok(size) => {
                debug!(uri = %uri, width = size.width, height = size.height, "Image size fetched");
                SizeProbe::Resolved {
                    uri,
                    width: size.width,
                    height: size.height,
                    source: SizeSource::Network,
                }
            }
            Err(error) => {
                warn!(uri = %uri, error = %error, "Failed to fetch image size");
                SizeProbe::Failed { uri, error }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ImageMetadata, PostMetadata};
    use crate::domain::ports::mocks::{MockImageSizePort, MockRedirectPort};

    const IMAGE_LINK: &str = "https://example.com/cat.png";
    const SHORT_LINK: &str = "https://bit.ly/xyz";

    fn use_case(redirect: MockRedirectPort, sizes: Arc<MockImageSizePort>) -> LoadEmbedUseCase {
        LoadEmbedUseCase::new(Arc::new(redirect), sizes)
    }

    fn no_redirects() -> MockRedirectPort {
        let mut redirect = MockRedirectPort::new();
        redirect.expect_redirect_location().never();
        redirect
    }

    #[tokio::test]
    async fn test_youtube_link_skips_loading() {
        let sizes = Arc::new(MockImageSizePort::new());
        let use_case = use_case(no_redirects(), sizes.clone());
        let props = EmbedProps::new("p1", "https://youtu.be/dQw4w9WgXcQ");

        let report = use_case.execute(&props, false).await;

        assert!(matches!(report.probe, SizeProbe::NotRequested));
        assert!(!report.redirect_requested);
        assert!(sizes.requests().is_empty());
    }

    #[tokio::test]
    async fn test_empty_link_skips_loading() {
        let use_case = use_case(no_redirects(), Arc::new(MockImageSizePort::new()));
        let report = use_case.execute(&EmbedProps::new("p1", ""), false).await;
        assert!(matches!(report.probe, SizeProbe::NotRequested));
    }

    #[tokio::test]
    async fn test_image_size_from_metadata() {
        let sizes = Arc::new(MockImageSizePort::new());
        let use_case = use_case(no_redirects(), sizes.clone());
        let metadata = PostMetadata::default().with_image(IMAGE_LINK, ImageMetadata::new(800, 600));
        let props = EmbedProps::new("p1", IMAGE_LINK).with_metadata(metadata);

        let report = use_case.execute(&props, false).await;

        match report.probe {
            SizeProbe::Resolved {
                uri,
                width,
                height,
                source,
            } => {
                assert_eq!(uri, IMAGE_LINK);
                assert_eq!((width, height), (800, 600));
                assert_eq!(source, SizeSource::Metadata);
            }
            other => panic!("Expected resolved size, got {other:?}"),
        }
        assert!(sizes.requests().is_empty());
    }

    #[tokio::test]
    async fn test_image_size_from_network_when_metadata_incomplete() {
        let sizes = Arc::new(MockImageSizePort::new().with_size(IMAGE_LINK, 64, 32));
        let use_case = use_case(no_redirects(), sizes.clone());
        let metadata = PostMetadata::default().with_image(IMAGE_LINK, ImageMetadata::new(0, 32));
        let props = EmbedProps::new("p1", IMAGE_LINK).with_metadata(metadata);

        let report = use_case.execute(&props, false).await;

        assert!(matches!(
            report.probe,
            SizeProbe::Resolved {
                width: 64,
                height: 32,
                source: SizeSource::Network,
                ..
            }
        ));
        assert_eq!(sizes.requests(), vec![IMAGE_LINK.to_string()]);
    }

    #[tokio::test]
    async fn test_image_size_failure_is_reported() {
        let use_case = use_case(no_redirects(), Arc::new(MockImageSizePort::new()));
        let report = use_case.execute(&EmbedProps::new("p1", IMAGE_LINK), false).await;

        assert!(matches!(report.probe, SizeProbe::Failed { .. }));
    }

    #[tokio::test]
    async fn test_unknown_link_requests_redirect_exactly_once() {
        let mut redirect = MockRedirectPort::new();
        redirect
            .expect_redirect_location()
            .withf(|link| link.to_string() == SHORT_LINK)
            .times(1)
            .returning(|_| Ok(Some("https://example.com/article".to_string())));
        let sizes = Arc::new(MockImageSizePort::new());
        let use_case = use_case(redirect, sizes.clone());

        let report = use_case.execute(&EmbedProps::new("p1", SHORT_LINK), false).await;

        assert!(report.redirect_requested);
        assert_eq!(report.expanded_link.as_deref(), Some("https://example.com/article"));
        assert!(matches!(report.probe, SizeProbe::NotRequested));
        assert!(sizes.requests().is_empty());
    }

    #[tokio::test]
    async fn test_redirect_to_image_probes_expanded_link() {
        let mut redirect = MockRedirectPort::new();
        redirect
            .expect_redirect_location()
            .times(1)
            .returning(|_| Ok(Some(IMAGE_LINK.to_string())));
        let sizes = Arc::new(MockImageSizePort::new().with_size(IMAGE_LINK, 100, 100));
        let use_case = use_case(redirect, sizes.clone());

        let report = use_case.execute(&EmbedProps::new("p1", SHORT_LINK), false).await;

        assert_eq!(report.expanded_link.as_deref(), Some(IMAGE_LINK));
        assert!(matches!(report.probe, SizeProbe::Resolved { .. }));
        assert_eq!(sizes.requests(), vec![IMAGE_LINK.to_string()]);
    }

    #[tokio::test]
    async fn test_known_expanded_link_skips_redirect() {
        let sizes = Arc::new(MockImageSizePort::new().with_size(IMAGE_LINK, 10, 10));
        let use_case = use_case(no_redirects(), sizes.clone());
        let props = EmbedProps::new("p1", SHORT_LINK).with_expanded_link(IMAGE_LINK);

        let report = use_case.execute(&props, false).await;

        assert!(!report.redirect_requested);
        assert!(matches!(report.probe, SizeProbe::Resolved { .. }));
    }

    #[tokio::test]
    async fn test_link_change_resolves_again_despite_expanded_link() {
        let mut redirect = MockRedirectPort::new();
        redirect
            .expect_redirect_location()
            .times(1)
            .returning(|_| Ok(None));
        let use_case = use_case(redirect, Arc::new(MockImageSizePort::new()));
        let props = EmbedProps::new("p1", SHORT_LINK).with_expanded_link("https://old.example.com");

        let report = use_case.execute(&props, true).await;

        assert!(report.redirect_requested);
        assert_eq!(report.expanded_link, None);
    }

    #[tokio::test]
    async fn test_redirect_failure_is_not_fatal() {
        let mut redirect = MockRedirectPort::new();
        redirect
            .expect_redirect_location()
            .times(1)
            .returning(|link| Err(EmbedError::redirect(link.to_string(), "connection reset")));
        let use_case = use_case(redirect, Arc::new(MockImageSizePort::new()));

        let report = use_case.execute(&EmbedProps::new("p1", SHORT_LINK), false).await;

        assert!(report.redirect_requested);
        assert_eq!(report.expanded_link, None);
        assert!(matches!(report.probe, SizeProbe::NotRequested));
    }
}
