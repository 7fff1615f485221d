//! Network-free stand-in for the HTTP adapters.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::errors::EmbedError;
use crate::domain::ports::{ImageSize, ImageSizePort, RedirectPort};

/// Answers every lookup without touching the network.
///
/// Links never redirect and image sizes are unknown, so only sizes present
/// in post metadata are used.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineClient;

#[async_trait]
impl RedirectPort for OfflineClient {
    async fn redirect_location(&self, link: &str) -> Result<Option<String>, EmbedError> {
        debug!(link, "Offline, not resolving redirect");
        Ok(None)
    }
}

#[async_trait]
impl ImageSizePort for OfflineClient {
    async fn image_size(&self, uri: &str) -> Result<ImageSize, EmbedError> {
        Err(EmbedError::image_size(uri, "offline"))
    }
}
