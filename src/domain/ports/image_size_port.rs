//! Port for querying the natural size of a remote image.

use async_trait::async_trait;

use crate::domain::errors::EmbedError;

/// Natural size of an image in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ImageSize {
    /// Creates a new size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Port for image size lookups.
#[async_trait]
pub trait ImageSizePort: Send + Sync {
    /// Fetches enough of the image at `uri` to learn its size.
    async fn image_size(&self, uri: &str) -> Result<ImageSize, EmbedError>;
}
