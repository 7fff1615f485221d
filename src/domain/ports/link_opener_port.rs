use crate::domain::errors::EmbedError;

/// Opens a link outside the app (browser or YouTube app).
pub trait LinkOpenerPort: Send + Sync {
    /// Opens `url` externally.
    fn open_url(&self, url: &str) -> Result<(), EmbedError>;
}
