//! Port for resolving shortened links.

use async_trait::async_trait;

use crate::domain::errors::EmbedError;

/// Resolves the redirect target of a link.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RedirectPort: Send + Sync {
    /// Returns the `Location` the link redirects to, or `None` when the link
    /// does not redirect.
    async fn redirect_location(&self, link: &str) -> Result<Option<String>, EmbedError>;
}
