//! Embed loading and playback error types.

use thiserror::Error;

/// Errors raised while resolving or playing an embed.
#[derive(Debug, Clone, Error)]
#[allow(missing_docs)]
pub enum EmbedError {
    #[error("invalid url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to determine image size for {uri}: {message}")]
    ImageSize { uri: String, message: String },

    #[error("failed to resolve redirect for {link}: {message}")]
    Redirect { link: String, message: String },

    #[error("network error: {message}")]
    NetworkError { message: String },

    #[error("{message}")]
    Playback { message: String },

    #[error("unexpected embed error: {message}")]
    Unexpected { message: String },
}

impl EmbedError {
    /// Creates invalid url error.
    #[must_use]
    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Creates image size error.
    #[must_use]
    pub fn image_size(uri: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ImageSize {
            uri: uri.into(),
            message: message.into(),
        }
    }

    /// Creates redirect error.
    #[must_use]
    pub fn redirect(link: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Redirect {
            link: link.into(),
            message: message.into(),
        }
    }

    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::NetworkError {
            message: message.into(),
        }
    }

    /// Creates playback error.
    #[must_use]
    pub fn playback(message: impl Into<String>) -> Self {
        Self::Playback {
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether error is network related.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::NetworkError { .. } | Self::Redirect { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playback_message_is_bare_details() {
        let err = EmbedError::playback("video unavailable");
        assert_eq!(err.to_string(), "video unavailable");
    }

    #[test]
    fn test_network_classification() {
        assert!(EmbedError::redirect("https://t.co/x", "timeout").is_network_error());
        assert!(!EmbedError::image_size("https://a.com/x.png", "bad header").is_network_error());
    }
}
