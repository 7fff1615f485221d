//! Port for standalone YouTube playback.

use async_trait::async_trait;

use crate::domain::errors::EmbedError;

/// Standalone playback request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackRequest {
    /// YouTube video id.
    pub video_id: String,
    /// Start offset in seconds.
    pub start_seconds: u64,
    /// Google developer key, required by the Android player.
    pub api_key: Option<String>,
    /// Start playing immediately.
    pub autoplay: bool,
}

/// Port for the platform video player.
#[async_trait]
pub trait VideoPlayerPort: Send + Sync {
    /// Plays the video and resolves when playback ends.
    async fn play(&self, request: &PlaybackRequest) -> Result<(), EmbedError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;

    use parking_lot::Mutex;

    /// Mock player recording requests.
    #[derive(Default)]
    pub struct MockVideoPlayer {
        failure: Option<String>,
        pub requests: Arc<Mutex<Vec<PlaybackRequest>>>,
    }

    impl MockVideoPlayer {
        /// Creates a player that always succeeds.
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a player that fails with the given details.
        pub fn failing(details: &str) -> Self {
            Self {
                failure: Some(details.to_string()),
                requests: Arc::default(),
            }
        }
    }

    #[async_trait]
    impl VideoPlayerPort for MockVideoPlayer {
        async fn play(&self, request: &PlaybackRequest) -> Result<(), EmbedError> {
            self.requests.lock().push(request.clone());
            match &self.failure {
                Some(details) => Err(EmbedError::playback(details.clone())),
                None => Ok(()),
            }
        }
    }
}
