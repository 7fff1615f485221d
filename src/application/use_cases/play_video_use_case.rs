//! YouTube playback for pressed video embeds.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::{EmbedProps, Platform};
use crate::application::services::{LinkClassifier, YouTubeTimeParser};
use crate::domain::errors::EmbedError;
use crate::domain::ports::{AlertPort, LinkOpenerPort, PlaybackRequest, VideoPlayerPort};

/// Title of the playback failure alert.
pub const PLAYBACK_ERROR_TITLE: &str = "YouTube playback error";

/// How a playback attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackOutcome {
    /// The standalone player finished; the host should restore its status bar.
    Ended,
    /// The Android player was started.
    Started,
    /// The link was handed to the system.
    OpenedExternally,
    /// Playback failed and the user was alerted.
    Failed(String),
}

/// Plays the YouTube video of a post.
pub struct PlayVideoUseCase {
    player: Arc<dyn VideoPlayerPort>,
    opener: Arc<dyn LinkOpenerPort>,
    alerts: Arc<dyn AlertPort>,
}

impl PlayVideoUseCase {
    /// Creates new use case.
    #[must_use]
    pub fn new(
        player: Arc<dyn VideoPlayerPort>,
        opener: Arc<dyn LinkOpenerPort>,
        alerts: Arc<dyn AlertPort>,
    ) -> Self {
        Self {
            player,
            opener,
            alerts,
        }
    }

    /// Starts playback of the video the embed shows, following the
    /// expanded link when the post link is a shortener.
    ///
    /// Failures are shown to the user and never retried.
    pub async fn execute(&self, props: &EmbedProps) -> PlaybackOutcome {
        let link = props.link.effective();

        let Some(video_id) = LinkClassifier::youtube_video_id(link) else {
            return self.fail(&EmbedError::invalid_url(link, "not a YouTube video link"));
        };

        let start_seconds = YouTubeTimeParser::parse(props.link.original());
        debug!(video_id, start_seconds, platform = %props.platform, "Playing YouTube video");

        match props.platform {
            Platform::Ios => {
                let request = PlaybackRequest {
                    video_id: video_id.to_string(),
                    start_seconds,
                    api_key: None,
                    autoplay: true,
                };
                match self.player.play(&request).await {
                    Ok(()) => {
                        info!(video_id, "YouTube playback ended");
                        PlaybackOutcome::Ended
                    }
                    Err(e) => self.fail(&e),
                }
            }
            Platform::Android => match &props.google_developer_key {
                Some(api_key) => {
                    let request = PlaybackRequest {
                        video_id: video_id.to_string(),
                        start_seconds,
                        api_key: Some(api_key.clone()),
                        autoplay: true,
                    };
                    match self.player.play(&request).await {
                        Ok(()) => PlaybackOutcome::Started,
                        Err(e) => self.fail(&e),
                    }
                }
                None => match self.opener.open_url(link) {
                    Ok(()) => PlaybackOutcome::OpenedExternally,
                    Err(e) => self.fail(&e),
                },
            },
        }
    }

    fn fail(&self, error: &EmbedError) -> PlaybackOutcome {
        warn!(error = %error, "YouTube playback failed");
        let details = error.to_string();
        self.alerts
            .alert(PLAYBACK_ERROR_TITLE, &playback_error_description(&details));
        PlaybackOutcome::Failed(details)
    }
}

/// Body of the playback failure alert.
#[must_use]
pub fn playback_error_description(details: &str) -> String {
    format!("An error occurred while trying to play the YouTube video.\nDetails: {details}")
}
