//! Desktop stand-ins for the mobile YouTube player and link handler.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::errors::EmbedError;
use crate::domain::ports::{LinkOpenerPort, PlaybackRequest, VideoPlayerPort};

/// Watch URL for a video, starting at the requested offset.
#[must_use]
pub fn watch_url(request: &PlaybackRequest) -> String {
    let mut url = format!("https://www.youtube.com/watch?v={}", request.video_id);
    if request.start_seconds > 0 {
        url.push_str(&format!("&t={}s", request.start_seconds));
    }
    if request.autoplay {
        url.push_str("&autoplay=1");
    }
    url
}

/// Opens links in the default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLinkOpener;

impl LinkOpenerPort for SystemLinkOpener {
    fn open_url(&self, url: &str) -> Result<(), EmbedError> {
        debug!(url, "Opening link in browser");
        opener::open_browser(url)
            .map_err(|e| EmbedError::playback(format!("failed to open {url}: {e}")))
    }
}

/// Plays videos by opening their watch page in the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserVideoPlayer;

#[async_trait]
impl VideoPlayerPort for BrowserVideoPlayer {
    async fn play(&self, request: &PlaybackRequest) -> Result<(), EmbedError> {
        let url = watch_url(request);
        tokio::task::spawn_blocking(move || SystemLinkOpener.open_url(&url))
            .await
            .map_err(|e| EmbedError::unexpected(format!("player task panicked: {e}")))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_url_with_offset() {
        let request = PlaybackRequest {
            video_id: "dQw4w9WgXcQ".to_string(),
            start_seconds: 3723,
            api_key: None,
            autoplay: true,
        };
        assert_eq!(
            watch_url(&request),
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=3723s&autoplay=1"
        );
    }

    #[test]
    fn test_watch_url_from_start() {
        let request = PlaybackRequest {
            video_id: "dQw4w9WgXcQ".to_string(),
            start_seconds: 0,
            api_key: None,
            autoplay: false,
        };
        assert_eq!(watch_url(&request), "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
    }
}
