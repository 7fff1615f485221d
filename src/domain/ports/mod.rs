mod alert_port;
mod image_size_port;
mod link_opener_port;
mod redirect_port;
mod video_player_port;

pub use alert_port::AlertPort;
pub use image_size_port::{ImageSize, ImageSizePort};
pub use link_opener_port::LinkOpenerPort;
pub use redirect_port::RedirectPort;
pub use video_player_port::{PlaybackRequest, VideoPlayerPort};

#[cfg(test)]
pub mod mocks {
    pub use super::alert_port::mock::MockAlertPort;
    pub use super::image_size_port::mock::MockImageSizePort;
    pub use super::link_opener_port::mock::MockLinkOpener;
    pub use super::redirect_port::MockRedirectPort;
    pub use super::video_player_port::mock::MockVideoPlayer;
}
