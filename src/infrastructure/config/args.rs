use super::app_config::LogLevel;
use crate::application::dto::Platform;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "post-embed",
    version,
    about = "Decide how a chat post's link is embedded",
    long_about = None
)]
pub struct CliArgs {
    /// Link attached to the post.
    pub link: String,

    /// Post identifier used for attachments.
    #[arg(long, default_value = "post")]
    pub post_id: String,

    /// Already known redirect target of the link.
    #[arg(long, value_name = "URL")]
    pub expanded_link: Option<String>,

    /// JSON file with post metadata (`{"images": {...}}`).
    #[arg(long, value_name = "PATH")]
    pub metadata: Option<PathBuf>,

    /// JSON file with Open Graph data for the link.
    #[arg(long, value_name = "PATH")]
    pub open_graph: Option<PathBuf>,

    /// JSON file with the post's message attachments.
    #[arg(long, value_name = "PATH")]
    pub attachments: Option<PathBuf>,

    /// Lay the post out as a reply.
    #[arg(long)]
    pub reply: bool,

    /// Skip redirect resolution and image size fetching.
    #[arg(long)]
    pub offline: bool,

    /// Play the video when the embed is a YouTube video.
    #[arg(long)]
    pub play: bool,

    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Show Open Graph link previews.
    #[arg(long)]
    pub show_link_previews: Option<bool>,

    /// Platform whose YouTube playback rules apply.
    #[arg(long, value_enum)]
    pub platform: Option<Platform>,

    /// Google developer key for the Android YouTube player.
    #[arg(long, env = "POST_EMBED_GOOGLE_DEVELOPER_KEY", hide_env_values = true)]
    pub google_developer_key: Option<String>,

    /// Show alerts as desktop notifications.
    #[arg(long)]
    pub enable_desktop_notifications: Option<bool>,

    /// Device window width.
    #[arg(long)]
    pub device_width: Option<f64>,

    /// Device window height.
    #[arg(long)]
    pub device_height: Option<f64>,

    /// Tablet layout with a permanent sidebar.
    #[arg(long)]
    pub permanent_sidebar: Option<bool>,

    /// HTTP request timeout in seconds.
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}
