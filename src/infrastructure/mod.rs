//! Infrastructure layer with external service adapters.

/// In-memory caches in front of network ports.
pub mod cache;
/// Application configuration.
pub mod config;
/// HTTP adapters for redirects and image sizes.
pub mod http;
/// Desktop alerts.
pub mod notifications;
/// Video playback and link opening.
pub mod playback;

pub use cache::{CacheStats, CachedRedirectResolver};
pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
pub use http::{HttpImageSizeClient, HttpRedirectClient, OfflineClient};
pub use notifications::DesktopAlertService;
pub use playback::{BrowserVideoPlayer, SystemLinkOpener};
