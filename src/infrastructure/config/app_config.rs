//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::args::CliArgs;
use crate::application::dto::Platform;
use crate::domain::entities::DeviceDimensions;

pub(super) const APP_NAME: &str = "post-embed";
pub(super) const APP_QUALIFIER: &str = "com";
pub(super) const APP_ORGANIZATION: &str = "linuxmobile";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl LogLevel {
    /// Converts to tracing level.
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, loaded from TOML and overridden from the CLI.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path. Logs go to stderr when unset.
    #[serde(default)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Show Open Graph link previews.
    #[serde(default = "default_true")]
    pub show_link_previews: bool,

    /// Platform whose YouTube playback rules apply.
    #[serde(default)]
    pub platform: Platform,

    /// Google developer key for the Android YouTube player.
    #[serde(default)]
    pub google_developer_key: Option<String>,

    /// Show alerts as desktop notifications.
    #[serde(default = "default_true")]
    pub enable_desktop_notifications: bool,

    /// Device configuration.
    #[serde(default)]
    pub device: DeviceConfig,

    /// HTTP configuration.
    #[serde(default)]
    pub http: HttpConfig,
}

/// Device window the embed is laid out for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Window width in points.
    #[serde(default = "default_device_width")]
    pub width: f64,

    /// Window height in points.
    #[serde(default = "default_device_height")]
    pub height: f64,

    /// Tablet layout with a permanently visible sidebar.
    #[serde(default)]
    pub permanent_sidebar: bool,
}

impl DeviceConfig {
    /// Device dimensions for layout.
    #[must_use]
    pub const fn dimensions(&self) -> DeviceDimensions {
        DeviceDimensions::new(self.width, self.height).with_permanent_sidebar(self.permanent_sidebar)
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            width: default_device_width(),
            height: default_device_height(),
            permanent_sidebar: false,
        }
    }
}

/// HTTP adapter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Number of resolved redirects kept in memory.
    #[serde(default = "default_redirect_cache_size")]
    pub redirect_cache_size: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            redirect_cache_size: default_redirect_cache_size(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_device_width() -> f64 {
    DeviceDimensions::default().width
}

fn default_device_height() -> f64 {
    DeviceDimensions::default().height
}

fn default_timeout_secs() -> u64 {
    crate::infrastructure::http::DEFAULT_TIMEOUT_SECS
}

fn default_redirect_cache_size() -> usize {
    crate::infrastructure::cache::redirect_cache::DEFAULT_CACHE_SIZE
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(config_path) = &args.config {
            self.config = Some(config_path.clone());
        }
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(show_link_previews) = args.show_link_previews {
            self.show_link_previews = show_link_previews;
        }
        if let Some(platform) = args.platform {
            self.platform = platform;
        }
        if let Some(key) = &args.google_developer_key {
            self.google_developer_key = Some(key.clone());
        }
        if let Some(notifications) = args.enable_desktop_notifications {
            self.enable_desktop_notifications = notifications;
        }
        if let Some(width) = args.device_width {
            self.device.width = width;
        }
        if let Some(height) = args.device_height {
            self.device.height = height;
        }
        if let Some(permanent_sidebar) = args.permanent_sidebar {
            self.device.permanent_sidebar = permanent_sidebar;
        }
        if let Some(timeout_secs) = args.timeout_secs {
            self.http.timeout_secs = timeout_secs;
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default config file path.
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        Self::default_config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the log file path, if logging to a file.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone()
    }

    /// Returns effective config path.
    #[must_use]
    pub fn effective_config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(Self::default_config_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            show_link_previews: true,
            platform: Platform::default(),
            google_developer_key: None,
            enable_desktop_notifications: true,
            device: DeviceConfig::default(),
            http: HttpConfig::default(),
        }
    }
}
