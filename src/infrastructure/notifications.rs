//! User-facing alerts with conditional compilation.

use crate::domain::ports::AlertPort;

/// Desktop notification alert service.
#[cfg(feature = "notify")]
mod notify_impl {
    use super::*;
    use notify_rust::Notification;
    use tokio::task::JoinHandle;

    #[derive(Debug, Clone, Default)]
    pub struct DesktopAlertService {
        enabled: bool,
    }

    impl DesktopAlertService {
        #[must_use]
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        /// Shows the notification off the async threads. Returns the
        /// blocking task, or `None` when notifications are disabled.
        pub fn show(&self, title: &str, message: &str) -> Option<JoinHandle<()>> {
            if !self.enabled {
                return None;
            }

            let title = title.to_string();
            let message = message.to_string();

            Some(tokio::task::spawn_blocking(move || {
                if let Err(e) = Notification::new()
                    .summary(&title)
                    .body(&message)
                    .appname("post-embed")
                    .show()
                {
                    tracing::warn!("Failed to show notification: {}", e);
                }
            }))
        }
    }

    impl AlertPort for DesktopAlertService {
        fn alert(&self, title: &str, message: &str) {
            tracing::error!(title, message, "Alert");
            let _ = self.show(title, message);
        }
    }
}

/// Log-only alert service when the notify feature is disabled.
#[cfg(not(feature = "notify"))]
mod stub_impl {
    use super::*;

    #[derive(Debug, Clone, Default)]
    pub struct DesktopAlertService {
        _enabled: bool,
    }

    impl DesktopAlertService {
        #[must_use]
        pub fn new(_enabled: bool) -> Self {
            Self { _enabled: false }
        }
    }

    impl AlertPort for DesktopAlertService {
        fn alert(&self, title: &str, message: &str) {
            tracing::error!(title, message, "Alert");
        }
    }
}

#[cfg(feature = "notify")]
pub use notify_impl::DesktopAlertService;
#[cfg(not(feature = "notify"))]
pub use stub_impl::DesktopAlertService;

#[cfg(all(test, feature = "notify"))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_service_spawns_nothing() {
        let service = DesktopAlertService::new(false);
        assert!(service.show("title", "body").is_none());
        service.alert("title", "body");
    }
}
