/// Port for user-facing alerts.
pub trait AlertPort: Send + Sync {
    /// Shows an alert with a title and body.
    fn alert(&self, title: &str, message: &str);
}

#[cfg(test)]
#[allow(dead_code)]
pub mod mock {
    use super::*;
    use std::sync::Arc;

    use parking_lot::Mutex;

    #[derive(Default)]
    pub struct MockAlertPort {
        pub alerts: Arc<Mutex<Vec<(String, String)>>>,
    }

    impl MockAlertPort {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl AlertPort for MockAlertPort {
        fn alert(&self, title: &str, message: &str) {
            self.alerts
                .lock()
                .push((title.to_string(), message.to_string()));
        }
    }
}
