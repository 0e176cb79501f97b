use std::sync::{Arc, Mutex, PoisonError};


/// Blocking user notification, the equivalent of `window.alert`.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Keeps every alert raised so far. Clones share the same log.
#[derive(Clone, Debug, Default)]
pub struct AlertLog {
    alerts: Arc<Mutex<Vec<String>>>,
}

impl AlertLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.alerts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Notifier for AlertLog {
    fn alert(&self, message: &str) {
        tracing::info!(task = "alert", message);
        self.alerts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}
