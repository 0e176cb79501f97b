use std::sync::{Arc, Mutex, PoisonError};
use url::Url;


/// Full-page navigation, the equivalent of assigning `window.location.href`.
pub trait Navigator: Send + Sync {
    fn navigate(&self, url: Url);
}

#[derive(Clone, Debug, Default)]
pub struct History {
    visited: Arc<Mutex<Vec<Url>>>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Url> {
        self.visited
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl Navigator for History {
    fn navigate(&self, url: Url) {
        tracing::info!(task = "navigation", %url);
        self.visited
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(url);
    }
}
