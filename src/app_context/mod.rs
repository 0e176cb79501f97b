use crate::api::MapBackend;
use crate::dom::Document;
use crate::geolocation::Geolocator;
use crate::navigation::Navigator;
use crate::notify::Notifier;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

/// The capabilities a page exposes to its controllers.
pub struct PageContext<D: Document, B: MapBackend> {
    pub document: D,
    pub backend: Arc<B>,
    pub geolocator: Arc<dyn Geolocator>,
    pub notifier: Arc<dyn Notifier>,
    pub navigator: Arc<dyn Navigator>,
}

impl<D: Document, B: MapBackend> Clone for PageContext<D, B> {
    fn clone(&self) -> Self {
        Self {
            document: self.document.clone(),
            backend: Arc::clone(&self.backend),
            geolocator: Arc::clone(&self.geolocator),
            notifier: Arc::clone(&self.notifier),
            navigator: Arc::clone(&self.navigator),
        }
    }
}

/// Per-click bookkeeping used to correlate log lines of one interaction.
pub struct InteractionContext {
    pub interaction_id: Uuid,
    started_at: Instant,
}

impl InteractionContext {
    pub fn new() -> Self {
        Self {
            interaction_id: Uuid::new_v4(),
            started_at: Instant::now(),
        }
    }

    pub fn processing_time_ms(&self) -> u128 {
        self.started_at.elapsed().as_millis()
    }
}

impl Default for InteractionContext {
    fn default() -> Self {
        Self::new()
    }
}
