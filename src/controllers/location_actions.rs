use crate::api::MapBackend;
use crate::app_context::PageContext;
use crate::controllers::errors::InteractionError;
use crate::controllers::map_refresh::{MapAction, MapRefreshController, MapRefreshed};
use crate::dom::Document;
use crate::geolocation::PositionOptions;

/// The terminal and stop buttons of the home map page. Each button runs independently, so
/// both may be in flight at once.
pub struct LocationActionController<D: Document, B: MapBackend> {
    terminals: MapRefreshController<D, B>,
    stops: MapRefreshController<D, B>,
}

impl<D, B> LocationActionController<D, B>
where
    D: Document,
    B: MapBackend,
{
    /// Binds only when both buttons and the map container are present.
    pub fn bind(context: PageContext<D, B>) -> Option<Self> {
        let terminals = MapRefreshController::bind(context.clone(), MapAction::SHOW_TERMINALS)?;
        let stops = MapRefreshController::bind(context, MapAction::SHOW_STOPS)?;
        Some(Self { terminals, stops })
    }

    pub fn with_position_options(self, position_options: PositionOptions) -> Self {
        Self {
            terminals: self.terminals.with_position_options(position_options.clone()),
            stops: self.stops.with_position_options(position_options),
        }
    }

    pub async fn show_terminals(&self) -> Result<MapRefreshed, InteractionError> {
        self.terminals.on_click().await
    }

    pub async fn show_stops(&self) -> Result<MapRefreshed, InteractionError> {
        self.stops.on_click().await
    }
}
