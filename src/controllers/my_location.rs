use crate::api::MapBackend;
use crate::app_context::PageContext;
use crate::controllers::errors::InteractionError;
use crate::controllers::map_refresh::{MapAction, MapRefreshController, MapRefreshed};
use crate::dom::Document;
use crate::geolocation::PositionOptions;

pub struct MyLocationController<D: Document, B: MapBackend> {
    locate_me: MapRefreshController<D, B>,
}

impl<D, B> MyLocationController<D, B>
where
    D: Document,
    B: MapBackend,
{
    pub fn bind(context: PageContext<D, B>) -> Option<Self> {
        let locate_me = MapRefreshController::bind(context, MapAction::MY_LOCATION)?;
        Some(Self { locate_me })
    }

    pub fn with_position_options(self, position_options: PositionOptions) -> Self {
        Self {
            locate_me: self.locate_me.with_position_options(position_options),
        }
    }

    pub async fn show_my_location(&self) -> Result<MapRefreshed, InteractionError> {
        self.locate_me.on_click().await
    }
}
