use crate::api::requests::{Action, MapUpdateRequest};
use crate::api::responses::MapUpdateResponse;
use crate::api::MapBackend;
use crate::app_context::{InteractionContext, PageContext};
use crate::controllers::consts::{
    GEOLOCATION_UNSUPPORTED, LOADING_LABEL, LOCATION_ERROR_PREFIX, MAP_UPDATE_FAILED,
    SHOW_MY_LOCATION_LABEL, SHOW_STOPS_LABEL, SHOW_TERMINALS_LABEL,
};
use crate::controllers::errors::InteractionError;
use crate::dom::ids::{LOCATE_ME_BUTTON, MAP_CONTAINER, STOP_BUTTON, TERMINAL_BUTTON};
use crate::dom::{Document, Element};
use crate::geolocation::{self, Coordinates, PositionOptions};

/// Which button triggers the refresh, what the server should render, and the label the
/// button shows while idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapAction {
    pub button_id: &'static str,
    pub action: Action,
    pub idle_label: &'static str,
}

impl MapAction {
    pub const SHOW_TERMINALS: Self = Self {
        button_id: TERMINAL_BUTTON,
        action: Action::ShowTerminals,
        idle_label: SHOW_TERMINALS_LABEL,
    };
    pub const SHOW_STOPS: Self = Self {
        button_id: STOP_BUTTON,
        action: Action::ShowStops,
        idle_label: SHOW_STOPS_LABEL,
    };
    pub const MY_LOCATION: Self = Self {
        button_id: LOCATE_ME_BUTTON,
        action: Action::MyLocation,
        idle_label: SHOW_MY_LOCATION_LABEL,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Idle,
    Loading,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapRefreshed {
    pub action: Action,
    pub position: Coordinates,
    pub response: MapUpdateResponse,
}

/// Locate the user, ask the server for a map around them and show it.
///
/// The button's disabled flag doubles as the in-flight guard: while a refresh runs the
/// button is disabled and further clicks are ignored.
pub struct MapRefreshController<D: Document, B: MapBackend> {
    context: PageContext<D, B>,
    config: MapAction,
    button: D::Element,
    map: D::Element,
    position_options: PositionOptions,
}

impl<D, B> MapRefreshController<D, B>
where
    D: Document,
    B: MapBackend,
{
    /// `None` when the page lacks the button or the map container.
    pub fn bind(context: PageContext<D, B>, config: MapAction) -> Option<Self> {
        let button = context.document.element(config.button_id)?;
        let map = context.document.element(MAP_CONTAINER)?;
        tracing::debug!(
            button = config.button_id,
            label = %button.text(),
            "Bound map control.",
        );
        Some(Self {
            context,
            config,
            button,
            map,
            position_options: PositionOptions::default(),
        })
    }

    pub fn with_position_options(mut self, position_options: PositionOptions) -> Self {
        self.position_options = position_options;
        self
    }

    pub fn state(&self) -> ButtonState {
        if self.button.is_disabled() {
            ButtonState::Loading
        } else {
            ButtonState::Idle
        }
    }

    pub async fn on_click(&self) -> Result<MapRefreshed, InteractionError> {
        if self.state() == ButtonState::Loading {
            tracing::debug!(button = self.config.button_id, "Ignoring click on a busy button.");
            return Err(InteractionError::Busy);
        }
        if !self.context.geolocator.is_supported() {
            self.context.notifier.alert(GEOLOCATION_UNSUPPORTED);
            return Err(InteractionError::CapabilityUnavailable);
        }

        let interaction = InteractionContext::new();
        let outcome = {
            let _loading = self.enter_loading();
            self.refresh(&interaction).await
        };

        tracing::info!(
            task = "map_update",
            interaction_id = %interaction.interaction_id,
            action = %self.config.action,
            success = outcome.is_ok(),
            processing_time_ms = interaction.processing_time_ms(),
        );
        outcome
    }

    async fn refresh(
        &self,
        interaction: &InteractionContext,
    ) -> Result<MapRefreshed, InteractionError> {
        let position =
            match geolocation::locate(self.context.geolocator.as_ref(), &self.position_options)
                .await
            {
                Ok(position) => position,
                Err(error) => {
                    tracing::warn!(
                        interaction_id = %interaction.interaction_id,
                        %error,
                        "Geolocation failed.",
                    );
                    self.context
                        .notifier
                        .alert(&format!("{LOCATION_ERROR_PREFIX}{}", error.message()));
                    return Err(error.into());
                }
            };

        let request = MapUpdateRequest::new(position, self.config.action);
        let response = match self.context.backend.update_map(&request).await {
            Ok(response) => response,
            Err(error) => {
                tracing::error!(
                    interaction_id = %interaction.interaction_id,
                    action = %self.config.action,
                    %error,
                    "Map update failed.",
                );
                self.context.notifier.alert(MAP_UPDATE_FAILED);
                return Err(error.into());
            }
        };

        tracing::debug!(
            interaction_id = %interaction.interaction_id,
            user_lat = ?response.user_lat,
            user_lng = ?response.user_lng,
            user_action = ?response.user_action,
            terminals = response.terminals.len(),
            stops = response.stops.len(),
            "Rendering map.",
        );
        self.map.set_inner_html(response.map_html.as_str());

        Ok(MapRefreshed {
            action: self.config.action,
            position,
            response,
        })
    }

    fn enter_loading(&self) -> Loading<'_, D::Element> {
        self.button.set_disabled(true);
        self.button.set_text(LOADING_LABEL);
        Loading {
            button: &self.button,
            idle_label: self.config.idle_label,
        }
    }
}

/// Puts the button back to idle when dropped, whether the click finished or its future was
/// cancelled mid-flight.
struct Loading<'a, E: Element> {
    button: &'a E,
    idle_label: &'static str,
}

impl<E: Element> Drop for Loading<'_, E> {
    fn drop(&mut self) {
        self.button.set_disabled(false);
        self.button.set_text(self.idle_label);
    }
}
