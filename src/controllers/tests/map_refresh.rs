use crate::api::requests::Action;
use crate::api::responses::MapUpdateResponse;
use crate::controllers::consts::{
    GEOLOCATION_UNSUPPORTED, LOADING_LABEL, MAP_UPDATE_FAILED, SHOW_MY_LOCATION_LABEL,
    SHOW_STOPS_LABEL, SHOW_TERMINALS_LABEL,
};
use crate::controllers::tests::fakes::{
    default_map_html, FailingGeolocator, FakeBackend, Harness, NeverResolves,
    RecordingGeolocator, Scripted,
};
use crate::controllers::errors::InteractionError;
use crate::controllers::map_refresh::{ButtonState, MapAction, MapRefreshController};
use crate::controllers::{LocationActionController, MyLocationController};
use crate::dom::ids::{LOCATE_ME_BUTTON, MAP_CONTAINER, STOP_BUTTON, TERMINAL_BUTTON};
use crate::dom::memory::MemoryElement;
use crate::dom::{Document, Element, InMemoryDocument};
use crate::geolocation::{
    Coordinates, FixedGeolocator, Geolocator, PositionError, PositionOptions, Unsupported,
};
use crate::page::{Page, INITIAL_MAP_HTML};
use async_trait::async_trait;
use http::StatusCode;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Barrier;

const ALL_ACTIONS: [MapAction; 3] = [
    MapAction::SHOW_TERMINALS,
    MapAction::SHOW_STOPS,
    MapAction::MY_LOCATION,
];

fn page_for(config: MapAction) -> InMemoryDocument {
    match config.action {
        Action::MyLocation => Page::Travel.skeleton(),
        _ => Page::Home.skeleton(),
    }
}

fn accra() -> FixedGeolocator {
    FixedGeolocator::new(Coordinates::new(5.6037, -0.187))
}

fn button(document: &InMemoryDocument, id: &str) -> MemoryElement {
    document.element(id).expect("Button should exist.")
}

fn map_html(document: &InMemoryDocument) -> String {
    document
        .element(MAP_CONTAINER)
        .expect("Map container should exist.")
        .inner_html()
}

#[tokio::test]
async fn test_unsupported_geolocation_never_requests() {
    for config in ALL_ACTIONS {
        let harness = Harness::new(page_for(config), FakeBackend::new(), Unsupported);
        let controller = MapRefreshController::bind(harness.context(), config)
            .expect("Controller should bind.");

        let result = controller.on_click().await;

        assert!(matches!(result, Err(InteractionError::CapabilityUnavailable)));
        assert!(harness.backend.map_requests().is_empty());
        assert_eq!(harness.alerts.messages(), vec![GEOLOCATION_UNSUPPORTED]);
        let button = button(&harness.document, config.button_id);
        assert!(!button.is_disabled());
        assert_eq!(button.text(), config.idle_label);
        assert_eq!(map_html(&harness.document), INITIAL_MAP_HTML);
    }
}

#[tokio::test]
async fn test_successful_refresh_replaces_map_and_resets_button() {
    for config in ALL_ACTIONS {
        let harness = Harness::new(page_for(config), FakeBackend::new(), accra());
        let controller = MapRefreshController::bind(harness.context(), config)
            .expect("Controller should bind.");

        let refreshed = controller.on_click().await.expect("Refresh should succeed.");

        assert_eq!(map_html(&harness.document), default_map_html(config.action));
        assert_eq!(refreshed.action, config.action);
        assert_eq!(refreshed.position, Coordinates::new(5.6037, -0.187));
        let requests = harness.backend.map_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].action, config.action);
        assert_eq!((requests[0].lat, requests[0].lng), (5.6037, -0.187));
        let button = button(&harness.document, config.button_id);
        assert!(!button.is_disabled());
        assert_eq!(button.text(), config.idle_label);
        assert_eq!(controller.state(), ButtonState::Idle);
        assert!(harness.alerts.messages().is_empty());
    }
}

#[tokio::test]
async fn test_map_html_is_inserted_verbatim() {
    let html = "<script>window.mapData = {};</script><div id=\"m\">&nbsp;</div>";
    let backend = FakeBackend::new().with_map_reply(
        Action::ShowTerminals,
        Scripted::Reply(MapUpdateResponse::with_html(html)),
    );
    let harness = Harness::new(Page::Home.skeleton(), backend, accra());
    let controller = LocationActionController::bind(harness.context())
        .expect("Controller should bind.");

    controller
        .show_terminals()
        .await
        .expect("Refresh should succeed.");

    assert_eq!(map_html(&harness.document), html);
}

#[tokio::test]
async fn test_geolocation_error_resets_button() {
    for config in ALL_ACTIONS {
        let geolocator = FailingGeolocator(PositionError::PermissionDenied(String::from(
            "User denied Geolocation",
        )));
        let harness = Harness::new(page_for(config), FakeBackend::new(), geolocator);
        let controller = MapRefreshController::bind(harness.context(), config)
            .expect("Controller should bind.");

        let result = controller.on_click().await;

        assert!(matches!(
            result,
            Err(InteractionError::Location(PositionError::PermissionDenied(_)))
        ));
        assert_eq!(
            harness.alerts.messages(),
            vec!["Error getting your location: User denied Geolocation"]
        );
        assert!(harness.backend.map_requests().is_empty());
        let button = button(&harness.document, config.button_id);
        assert!(!button.is_disabled());
        assert_eq!(button.text(), config.idle_label);
    }
}

#[tokio::test]
async fn test_failed_map_update_keeps_map_and_resets_button() {
    let backend = FakeBackend::new()
        .with_map_reply(
            Action::ShowTerminals,
            Scripted::Status(StatusCode::INTERNAL_SERVER_ERROR, "boom"),
        )
        .with_map_reply(Action::ShowStops, Scripted::Garbage);
    let harness = Harness::new(Page::Home.skeleton(), backend, accra());
    let controller = LocationActionController::bind(harness.context())
        .expect("Controller should bind.");

    let terminals = controller.show_terminals().await;
    let stops = controller.show_stops().await;

    assert!(matches!(terminals, Err(InteractionError::Network(_))));
    assert!(matches!(stops, Err(InteractionError::Network(_))));
    assert_eq!(
        harness.alerts.messages(),
        vec![MAP_UPDATE_FAILED, MAP_UPDATE_FAILED]
    );
    assert_eq!(map_html(&harness.document), INITIAL_MAP_HTML);
    for (id, label) in [
        (TERMINAL_BUTTON, SHOW_TERMINALS_LABEL),
        (STOP_BUTTON, SHOW_STOPS_LABEL),
    ] {
        let button = button(&harness.document, id);
        assert!(!button.is_disabled());
        assert_eq!(button.text(), label);
    }
}

#[tokio::test(start_paused = true)]
async fn test_hanging_geolocation_times_out_and_resets_button() {
    let harness = Harness::new(Page::Travel.skeleton(), FakeBackend::new(), NeverResolves);
    let controller =
        MyLocationController::bind(harness.context()).expect("Controller should bind.");

    let result = controller.show_my_location().await;

    assert!(matches!(
        result,
        Err(InteractionError::Location(PositionError::Timeout(_)))
    ));
    assert_eq!(
        harness.alerts.messages(),
        vec!["Error getting your location: Timeout expired"]
    );
    let button = button(&harness.document, LOCATE_ME_BUTTON);
    assert!(!button.is_disabled());
    assert_eq!(button.text(), SHOW_MY_LOCATION_LABEL);
}

#[tokio::test]
async fn test_position_is_requested_with_fresh_high_accuracy_options() {
    let geolocator = Arc::new(RecordingGeolocator::default());
    let harness = Harness::new(
        Page::Travel.skeleton(),
        FakeBackend::new(),
        Arc::clone(&geolocator),
    );
    let controller =
        MyLocationController::bind(harness.context()).expect("Controller should bind.");

    controller
        .show_my_location()
        .await
        .expect("Refresh should succeed.");

    let seen = geolocator.seen.lock().unwrap().clone();
    assert_eq!(seen, vec![PositionOptions::default()]);
    assert_eq!(seen[0].timeout, Duration::from_millis(5000));
    assert_eq!(seen[0].maximum_age, Duration::ZERO);
    assert!(seen[0].enable_high_accuracy);
}

/// Captures the button as it looks while the lookup is running.
struct ObservingGeolocator {
    document: InMemoryDocument,
    observed: Mutex<Option<(bool, String)>>,
}

#[async_trait]
impl Geolocator for ObservingGeolocator {
    async fn current_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<Coordinates, PositionError> {
        let button = self
            .document
            .element(TERMINAL_BUTTON)
            .expect("Button should exist.");
        *self.observed.lock().unwrap() = Some((button.is_disabled(), button.text()));
        Ok(Coordinates::new(0.0, 0.0))
    }
}

#[tokio::test]
async fn test_button_shows_loading_while_in_flight() {
    let document = Page::Home.skeleton();
    let geolocator = Arc::new(ObservingGeolocator {
        document: document.clone(),
        observed: Mutex::new(None),
    });
    let harness = Harness::new(document, FakeBackend::new(), Arc::clone(&geolocator));
    let controller = LocationActionController::bind(harness.context())
        .expect("Controller should bind.");

    controller
        .show_terminals()
        .await
        .expect("Refresh should succeed.");

    assert_eq!(
        geolocator.observed.lock().unwrap().clone(),
        Some((true, String::from(LOADING_LABEL)))
    );
}

#[tokio::test]
async fn test_click_on_busy_button_is_ignored() {
    let harness = Harness::new(Page::Home.skeleton(), FakeBackend::new(), accra());
    let controller = LocationActionController::bind(harness.context())
        .expect("Controller should bind.");
    button(&harness.document, STOP_BUTTON).set_disabled(true);

    let result = controller.show_stops().await;

    assert!(matches!(result, Err(InteractionError::Busy)));
    assert!(button(&harness.document, STOP_BUTTON).is_disabled());
    assert!(harness.backend.map_requests().is_empty());
    assert!(harness.alerts.messages().is_empty());
}

#[tokio::test]
async fn test_terminal_and_stop_buttons_run_concurrently() {
    // Both requests must be in flight at the same time for the barrier to open.
    let backend = FakeBackend::new().with_rendezvous(Arc::new(Barrier::new(2)));
    let harness = Harness::new(Page::Home.skeleton(), backend, accra());
    let controller = LocationActionController::bind(harness.context())
        .expect("Controller should bind.");

    let (terminals, stops) = tokio::time::timeout(
        Duration::from_secs(5),
        futures_util::future::join(controller.show_terminals(), controller.show_stops()),
    )
    .await
    .expect("Clicks blocked each other.");

    assert_eq!(
        terminals.expect("Terminals should load.").action,
        Action::ShowTerminals
    );
    assert_eq!(stops.expect("Stops should load.").action, Action::ShowStops);
    let rendered = map_html(&harness.document);
    assert!(
        rendered == default_map_html(Action::ShowTerminals)
            || rendered == default_map_html(Action::ShowStops)
    );
    for (id, label) in [
        (TERMINAL_BUTTON, SHOW_TERMINALS_LABEL),
        (STOP_BUTTON, SHOW_STOPS_LABEL),
    ] {
        let button = button(&harness.document, id);
        assert!(!button.is_disabled());
        assert_eq!(button.text(), label);
    }
}

#[tokio::test]
async fn test_second_click_on_same_button_while_loading_is_busy() {
    let backend = FakeBackend::new().with_rendezvous(Arc::new(Barrier::new(2)));
    let harness = Harness::new(Page::Home.skeleton(), backend, accra());
    let controller = LocationActionController::bind(harness.context())
        .expect("Controller should bind.");

    // The first click parks at the barrier; the second must bounce off the disabled button.
    let first = controller.show_terminals();
    let second = async {
        tokio::task::yield_now().await;
        let result = controller.show_terminals().await;
        harness.backend.release_rendezvous().await;
        result
    };
    let (first, second) = tokio::time::timeout(
        Duration::from_secs(5),
        futures_util::future::join(first, second),
    )
    .await
    .expect("First click never finished.");

    assert!(first.is_ok());
    assert!(matches!(second, Err(InteractionError::Busy)));
    assert_eq!(harness.backend.map_requests().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_click_restores_button() {
    // Nobody else ever reaches the barrier, so the request stays parked until cancelled.
    let backend = FakeBackend::new().with_rendezvous(Arc::new(Barrier::new(2)));
    let harness = Harness::new(Page::Home.skeleton(), backend, accra());
    let controller = LocationActionController::bind(harness.context())
        .expect("Controller should bind.");

    let cancelled =
        tokio::time::timeout(Duration::from_millis(50), controller.show_terminals()).await;

    assert!(cancelled.is_err());
    assert_eq!(harness.backend.map_requests().len(), 1);
    let terminal = button(&harness.document, TERMINAL_BUTTON);
    assert!(!terminal.is_disabled());
    assert_eq!(terminal.text(), SHOW_TERMINALS_LABEL);

    let controller = MapRefreshController::bind(harness.context(), MapAction::SHOW_TERMINALS)
        .expect("Controller should bind.");
    assert_eq!(controller.state(), ButtonState::Idle);
    let retried = tokio::time::timeout(Duration::from_millis(50), controller.on_click()).await;
    assert!(!matches!(retried, Ok(Err(InteractionError::Busy))));
    assert_eq!(harness.backend.map_requests().len(), 2);
    assert!(!terminal.is_disabled());
}

#[test]
fn test_bind_requires_all_collaborators() {
    let full = Harness::new(Page::Home.skeleton(), FakeBackend::new(), accra());
    assert!(LocationActionController::bind(full.context()).is_some());

    let without_map = Page::Home.skeleton();
    without_map.remove(MAP_CONTAINER);
    let harness = Harness::new(without_map, FakeBackend::new(), accra());
    assert!(LocationActionController::bind(harness.context()).is_none());

    let without_stops = Page::Home.skeleton();
    without_stops.remove(STOP_BUTTON);
    let harness = Harness::new(without_stops, FakeBackend::new(), accra());
    assert!(LocationActionController::bind(harness.context()).is_none());
    assert!(MapRefreshController::bind(harness.context(), MapAction::SHOW_TERMINALS).is_some());

    let home = Harness::new(Page::Home.skeleton(), FakeBackend::new(), accra());
    assert!(MyLocationController::bind(home.context()).is_none());
    let travel = Harness::new(Page::Travel.skeleton(), FakeBackend::new(), accra());
    assert!(MyLocationController::bind(travel.context()).is_some());
}
