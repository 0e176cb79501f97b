use async_trait::async_trait;
use consts::{PERMISSION_DENIED_MESSAGE, TIMEOUT_MESSAGE};

pub mod consts;
pub mod errors;
pub mod fixed;
pub mod jitter;
pub mod models;

pub use errors::{InvalidSpread, PositionError};
pub use fixed::FixedGeolocator;
pub use jitter::JitterGeolocator;
pub use models::{Coordinates, PositionOptions};

/// Source of the device position, standing in for the browser's geolocation API.
///
/// The success and error callbacks of the browser API collapse into one `Result`.
#[async_trait]
pub trait Geolocator: Send + Sync {
    fn is_supported(&self) -> bool {
        true
    }

    async fn current_position(
        &self,
        options: &PositionOptions,
    ) -> Result<Coordinates, PositionError>;
}

/// A runtime without any geolocation capability.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unsupported;

#[async_trait]
impl Geolocator for Unsupported {
    fn is_supported(&self) -> bool {
        false
    }

    async fn current_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<Coordinates, PositionError> {
        Err(PositionError::PositionUnavailable(String::from(
            "Geolocation is not supported",
        )))
    }
}

/// A runtime where the user refused to share their position.
#[derive(Debug, Default, Clone, Copy)]
pub struct Denied;

#[async_trait]
impl Geolocator for Denied {
    async fn current_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<Coordinates, PositionError> {
        Err(PositionError::PermissionDenied(String::from(PERMISSION_DENIED_MESSAGE)))
    }
}

/// Asks `geolocator` for a position, giving up once `options.timeout` elapses even if the
/// provider never answers.
pub async fn locate(
    geolocator: &dyn Geolocator,
    options: &PositionOptions,
) -> Result<Coordinates, PositionError> {
    match tokio::time::timeout(options.timeout, geolocator.current_position(options)).await {
        Ok(result) => result,
        Err(_elapsed) => Err(PositionError::Timeout(String::from(TIMEOUT_MESSAGE))),
    }
}

#[async_trait]
impl<G: Geolocator + ?Sized> Geolocator for std::sync::Arc<G> {
    fn is_supported(&self) -> bool {
        (**self).is_supported()
    }

    async fn current_position(
        &self,
        options: &PositionOptions,
    ) -> Result<Coordinates, PositionError> {
        (**self).current_position(options).await
    }
}
