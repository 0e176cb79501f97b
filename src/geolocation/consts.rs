use crate::geolocation::models::Coordinates;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);
pub const TIMEOUT_MESSAGE: &str = "Timeout expired";
pub const PERMISSION_DENIED_MESSAGE: &str = "User denied Geolocation";

pub const ACCRA: Coordinates = Coordinates {
    latitude: 5.6037,
    longitude: -0.1870,
};
// Degrees.
pub const DEFAULT_JITTER: f64 = 0.001;
