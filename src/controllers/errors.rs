use crate::api::errors::ApiError;
use crate::geolocation::PositionError;
use http::StatusCode;
use thiserror::Error;

/// Why an interaction ended without its intended effect. By the time a handler returns one
/// of these, the user has already been notified (or the failure logged) and the page is
/// back in its idle state.
#[derive(Error, Debug)]
pub enum InteractionError {
    #[error("Geolocation is not available in this runtime")]
    CapabilityUnavailable,

    #[error("Could not determine the current location: {0}")]
    Location(#[from] PositionError),

    #[error("Request to the map server failed: {0}")]
    Network(#[from] ApiError),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Server rejected the upload ({status}): {body}")]
    ServerRejection { status: StatusCode, body: String },

    #[error("Server returned an empty result")]
    EmptyResult,

    #[error("A request from this control is still in flight")]
    Busy,

    #[error("The page has no `{0}` element")]
    Unbound(&'static str),
}
