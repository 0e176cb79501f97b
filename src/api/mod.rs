use crate::api::errors::ApiError;
use crate::api::requests::{MapUpdateRequest, UploadPayload};
use crate::api::responses::{MapUpdateResponse, UploadResult};
use url::Url;

pub mod client;
pub mod endpoints;
pub mod env;
pub mod errors;
pub mod requests;
pub mod responses;

pub use client::HttpBackend;

/// The server endpoints the page controllers talk to.
pub trait MapBackend: Send + Sync {
    /// Root every navigation target is resolved against.
    fn base_url(&self) -> &Url;

    async fn update_map(&self, request: &MapUpdateRequest)
        -> Result<MapUpdateResponse, ApiError>;

    /// `Ok(None)` means the server answered successfully but with a falsy body.
    async fn upload(&self, payload: UploadPayload) -> Result<Option<UploadResult>, ApiError>;
}
