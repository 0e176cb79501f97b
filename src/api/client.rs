use crate::api::endpoints::{UPDATE_MAP_PATH, UPLOAD_PATH};
use crate::api::errors::ApiError;
use crate::api::requests::{MapUpdateRequest, UploadPayload};
use crate::api::responses::{MapUpdateResponse, UploadResult};
use crate::api::MapBackend;
use reqwest::Response;
use std::time::Duration;
use url::Url;

#[derive(Clone, Debug)]
pub struct HttpBackend {
    inner: reqwest::Client,
    base: Url,
}

impl HttpBackend {
    /// Every request is abandoned after `request_timeout`.
    pub fn new(base: Url, request_timeout: Duration) -> Result<Self, ApiError> {
        let inner = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()?;
        Ok(Self { inner, base })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base.join(path)?)
    }
}

impl MapBackend for HttpBackend {
    fn base_url(&self) -> &Url {
        &self.base
    }

    async fn update_map(
        &self,
        request: &MapUpdateRequest,
    ) -> Result<MapUpdateResponse, ApiError> {
        let url = self.endpoint(UPDATE_MAP_PATH)?;
        tracing::debug!(%url, action = %request.action, "Requesting map update.");

        let response = self.inner.post(url).json(request).send().await?;
        let text = successful_body(response).await?;

        Ok(serde_json::from_str(&text)?)
    }

    async fn upload(&self, payload: UploadPayload) -> Result<Option<UploadResult>, ApiError> {
        let url = self.endpoint(UPLOAD_PATH)?;
        tracing::debug!(
            %url,
            load_from_db = payload.loads_from_database(),
            num_vehicles = payload.num_vehicles(),
            "Uploading vehicle data.",
        );

        let response = self
            .inner
            .post(url)
            .multipart(payload.into_form())
            .send()
            .await?;
        let text = successful_body(response).await?;

        let body = serde_json::from_str(&text)?;
        Ok(UploadResult::from_body(body)?)
    }
}

async fn successful_body(response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let text = response.text().await?;
    if !status.is_success() {
        return Err(ApiError::Status { status, body: text });
    }
    Ok(text)
}
