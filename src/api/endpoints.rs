use crate::api::errors::ApiError;
use crate::api::responses::UploadResult;
use url::Url;

pub const UPDATE_MAP_PATH: &str = "/update_map";
pub const UPLOAD_PATH: &str = "/upload";
pub const OPTIMIZE_PATH: &str = "/optimize";

/// Page the browser is sent to once an upload succeeds.
pub fn optimize_url(base: &Url, result: &UploadResult) -> Result<Url, ApiError> {
    let mut url = base.join(OPTIMIZE_PATH)?;
    url.query_pairs_mut()
        .clear()
        .append_pair("filename", &result.filename)
        .append_pair("numVehicles", &result.num_vehicles.to_string());
    Ok(url)
}
