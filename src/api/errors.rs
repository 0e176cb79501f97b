use http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Underlying request failed: {0}")]
    Request(#[from] reqwest::Error),

    // The body is whatever diagnostic text the server chose to send.
    #[error("Server responded with {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to parse JSON response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
}
