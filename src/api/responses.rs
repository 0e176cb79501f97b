use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Server-rendered map markup. It is inserted into the page verbatim: the map server is
/// part of the same deployment and is trusted to produce safe HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MapHtml(String);

impl MapHtml {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapUpdateResponse {
    pub map_html: MapHtml,
    #[serde(default)]
    pub user_lat: Option<f64>,
    #[serde(default)]
    pub user_lng: Option<f64>,
    #[serde(default)]
    pub user_action: Option<String>,
    #[serde(default)]
    pub terminals: Vec<TerminalMarker>,
    #[serde(default)]
    pub stops: Vec<StopMarker>,
}

#[cfg(test)]
impl MapUpdateResponse {
    pub fn with_html(html: impl Into<String>) -> Self {
        Self {
            map_html: MapHtml(html.into()),
            user_lat: None,
            user_lng: None,
            user_action: None,
            terminals: Vec::new(),
            stops: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminalMarker {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopMarker {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    pub filename: String,
    pub num_vehicles: i64,
}

impl UploadResult {
    /// Reads a successful `/upload` body. Falsy bodies (`null`, `false`, `0`, `""`) and
    /// objects without a usable `filename` yield `None`.
    pub fn from_body(body: Value) -> Result<Option<Self>, serde_json::Error> {
        let falsy = match &body {
            Value::Null | Value::Bool(false) => true,
            Value::Number(number) => number.as_f64() == Some(0.0),
            Value::String(text) => text.is_empty(),
            Value::Object(fields) => matches!(fields.get("filename"), None | Some(Value::Null)),
            Value::Bool(true) | Value::Array(_) => false,
        };
        if falsy {
            return Ok(None);
        }
        serde_json::from_value(body).map(Some)
    }
}
