use crate::dom::SelectedFile;
use crate::geolocation::Coordinates;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Selects which server-side rendering branch produces the map.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    ShowTerminals,
    ShowStops,
    MyLocation,
    ShowRoutes,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::ShowTerminals => "show_terminals",
            Action::ShowStops => "show_stops",
            Action::MyLocation => "my_location",
            Action::ShowRoutes => "show_routes",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapUpdateRequest {
    pub lat: f64,
    pub lng: f64,
    pub action: Action,
}

impl MapUpdateRequest {
    pub fn new(position: Coordinates, action: Action) -> Self {
        Self {
            lat: position.latitude,
            lng: position.longitude,
            action,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UploadPayload {
    File {
        file: SelectedFile,
        num_vehicles: u32,
    },
    Database {
        num_vehicles: u32,
    },
}

impl UploadPayload {
    pub fn num_vehicles(&self) -> u32 {
        match self {
            UploadPayload::File { num_vehicles, .. } | UploadPayload::Database { num_vehicles } => {
                *num_vehicles
            }
        }
    }

    pub fn loads_from_database(&self) -> bool {
        matches!(self, UploadPayload::Database { .. })
    }

    /// Multipart body with the `file`, `loadFromDB` and `numVehicles` fields.
    pub fn into_form(self) -> Form {
        let load_from_db = self.loads_from_database().to_string();
        let num_vehicles = self.num_vehicles().to_string();
        let form = match self {
            UploadPayload::File { file, .. } => {
                Form::new().part("file", Part::bytes(file.bytes).file_name(file.name))
            }
            UploadPayload::Database { .. } => Form::new(),
        };
        form.text("loadFromDB", load_from_db)
            .text("numVehicles", num_vehicles)
    }
}
