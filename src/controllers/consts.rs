pub const LOADING_LABEL: &str = "Loading...";
pub const SHOW_TERMINALS_LABEL: &str = "Show Terminals";
pub const SHOW_STOPS_LABEL: &str = "Show Stops";
pub const SHOW_MY_LOCATION_LABEL: &str = "Show My Location";

pub const GEOLOCATION_UNSUPPORTED: &str = "Geolocation is not supported by your browser";
pub const LOCATION_ERROR_PREFIX: &str = "Error getting your location: ";
pub const MAP_UPDATE_FAILED: &str = "Failed to update map";

pub const NO_FILE_SELECTED: &str = "Please select a CSV file to upload.";
pub const INVALID_VEHICLE_COUNT: &str = "Number of vehicles must be a whole number, got: ";
pub const UPLOAD_REJECTED: &str = "The server rejected the upload.";
pub const UPLOAD_FAILED: &str = "File upload failed.";
pub const UPLOAD_ERROR: &str = "An error occurred while uploading the file.";
