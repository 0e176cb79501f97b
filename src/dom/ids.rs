// Home page.
pub const TERMINAL_BUTTON: &str = "left-menu-button-terminal";
pub const STOP_BUTTON: &str = "left-menu-button-stop";
pub const MAP_CONTAINER: &str = "map";

// Travel page.
pub const LOCATE_ME_BUTTON: &str = "locate-me";

// Optimize page.
pub const UPLOAD_FORM: &str = "uploadForm";
pub const DATABASE_UPLOAD_FORM: &str = "uploadForm-db";
pub const FILE_INPUT: &str = "file";
pub const UPLOAD_VEHICLES_INPUT: &str = "numVehicles-upload";
pub const DATABASE_VEHICLES_INPUT: &str = "numVehicles";
pub const UPLOAD_STATS: &str = "uploadStats";
