pub mod consts;
pub mod errors;
pub mod location_actions;
pub mod map_refresh;
pub mod my_location;
pub mod upload;
#[cfg(test)]
mod tests;

pub use location_actions::LocationActionController;
pub use map_refresh::MapRefreshed;
pub use my_location::MyLocationController;
pub use upload::UploadController;
