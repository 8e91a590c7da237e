pub mod feed;
pub mod geojson;
pub mod loader;
