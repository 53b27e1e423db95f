pub mod crow_flies;
pub mod mapbox;
pub mod provider;
pub mod route_path;
