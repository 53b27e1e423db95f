pub mod engine;
pub mod entry_map;
pub mod error;
pub mod generator;
pub mod geopoint;
pub mod matching;
pub mod model;
