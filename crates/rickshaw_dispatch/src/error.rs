use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("coordinate out of range for '{key}': ({latitude}, {longitude})")]
    InvalidCoordinate {
        key: String,
        latitude: f64,
        longitude: f64,
    },
}
