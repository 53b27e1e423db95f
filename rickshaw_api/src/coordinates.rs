use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use rickshaw_dispatch::entry_map::EntryMap;
use rickshaw_dispatch::generator::{generate_passengers, generate_rides};
use rickshaw_dispatch::model::{Passenger, Ride};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CoordinatesRequest {
    pub passengers: u32,
    pub rides: u32,
}

#[derive(Serialize)]
pub struct CoordinatesResponse {
    pub passengers: EntryMap<Passenger>,
    pub ride_coordinates: EntryMap<Ride>,
}

pub async fn coordinates_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CoordinatesRequest>,
) -> Result<Json<CoordinatesResponse>, ApiError> {
    if body.passengers == 0 || body.rides == 0 {
        return Err(ApiError::BadRequest(
            "Both passengers and rides must be provided.".to_string(),
        ));
    }

    let mut rng = rand::rng();

    let passengers = generate_passengers(
        &mut rng,
        body.passengers as usize,
        &state.bounding_box,
        &state.highlight_color,
    );
    let ride_coordinates = generate_rides(
        &mut rng,
        body.rides as usize,
        &state.bounding_box,
        &state.highlight_color,
    );

    Ok(Json(CoordinatesResponse {
        passengers,
        ride_coordinates,
    }))
}
