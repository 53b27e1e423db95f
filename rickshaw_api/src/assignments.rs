use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use rickshaw_dispatch::entry_map::EntryMap;
use rickshaw_dispatch::model::{Assignment, Passenger, Ride};
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AssignmentsRequest {
    pub passengers: EntryMap<Passenger>,
    pub ride_coordinates: EntryMap<Ride>,
}

/// Runs one assignment batch. Empty collections are a valid no-match input;
/// malformed or out-of-range coordinates are rejected before matching.
pub async fn assignments_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AssignmentsRequest>,
) -> Result<Json<Assignment>, ApiError> {
    let assignment = state
        .engine
        .assign(&body.passengers, &body.ride_coordinates)
        .await?;

    Ok(Json(assignment))
}
