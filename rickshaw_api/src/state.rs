use rickshaw_directions::mapbox::MapboxDirectionsClient;
use rickshaw_dispatch::engine::AssignmentEngine;
use rickshaw_dispatch::generator::BoundingBox;

use crate::usage::UsageTracker;

pub struct AppState {
    pub engine: AssignmentEngine<MapboxDirectionsClient>,
    pub bounding_box: BoundingBox,
    pub highlight_color: String,
    pub usage: UsageTracker,
}
