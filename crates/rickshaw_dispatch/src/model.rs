use rickshaw_directions::route_path::RoutePath;
use serde::{Deserialize, Serialize};

use crate::geopoint::GeoPoint;

/// A pending pickup request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Passenger {
    pub source: GeoPoint,
    pub destination: GeoPoint,
    /// Presentation tag (`#RRGGBB`), carried through unchanged.
    pub color: String,
}

/// An available driver position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ride {
    #[serde(flatten)]
    pub location: GeoPoint,
    pub color: String,
}

/// One matched ride/passenger pair with both resolved legs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AssignedRoute {
    pub passenger: String,
    pub ride: String,
    pub route_color: String,
    /// Pickup leg: ride location to passenger source.
    pub ride_to_passenger_route: RoutePath,
    /// Trip leg: passenger source to destination.
    pub passenger_to_destination_route: RoutePath,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Assignment {
    pub assigned_routes: Vec<AssignedRoute>,
    pub idle_passengers: Vec<String>,
    pub idle_rides: Vec<String>,
}
