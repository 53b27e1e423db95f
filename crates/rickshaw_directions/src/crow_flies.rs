use geo::{Distance, Haversine};
use geo_types::Point;
use serde_json::json;

use crate::provider::DirectionsProvider;
use crate::route_path::RoutePath;

/// Offline provider that answers with a straight-line route, for demo runs
/// and tests that must not reach the network.
pub struct CrowFliesDirections {
    pub speed_kmh: f64,
}

impl DirectionsProvider for CrowFliesDirections {
    async fn resolve_route(&self, start: Point, end: Point) -> RoutePath {
        let distance = Haversine.distance(start, end);
        let duration = distance / (self.speed_kmh / 3.6);

        RoutePath::resolved(json!({
            "code": "Ok",
            "routes": [{
                "distance": distance,
                "duration": duration,
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[start.x(), start.y()], [end.x(), end.y()]],
                },
            }],
        }))
    }
}

#[cfg(test)]
mod tests {
    use geo_types::Point;

    use super::CrowFliesDirections;
    use crate::provider::DirectionsProvider;

    #[tokio::test]
    async fn straight_line_route_connects_both_waypoints() {
        let provider = CrowFliesDirections { speed_kmh: 30.0 };

        let path = provider
            .resolve_route(Point::new(77.59, 12.97), Point::new(77.6, 13.0))
            .await;

        assert!(path.is_resolved());

        let coordinates = &path.document()["routes"][0]["geometry"]["coordinates"];
        assert_eq!(coordinates[0][0].as_f64(), Some(77.59));
        assert_eq!(coordinates[1][1].as_f64(), Some(13.0));

        let distance = path.document()["routes"][0]["distance"].as_f64().unwrap();
        let duration = path.document()["routes"][0]["duration"].as_f64().unwrap();

        // ~3.5 km at 30 km/h is a bit over 7 minutes
        assert!((3300.0..3700.0).contains(&distance));
        assert!((duration - distance / (30.0 / 3.6)).abs() < 1e-9);
    }
}
