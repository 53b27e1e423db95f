use geo::{Distance, Haversine};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether the point lies in the valid WGS84 range.
    pub fn in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Great-circle surface distance to `other`, in meters.
    pub fn haversine_distance(&self, other: &GeoPoint) -> f64 {
        Haversine.distance(geo_types::Point::from(*self), geo_types::Point::from(*other))
    }
}

impl From<GeoPoint> for geo_types::Point {
    fn from(point: GeoPoint) -> Self {
        geo_types::Point::new(point.longitude, point.latitude)
    }
}

#[cfg(test)]
mod tests {
    use super::GeoPoint;

    #[test]
    fn distance_to_self_is_zero() {
        let point = GeoPoint::new(12.97, 77.59);

        assert_eq!(point.haversine_distance(&point), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = GeoPoint::new(12.97, 77.59);
        let b = GeoPoint::new(13.139, 77.728);

        assert_eq!(a.haversine_distance(&b), b.haversine_distance(&a));
    }

    #[test]
    fn distance_matches_known_reference() {
        let a = GeoPoint::new(12.97, 77.59);
        let b = GeoPoint::new(13.0, 77.6);

        // ~3507 m between these two Bangalore points
        let distance = a.haversine_distance(&b);
        assert!((distance - 3507.4).abs() < 5.0, "got {distance}");
    }

    #[test]
    fn range_check_rejects_out_of_bounds_coordinates() {
        assert!(GeoPoint::new(12.97, 77.59).in_range());
        assert!(GeoPoint::new(-90.0, 180.0).in_range());
        assert!(!GeoPoint::new(90.1, 77.59).in_range());
        assert!(!GeoPoint::new(12.97, -180.5).in_range());
    }
}
