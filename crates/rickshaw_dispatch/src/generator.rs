use rand::Rng;

use crate::entry_map::EntryMap;
use crate::geopoint::GeoPoint;
use crate::model::{Passenger, Ride};

/// Geographic region demo coordinates are drawn from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    pub fn contains(&self, point: &GeoPoint) -> bool {
        (self.min_lat..=self.max_lat).contains(&point.latitude)
            && (self.min_lng..=self.max_lng).contains(&point.longitude)
    }
}

fn random_point<R: Rng>(rng: &mut R, bbox: &BoundingBox) -> GeoPoint {
    GeoPoint::new(
        rng.random_range(bbox.min_lat..=bbox.max_lat),
        rng.random_range(bbox.min_lng..=bbox.max_lng),
    )
}

/// Random `#rrggbb` tag, re-drawn until it avoids every excluded color.
pub fn random_color<R: Rng>(rng: &mut R, exclude: &[&str]) -> String {
    loop {
        let color = format!("#{:06x}", rng.random_range(0..0x100_0000u32));
        if !exclude.iter().any(|excluded| excluded.eq_ignore_ascii_case(&color)) {
            return color;
        }
    }
}

/// Generates `passenger_1..n` with uniform sources and independently drawn
/// destinations inside the box. Colors avoid the reserved highlight color.
pub fn generate_passengers<R: Rng>(
    rng: &mut R,
    n: usize,
    bbox: &BoundingBox,
    highlight_color: &str,
) -> EntryMap<Passenger> {
    (1..=n)
        .map(|i| {
            let passenger = Passenger {
                source: random_point(rng, bbox),
                destination: random_point(rng, bbox),
                color: random_color(rng, &[highlight_color]),
            };
            (format!("passenger_{i}"), passenger)
        })
        .collect()
}

/// Generates `ride_1..n`. Every demo ride carries the reserved highlight
/// color so visualizations can style the fleet apart from passenger routes.
pub fn generate_rides<R: Rng>(
    rng: &mut R,
    n: usize,
    bbox: &BoundingBox,
    highlight_color: &str,
) -> EntryMap<Ride> {
    (1..=n)
        .map(|i| {
            let ride = Ride {
                location: random_point(rng, bbox),
                color: highlight_color.to_string(),
            };
            (format!("ride_{i}"), ride)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{BoundingBox, generate_passengers, generate_rides, random_color};

    const BBOX: BoundingBox = BoundingBox {
        min_lat: 12.834,
        max_lat: 13.139,
        min_lng: 77.528,
        max_lng: 77.728,
    };

    const HIGHLIGHT: &str = "#FFFF00";

    #[test]
    fn passengers_stay_inside_the_box_with_keyed_order() {
        let mut rng = StdRng::seed_from_u64(7);

        let passengers = generate_passengers(&mut rng, 25, &BBOX, HIGHLIGHT);

        assert_eq!(passengers.len(), 25);

        let keys: Vec<&str> = passengers.keys().collect();
        assert_eq!(keys[0], "passenger_1");
        assert_eq!(keys[24], "passenger_25");

        for (_, passenger) in passengers.iter() {
            assert!(BBOX.contains(&passenger.source));
            assert!(BBOX.contains(&passenger.destination));
            assert_ne!(passenger.source, passenger.destination);
        }
    }

    #[test]
    fn passenger_colors_avoid_the_highlight_color() {
        let mut rng = StdRng::seed_from_u64(11);

        let passengers = generate_passengers(&mut rng, 50, &BBOX, HIGHLIGHT);

        for (_, passenger) in passengers.iter() {
            assert_eq!(passenger.color.len(), 7);
            assert!(passenger.color.starts_with('#'));
            assert!(!passenger.color.eq_ignore_ascii_case(HIGHLIGHT));
        }
    }

    #[test]
    fn rides_carry_the_highlight_color() {
        let mut rng = StdRng::seed_from_u64(3);

        let rides = generate_rides(&mut rng, 10, &BBOX, HIGHLIGHT);

        assert_eq!(rides.len(), 10);
        for (_, ride) in rides.iter() {
            assert!(BBOX.contains(&ride.location));
            assert_eq!(ride.color, HIGHLIGHT);
        }
    }

    #[test]
    fn random_color_is_well_formed_hex() {
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..100 {
            let color = random_color(&mut rng, &[HIGHLIGHT]);
            assert_eq!(color.len(), 7);
            assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }
}
