use futures::future;
use rickshaw_directions::provider::DirectionsProvider;
use tracing::info;

use crate::entry_map::EntryMap;
use crate::error::DispatchError;
use crate::geopoint::GeoPoint;
use crate::matching::greedy_pairs;
use crate::model::{AssignedRoute, Assignment, Passenger, Ride};

/// Matches rides to passengers and resolves a driving route for each leg of
/// every match.
///
/// The engine holds no state between batches; each call works on its own
/// inputs, so one instance can serve concurrent batches.
pub struct AssignmentEngine<R> {
    resolver: R,
}

impl<R: DirectionsProvider> AssignmentEngine<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Runs one assignment batch.
    ///
    /// Coordinates are validated up front; an out-of-range entry rejects the
    /// whole batch before any matching happens. Route resolution failures do
    /// not: they surface as unresolved paths on the affected legs.
    pub async fn assign(
        &self,
        passengers: &EntryMap<Passenger>,
        rides: &EntryMap<Ride>,
    ) -> Result<Assignment, DispatchError> {
        validate(passengers, rides)?;

        let passenger_entries: Vec<(&str, &Passenger)> = passengers.iter().collect();
        let ride_entries: Vec<(&str, &Ride)> = rides.iter().collect();

        let outcome = greedy_pairs(passengers, rides);

        info!(
            "matched {} pairs, {} idle passengers, {} idle rides",
            outcome.pairs.len(),
            outcome.idle_passengers.len(),
            outcome.idle_rides.len()
        );

        // Legs are independent, both within a pair and across pairs.
        let resolved = future::join_all(outcome.pairs.iter().map(
            |&(ride_idx, passenger_idx)| {
                let (_, ride) = ride_entries[ride_idx];
                let (_, passenger) = passenger_entries[passenger_idx];

                let pickup = self
                    .resolver
                    .resolve_route(ride.location.into(), passenger.source.into());
                let trip = self
                    .resolver
                    .resolve_route(passenger.source.into(), passenger.destination.into());

                future::join(pickup, trip)
            },
        ))
        .await;

        let assigned_routes = outcome
            .pairs
            .iter()
            .zip(resolved)
            .map(|(&(ride_idx, passenger_idx), (pickup, trip))| {
                let (ride_key, _) = ride_entries[ride_idx];
                let (passenger_key, passenger) = passenger_entries[passenger_idx];

                AssignedRoute {
                    passenger: passenger_key.to_string(),
                    ride: ride_key.to_string(),
                    route_color: passenger.color.clone(),
                    ride_to_passenger_route: pickup,
                    passenger_to_destination_route: trip,
                }
            })
            .collect();

        Ok(Assignment {
            assigned_routes,
            idle_passengers: outcome
                .idle_passengers
                .iter()
                .map(|&idx| passenger_entries[idx].0.to_string())
                .collect(),
            idle_rides: outcome
                .idle_rides
                .iter()
                .map(|&idx| ride_entries[idx].0.to_string())
                .collect(),
        })
    }
}

fn validate(passengers: &EntryMap<Passenger>, rides: &EntryMap<Ride>) -> Result<(), DispatchError> {
    for (key, passenger) in passengers.iter() {
        check_point(key, &passenger.source)?;
        check_point(key, &passenger.destination)?;
    }
    for (key, ride) in rides.iter() {
        check_point(key, &ride.location)?;
    }
    Ok(())
}

fn check_point(key: &str, point: &GeoPoint) -> Result<(), DispatchError> {
    if point.in_range() {
        Ok(())
    } else {
        Err(DispatchError::InvalidCoordinate {
            key: key.to_string(),
            latitude: point.latitude,
            longitude: point.longitude,
        })
    }
}

#[cfg(test)]
mod tests {
    use geo_types::Point;
    use rickshaw_directions::provider::DirectionsProvider;
    use rickshaw_directions::route_path::RoutePath;
    use serde_json::json;

    use super::AssignmentEngine;
    use crate::entry_map::EntryMap;
    use crate::error::DispatchError;
    use crate::geopoint::GeoPoint;
    use crate::model::{Passenger, Ride};

    /// Simulates an unreachable provider.
    struct FailingDirections;

    impl DirectionsProvider for FailingDirections {
        async fn resolve_route(&self, _start: Point, _end: Point) -> RoutePath {
            RoutePath::unresolved()
        }
    }

    /// Echoes the requested waypoints back as the route document.
    struct EchoDirections;

    impl DirectionsProvider for EchoDirections {
        async fn resolve_route(&self, start: Point, end: Point) -> RoutePath {
            RoutePath::resolved(json!({
                "start": [start.x(), start.y()],
                "end": [end.x(), end.y()],
            }))
        }
    }

    fn passenger(latitude: f64, longitude: f64, color: &str) -> Passenger {
        Passenger {
            source: GeoPoint::new(latitude, longitude),
            destination: GeoPoint::new(latitude + 0.05, longitude + 0.05),
            color: color.to_string(),
        }
    }

    fn ride(latitude: f64, longitude: f64) -> Ride {
        Ride {
            location: GeoPoint::new(latitude, longitude),
            color: "#ffff00".to_string(),
        }
    }

    fn entry_map<T>(entries: Vec<(&str, T)>) -> EntryMap<T> {
        entries
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect()
    }

    #[tokio::test]
    async fn failing_resolver_still_yields_fully_shaped_routes() {
        let engine = AssignmentEngine::new(FailingDirections);

        let passengers = entry_map(vec![
            ("p1", passenger(12.9, 77.6, "#112233")),
            ("p2", passenger(13.0, 77.7, "#445566")),
            ("p3", passenger(12.85, 77.55, "#778899")),
        ]);
        let rides = entry_map(vec![("r1", ride(12.9, 77.61)), ("r2", ride(13.0, 77.71))]);

        let assignment = engine.assign(&passengers, &rides).await.unwrap();

        assert_eq!(assignment.assigned_routes.len(), 2);
        assert_eq!(assignment.idle_passengers, vec!["p3"]);
        assert!(assignment.idle_rides.is_empty());

        for route in &assignment.assigned_routes {
            assert!(!route.ride_to_passenger_route.is_resolved());
            assert!(!route.passenger_to_destination_route.is_resolved());
        }
    }

    #[tokio::test]
    async fn routes_carry_the_expected_legs_and_colors() {
        let engine = AssignmentEngine::new(EchoDirections);

        let p1 = Passenger {
            source: GeoPoint::new(12.9, 77.6),
            destination: GeoPoint::new(13.0, 77.7),
            color: "#112233".to_string(),
        };
        let passengers = entry_map(vec![("p1", p1)]);
        let rides = entry_map(vec![("r1", ride(12.91, 77.61))]);

        let assignment = engine.assign(&passengers, &rides).await.unwrap();

        let route = &assignment.assigned_routes[0];
        assert_eq!(route.passenger, "p1");
        assert_eq!(route.ride, "r1");
        assert_eq!(route.route_color, "#112233");

        // Pickup leg starts at the ride, trip leg starts at the source.
        let pickup = route.ride_to_passenger_route.document();
        assert_eq!(pickup["start"], json!([77.61, 12.91]));
        assert_eq!(pickup["end"], json!([77.6, 12.9]));

        let trip = route.passenger_to_destination_route.document();
        assert_eq!(trip["start"], json!([77.6, 12.9]));
        assert_eq!(trip["end"], json!([77.7, 13.0]));
    }

    #[tokio::test]
    async fn empty_inputs_produce_an_empty_no_match_result() {
        let engine = AssignmentEngine::new(FailingDirections);

        let passengers = entry_map(vec![("p1", passenger(12.9, 77.6, "#112233"))]);
        let assignment = engine.assign(&passengers, &EntryMap::new()).await.unwrap();

        assert!(assignment.assigned_routes.is_empty());
        assert!(assignment.idle_rides.is_empty());
        assert_eq!(assignment.idle_passengers, vec!["p1"]);
    }

    #[tokio::test]
    async fn out_of_range_coordinates_reject_the_batch() {
        let engine = AssignmentEngine::new(FailingDirections);

        let passengers = entry_map(vec![("p1", passenger(95.0, 77.6, "#112233"))]);
        let rides = entry_map(vec![("r1", ride(12.9, 77.61))]);

        let result = engine.assign(&passengers, &rides).await;

        assert!(matches!(
            result,
            Err(DispatchError::InvalidCoordinate { .. })
        ));
    }
}
