use crate::entry_map::EntryMap;
use crate::geopoint::GeoPoint;
use crate::model::{Passenger, Ride};

/// Outcome of the greedy pairing pass. Indices refer to positions in the
/// input maps.
#[derive(Debug, PartialEq)]
pub struct GreedyPairs {
    /// `(ride index, passenger index)` in ride processing order.
    pub pairs: Vec<(usize, usize)>,
    pub idle_passengers: Vec<usize>,
    pub idle_rides: Vec<usize>,
}

/// Pairs each ride, in input order, with the nearest still-unmatched passenger
/// source. Equidistant passengers go to the one appearing first in the input.
///
/// This is a per-ride greedy heuristic, O(R x P) distance evaluations, not a
/// minimum-weight matching.
pub fn greedy_pairs(passengers: &EntryMap<Passenger>, rides: &EntryMap<Ride>) -> GreedyPairs {
    let sources: Vec<GeoPoint> = passengers.iter().map(|(_, p)| p.source).collect();
    let mut remaining: Vec<usize> = (0..sources.len()).collect();

    let mut pairs = Vec::with_capacity(rides.len().min(sources.len()));
    let mut idle_rides = Vec::new();

    for (ride_idx, (_, ride)) in rides.iter().enumerate() {
        // min_by keeps the first of equal elements, and `remaining` is in
        // input order, so ties resolve to the earliest passenger.
        let nearest = remaining
            .iter()
            .enumerate()
            .map(|(slot, &passenger_idx)| {
                let distance = ride.location.haversine_distance(&sources[passenger_idx]);
                (slot, passenger_idx, distance)
            })
            .min_by(|a, b| a.2.total_cmp(&b.2));

        match nearest {
            Some((slot, passenger_idx, _)) => {
                remaining.remove(slot);
                pairs.push((ride_idx, passenger_idx));
            }
            None => idle_rides.push(ride_idx),
        }
    }

    GreedyPairs {
        pairs,
        idle_passengers: remaining,
        idle_rides,
    }
}
