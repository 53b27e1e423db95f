use std::future::Future;

use geo_types::Point;

use crate::route_path::RoutePath;

/// A driving-directions backend.
///
/// Implementations are fail soft: transport or decoding failures are logged
/// and surface as [`RoutePath::unresolved`], never as an error, so a degraded
/// batch is always preferred over an aborted one. Points are
/// `x = longitude, y = latitude`.
pub trait DirectionsProvider {
    fn resolve_route(&self, start: Point, end: Point) -> impl Future<Output = RoutePath> + Send;
}
