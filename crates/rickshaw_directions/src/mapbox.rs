use std::time::Duration;

use geo_types::Point;
use thiserror::Error;
use tracing::warn;

use crate::provider::DirectionsProvider;
use crate::route_path::RoutePath;

pub const MAPBOX_DIRECTIONS_API_URL: &str =
    "https://api.mapbox.com/directions/v5/mapbox/driving";

#[derive(Debug, Error)]
pub enum MapboxError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

pub struct MapboxDirectionsParams {
    pub base_url: String,
    pub access_token: String,
    /// Budget for a single resolution; a slow provider call counts as a
    /// failed one.
    pub timeout: Duration,
}

pub struct MapboxDirectionsClient {
    params: MapboxDirectionsParams,
    client: reqwest::Client,
}

impl MapboxDirectionsClient {
    pub fn new(params: MapboxDirectionsParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    fn route_url(&self, start: Point, end: Point) -> String {
        format!(
            "{}/{},{};{},{}",
            self.params.base_url,
            start.x(),
            start.y(),
            end.x(),
            end.y()
        )
    }

    pub async fn fetch_route(&self, start: Point, end: Point) -> Result<RoutePath, MapboxError> {
        let response = self
            .client
            .get(self.route_url(start, end))
            .query(&[
                ("overview", "full"),
                ("geometries", "geojson"),
                ("access_token", self.params.access_token.as_str()),
            ])
            .timeout(self.params.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(MapboxError::Api { status, message });
        }

        let document: serde_json::Value = response.json().await?;

        Ok(RoutePath::resolved(document))
    }
}

impl DirectionsProvider for MapboxDirectionsClient {
    async fn resolve_route(&self, start: Point, end: Point) -> RoutePath {
        match self.fetch_route(start, end).await {
            Ok(path) => path,
            Err(error) => {
                warn!("Error fetching directions: {}", error);
                RoutePath::unresolved()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use geo_types::Point;

    use super::{MAPBOX_DIRECTIONS_API_URL, MapboxDirectionsClient, MapboxDirectionsParams};

    fn client(base_url: &str) -> MapboxDirectionsClient {
        MapboxDirectionsClient::new(MapboxDirectionsParams {
            base_url: base_url.to_string(),
            access_token: "token".to_string(),
            timeout: Duration::from_secs(5),
        })
    }

    #[test]
    fn route_url_lists_waypoints_lng_first() {
        let client = client(MAPBOX_DIRECTIONS_API_URL);

        // x = longitude, y = latitude
        let start = Point::new(77.59, 12.97);
        let end = Point::new(77.6, 13.0);

        assert_eq!(
            client.route_url(start, end),
            format!("{MAPBOX_DIRECTIONS_API_URL}/77.59,12.97;77.6,13")
        );
    }

    #[tokio::test]
    async fn unreachable_provider_resolves_to_unresolved() {
        use crate::provider::DirectionsProvider;

        // Reserved TEST-NET-1 address, nothing listens there.
        let client = client("http://192.0.2.1:9/directions");

        let path = client
            .resolve_route(Point::new(77.59, 12.97), Point::new(77.6, 13.0))
            .await;

        assert!(!path.is_resolved());
    }
}
