use std::time::Duration;

use anyhow::Context;
use jiff::SignedDuration;
use rickshaw_directions::mapbox::MAPBOX_DIRECTIONS_API_URL;
use rickshaw_dispatch::generator::BoundingBox;

/// Bangalore, the demo deployment region.
const DEFAULT_BOUNDING_BOX: BoundingBox = BoundingBox {
    min_lat: 12.834,
    max_lat: 13.139,
    min_lng: 77.528,
    max_lng: 77.728,
};

const DEFAULT_HIGHLIGHT_COLOR: &str = "#FFFF00";

pub struct ApiConfig {
    pub bind_addr: String,
    pub mapbox_base_url: String,
    pub mapbox_access_token: String,
    pub bounding_box: BoundingBox,
    pub highlight_color: String,
    pub route_timeout: Duration,
    pub rate_limit_ceiling: u32,
    pub rate_limit_window: SignedDuration,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let mapbox_access_token =
            std::env::var("MAPBOX_ACCESS_TOKEN").context("MAPBOX_ACCESS_TOKEN must be set")?;

        Ok(Self {
            bind_addr: env_or("RICKSHAW_BIND_ADDR", "127.0.0.1:8080"),
            mapbox_base_url: env_or("MAPBOX_DIRECTIONS_URL", MAPBOX_DIRECTIONS_API_URL),
            mapbox_access_token,
            bounding_box: BoundingBox {
                min_lat: env_f64("BBOX_MIN_LAT", DEFAULT_BOUNDING_BOX.min_lat)?,
                max_lat: env_f64("BBOX_MAX_LAT", DEFAULT_BOUNDING_BOX.max_lat)?,
                min_lng: env_f64("BBOX_MIN_LNG", DEFAULT_BOUNDING_BOX.min_lng)?,
                max_lng: env_f64("BBOX_MAX_LNG", DEFAULT_BOUNDING_BOX.max_lng)?,
            },
            highlight_color: env_or("HIGHLIGHT_COLOR", DEFAULT_HIGHLIGHT_COLOR),
            route_timeout: Duration::from_secs(env_u64("ROUTE_TIMEOUT_SECS", 5)?),
            rate_limit_ceiling: env_u64("RATE_LIMIT_CEILING", 1000)? as u32,
            rate_limit_window: SignedDuration::from_hours(
                env_u64("RATE_LIMIT_WINDOW_DAYS", 15)? as i64 * 24,
            ),
        })
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_f64(name: &str, default: f64) -> anyhow::Result<f64> {
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("{name} must be a number, got '{value}'")),
        Err(_) => Ok(default),
    }
}

fn env_u64(name: &str, default: u64) -> anyhow::Result<u64> {
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("{name} must be an integer, got '{value}'")),
        Err(_) => Ok(default),
    }
}
