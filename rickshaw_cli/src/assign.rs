use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use rickshaw_directions::crow_flies::CrowFliesDirections;
use rickshaw_directions::mapbox::{
    MAPBOX_DIRECTIONS_API_URL, MapboxDirectionsClient, MapboxDirectionsParams,
};
use rickshaw_dispatch::engine::AssignmentEngine;
use tracing::info;

use crate::generate::DemoDocument;

#[derive(Args)]
pub struct AssignArgs {
    /// Demo document produced by `generate`
    #[arg(short, long)]
    input: PathBuf,

    /// Resolve routes as straight lines instead of calling Mapbox
    #[arg(long)]
    offline: bool,

    /// Assumed driving speed for offline route durations
    #[arg(long, default_value_t = 30.0)]
    speed_kmh: f64,
}

pub async fn run(args: AssignArgs) -> Result<(), anyhow::Error> {
    let raw = std::fs::read_to_string(&args.input)?;
    let document: DemoDocument = serde_json::from_str(&raw)?;

    info!(
        "assigning {} rides to {} passengers",
        document.ride_coordinates.len(),
        document.passengers.len()
    );

    let assignment = if args.offline {
        let engine = AssignmentEngine::new(CrowFliesDirections {
            speed_kmh: args.speed_kmh,
        });
        engine
            .assign(&document.passengers, &document.ride_coordinates)
            .await?
    } else {
        let access_token = std::env::var("MAPBOX_ACCESS_TOKEN")
            .map_err(|_| anyhow::anyhow!("MAPBOX_ACCESS_TOKEN must be set (or pass --offline)"))?;

        let engine = AssignmentEngine::new(MapboxDirectionsClient::new(MapboxDirectionsParams {
            base_url: MAPBOX_DIRECTIONS_API_URL.to_string(),
            access_token,
            timeout: Duration::from_secs(5),
        }));
        engine
            .assign(&document.passengers, &document.ride_coordinates)
            .await?
    };

    println!("{}", serde_json::to_string_pretty(&assignment)?);

    Ok(())
}
