use std::path::PathBuf;

use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rickshaw_dispatch::entry_map::EntryMap;
use rickshaw_dispatch::generator::{BoundingBox, generate_passengers, generate_rides};
use rickshaw_dispatch::model::{Passenger, Ride};
use serde::{Deserialize, Serialize};

/// Bangalore, the demo deployment region.
const BANGALORE_BOUNDING_BOX: BoundingBox = BoundingBox {
    min_lat: 12.834,
    max_lat: 13.139,
    min_lng: 77.528,
    max_lng: 77.728,
};

const HIGHLIGHT_COLOR: &str = "#FFFF00";

#[derive(Args)]
pub struct GenerateArgs {
    /// Number of passengers to generate
    #[arg(short, long, default_value_t = 10)]
    passengers: usize,

    /// Number of rides to generate
    #[arg(short, long, default_value_t = 5)]
    rides: usize,

    /// Seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write the document to a file instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,
}

/// The document shape shared by `generate` output and `assign` input, the
/// same one the API serves from `/coordinates`.
#[derive(Serialize, Deserialize)]
pub struct DemoDocument {
    pub passengers: EntryMap<Passenger>,
    pub ride_coordinates: EntryMap<Ride>,
}

pub fn run(args: GenerateArgs) -> Result<(), anyhow::Error> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let document = DemoDocument {
        passengers: generate_passengers(
            &mut rng,
            args.passengers,
            &BANGALORE_BOUNDING_BOX,
            HIGHLIGHT_COLOR,
        ),
        ride_coordinates: generate_rides(
            &mut rng,
            args.rides,
            &BANGALORE_BOUNDING_BOX,
            HIGHLIGHT_COLOR,
        ),
    };

    let json = serde_json::to_string_pretty(&document)?;

    match args.out {
        Some(path) => std::fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
