//! Print a coordinate in every supported format
//!
//! ```sh
//! cargo run --example convert -- "33U 389912.653 5819696.850"
//! cargo run --example convert -- 60.0 3.0
//! RUST_LOG=geocoord=trace cargo run --example convert -- u33db2m3370m
//! ```

use geocoord::{Coordinate, CoordinateFormat};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn parse(args: &[String]) -> Result<Coordinate, String> {
    let coordinate = match args {
        [latitude, longitude] => {
            let latitude = latitude
                .parse()
                .map_err(|_| format!("Invalid latitude: {latitude}"))?;
            let longitude = longitude
                .parse()
                .map_err(|_| format!("Invalid longitude: {longitude}"))?;
            Coordinate::lat_lng(latitude, longitude)
        }
        [input] if input.contains(char::is_whitespace) => Coordinate::from_utm(input),
        [input] => Coordinate::geohash(input),
        _ => return Err("Usage: convert <latitude> <longitude> | <utm> | <geohash>".to_string()),
    };

    coordinate.map_err(|err| err.to_string())
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let coordinate = match parse(&args) {
        Ok(coordinate) => coordinate,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    info!(kind = %coordinate.kind(), "Parsed {coordinate}");

    for target in CoordinateFormat::ALL {
        match coordinate.format(target, None) {
            Ok(formatted) => println!("{:<32} {formatted}", target.name()),
            Err(err) => println!("{:<32} ({err})", target.name()),
        }
    }

    ExitCode::SUCCESS
}
