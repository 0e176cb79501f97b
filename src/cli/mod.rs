use crate::api::env::UMPIRE_BASE_URL;
use crate::geolocation::consts::{DEFAULT_JITTER, DEFAULT_TIMEOUT};
use crate::geolocation::jitter::valid_spread;
use crate::geolocation::{Coordinates, PositionOptions};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Drive the Umpire map and upload pages from the command line.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Root of the Umpire web application.
    #[arg(long, env = UMPIRE_BASE_URL)]
    #[arg(default_value = "http://127.0.0.1:5000/")]
    pub base_url: Url,
    /// Give up on any HTTP request after this many seconds.
    #[arg(long)]
    #[arg(default_value_t = 30)]
    pub request_timeout_secs: u64,
    /// Give up on the position lookup after this many milliseconds.
    #[arg(long)]
    #[arg(default_value_t = DEFAULT_TIMEOUT.as_millis() as u64)]
    pub geolocation_timeout_ms: u64,
    /// Report this latitude instead of a position near Accra.
    #[arg(long, requires = "lng", allow_negative_numbers = true)]
    pub lat: Option<f64>,
    /// Report this longitude instead of a position near Accra.
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lng: Option<f64>,
    /// Spread, in degrees, of the simulated position when no fixed one is given.
    #[arg(long, value_parser = parse_spread)]
    #[arg(default_value_t = DEFAULT_JITTER)]
    pub jitter: f64,
    /// Behave like a runtime without geolocation support.
    #[arg(long, conflicts_with_all = ["lat", "lng"])]
    pub no_geolocation: bool,
    /// Behave like a user who refuses to share their position.
    #[arg(long, conflicts_with_all = ["lat", "lng", "no_geolocation"])]
    pub deny_geolocation: bool,
    #[arg(short, long)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Press "Show Terminals" on the home page.
    ShowTerminals(MapOutput),
    /// Press "Show Stops" on the home page.
    ShowStops(MapOutput),
    /// Press "Show My Location" on the travel page.
    LocateMe(MapOutput),
    /// Submit a vehicle CSV through the upload form.
    Upload {
        #[arg(long)]
        file: PathBuf,
        #[arg(long)]
        vehicles: Option<String>,
    },
    /// Ask the server to pick vehicles from its database.
    UploadDb {
        #[arg(long)]
        vehicles: String,
    },
}

#[derive(Debug, Clone, clap::Args)]
pub struct MapOutput {
    /// Write the rendered map to this file instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

fn parse_spread(raw: &str) -> Result<f64, String> {
    let spread = raw.parse::<f64>().map_err(|error| format!("{error}: {raw}"))?;
    valid_spread(spread).map_err(|error| error.to_string())
}

impl Args {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn position_options(&self) -> PositionOptions {
        PositionOptions {
            timeout: Duration::from_millis(self.geolocation_timeout_ms),
            ..PositionOptions::default()
        }
    }

    pub fn fixed_position(&self) -> Option<Coordinates> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(Coordinates::new(lat, lng)),
            _ => None,
        }
    }
}
