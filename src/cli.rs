use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::geo::GeoPoint;

/// Driving routes to the company's offices
#[derive(Parser, Debug)]
#[command(name = "officeroute", version, about, long_about = None)]
pub struct Cli {
    /// Config file [default: <config dir>/officeroute/config.toml]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Abort instead of continuing with no offices when the catalog is broken
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every office in the catalog
    Offices,

    /// Show the offices on the map, or zoom in on one
    Show {
        /// Position in the `offices` list
        index: Option<usize>,

        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Route to an office
    Route(RouteArgs),
}

#[derive(Args, Debug)]
pub struct RouteArgs {
    /// Destination office name
    #[arg(long)]
    pub to: String,

    /// Start from another office instead of the current position
    #[arg(long, conflicts_with_all = ["at", "fixed"])]
    pub from: Option<String>,

    /// Current position as LON,LAT
    #[arg(long, value_parser = parse_lon_lat, allow_hyphen_values = true)]
    pub at: Option<GeoPoint>,

    /// Always start from LON,LAT, ignoring the device position
    #[arg(
        long,
        value_parser = parse_lon_lat,
        allow_hyphen_values = true,
        conflicts_with = "at"
    )]
    pub fixed: Option<GeoPoint>,

    /// Keep running and re-render as the position updates, until Ctrl-C
    #[arg(long)]
    pub watch: bool,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Parse `LON,LAT`, the same order the directions API uses.
pub fn parse_lon_lat(value: &str) -> Result<GeoPoint, String> {
    let (lon, lat) = value
        .split_once(',')
        .ok_or_else(|| format!("expected LON,LAT, got '{}'", value))?;
    let lon: f64 = lon.trim().parse().map_err(|_| format!("invalid longitude '{}'", lon))?;
    let lat: f64 = lat.trim().parse().map_err(|_| format!("invalid latitude '{}'", lat))?;
    GeoPoint::new(lon, lat).map_err(|err| err.to_string())
}
