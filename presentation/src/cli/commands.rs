//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use mobility_domain::{IllustrationProvider, RouteForm};
use std::path::PathBuf;

/// Output format for route results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Summary, time, cost and every step
    Full,
    /// Summary, time and cost only
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for mobility_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => mobility_domain::OutputFormat::Full,
            OutputFormat::Summary => mobility_domain::OutputFormat::Summary,
            OutputFormat::Json => mobility_domain::OutputFormat::Json,
        }
    }
}

/// Route visual override
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IllustrationArg {
    /// No visual
    None,
    /// Link to a live map for the two addresses
    MapWidget,
    /// Ask the image backend for a picture
    GeneratedImage,
}

impl From<IllustrationArg> for IllustrationProvider {
    fn from(arg: IllustrationArg) -> Self {
        match arg {
            IllustrationArg::None => IllustrationProvider::None,
            IllustrationArg::MapWidget => IllustrationProvider::MapWidget,
            IllustrationArg::GeneratedImage => IllustrationProvider::GeneratedImage,
        }
    }
}

/// CLI arguments for city-mobility
#[derive(Parser, Debug)]
#[command(name = "city-mobility")]
#[command(author, version, about = "Optimize urban routes and predict parking with a generative backend")]
#[command(long_about = r#"
city-mobility asks a generative backend for the best way across town.

A route request goes through three steps:
1. Validation: both locations need at least 3 characters
2. Reasoning: the backend returns route, travel time, cost and summary
3. Visual: an optional map link or generated image (best-effort)

Configuration files are loaded from (in priority order):
1. CITY_MOBILITY_* environment variables
2. --config <path>     Explicit config file
3. ./mobility.toml     Project-level config
4. ~/.config/city-mobility/config.toml   Global config

Example:
  city-mobility route "India Gate, New Delhi" "Qutub Minar, New Delhi"
  city-mobility route "Koramangala" "MG Road" --traffic heavy --transit "Purple Line"
  city-mobility parking "Connaught Place" --time 18:30
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (overrides config)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Route visual provider (overrides config)
    #[arg(long, value_enum, global = true)]
    pub illustration: Option<IllustrationArg>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find the optimal route between two locations
    Route(RouteArgs),
    /// Predict peak parking hours and alternatives for a location
    Parking(ParkingArgs),
}

#[derive(Args, Debug)]
pub struct RouteArgs {
    /// Where the journey starts
    pub start: String,

    /// Where the journey ends
    pub end: String,

    /// Current traffic conditions, e.g. "heavy on Ring Road"
    #[arg(long, value_name = "TEXT")]
    pub traffic: Option<String>,

    /// Available public transport, e.g. "Metro Yellow Line, DTC buses"
    #[arg(long, value_name = "TEXT")]
    pub transit: Option<String>,

    /// Available micro-mobility options, e.g. "Yulu bikes"
    #[arg(long, value_name = "TEXT")]
    pub micro_mobility: Option<String>,

    /// Departure time, e.g. "8:30 AM"
    #[arg(long, value_name = "TEXT")]
    pub departure: Option<String>,
}

impl RouteArgs {
    /// Raw form as typed; validation happens in the use case
    pub fn to_form(&self) -> RouteForm {
        RouteForm {
            start_location: self.start.clone(),
            end_location: self.end.clone(),
            current_traffic_conditions: self.traffic.clone(),
            available_public_transport: self.transit.clone(),
            available_micro_mobility: self.micro_mobility.clone(),
            departure_time: self.departure.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub struct ParkingArgs {
    /// Parking location
    pub location: String,

    /// Time of arrival (defaults to now)
    #[arg(long, value_name = "TIME")]
    pub time: Option<String>,
}
