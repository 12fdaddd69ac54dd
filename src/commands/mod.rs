//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod destination_command;
pub mod distance_command;
pub mod shapes_command;

pub use command_traits::{Command, CommandFactory};
pub use destination_command::DestinationCommand;
pub use distance_command::DistanceCommand;
pub use shapes_command::ShapesCommand;

use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand};
use crate::coordinate::{Coordinate, CoordinateFormat};
use crate::errors::{GeoError, GeoResult};
use crate::utils::parse_utils;

/// Command-line definition shared by the binary and the tests
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("geospatial")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Distances, bearings and shape measurements on a spherical earth")
        .arg(
            Arg::new("from")
                .long("from")
                .help("Start coordinate as 'lat,lng'")
                .value_name("LAT,LNG")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .help("End coordinate as 'lat,lng'")
                .value_name("LAT,LNG")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("distance")
                .long("distance")
                .help("Distance to travel from --from, in kilometers")
                .value_name("KM")
                .requires("bearing")
                .required(false),
        )
        .arg(
            Arg::new("bearing")
                .long("bearing")
                .help("Initial bearing in degrees clockwise from north")
                .value_name("DEGREES")
                .requires("distance")
                .required(false),
        )
        .arg(
            Arg::new("shapes")
                .long("shapes")
                .help("TOML file with [[shape]] definitions")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("point")
                .long("point")
                .help("Coordinate to test against every shape, as 'lat,lng'")
                .value_name("LAT,LNG")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Coordinate notation for output (decimal, dms, ddm)")
                .value_name("FORMAT")
                .default_value("decimal")
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log records to this file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
}

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct GeospatialCommandFactory;

impl GeospatialCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        GeospatialCommandFactory
    }
}

impl Default for GeospatialCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandFactory for GeospatialCommandFactory {
    fn create_command(&self, args: &ArgMatches) -> GeoResult<Box<dyn Command>> {
        if args.contains_id("shapes") {
            Ok(Box::new(ShapesCommand::new(args)?))
        } else if args.contains_id("bearing") || args.contains_id("distance") {
            Ok(Box::new(DestinationCommand::new(args)?))
        } else if args.contains_id("to") {
            Ok(Box::new(DistanceCommand::new(args)?))
        } else {
            Err(GeoError::GenericError(
                "Nothing to do. Use --to, --distance/--bearing or --shapes".to_string()))
        }
    }
}

/// Read a `lat,lng` argument
pub(crate) fn required_coordinate(args: &ArgMatches, name: &str) -> GeoResult<Coordinate> {
    args.get_one::<String>(name)
        .ok_or_else(|| GeoError::GenericError(format!("Missing --{}", name)))?
        .parse::<Coordinate>()
}

/// Read a numeric argument
pub(crate) fn required_number(args: &ArgMatches, name: &str) -> GeoResult<f64> {
    let value = args.get_one::<String>(name)
        .ok_or_else(|| GeoError::GenericError(format!("Missing --{}", name)))?;
    parse_utils::parse_number(value)
}

/// Read the `--format` argument, defaulting to decimal degrees
pub(crate) fn output_format(args: &ArgMatches) -> GeoResult<CoordinateFormat> {
    match args.get_one::<String>("format") {
        Some(format) => format.parse(),
        None => Ok(CoordinateFormat::default()),
    }
}
