//! Destination projection command

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::{output_format, required_coordinate, required_number};
use crate::coordinate::{Coordinate, CoordinateFormat};
use crate::errors::GeoResult;
use crate::measurement::Distance;

/// Command projecting a coordinate along a bearing
pub struct DestinationCommand {
    from: Coordinate,
    distance: Distance,
    bearing: f64,
    format: CoordinateFormat,
}

impl DestinationCommand {
    pub fn new(args: &ArgMatches) -> GeoResult<Self> {
        Ok(DestinationCommand {
            from: required_coordinate(args, "from")?,
            distance: Distance::from_kilometers(required_number(args, "distance")?),
            bearing: required_number(args, "bearing")?,
            format: output_format(args)?,
        })
    }

    pub fn from_parts(from: Coordinate, distance: Distance, bearing: f64, format: CoordinateFormat) -> Self {
        DestinationCommand { from, distance, bearing, format }
    }
}

impl Command for DestinationCommand {
    fn run(&self) -> GeoResult<String> {
        info!("Projecting {} by {} at bearing {}", self.from, self.distance, self.bearing);

        let destination = self.from.destination_at(self.distance, self.bearing)?;

        Ok(format!(
            "From:        {}\nDestination: {}",
            self.from.format(self.format),
            destination.format(self.format)
        ))
    }
}
