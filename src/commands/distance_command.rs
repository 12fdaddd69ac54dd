//! Distance and bearing command
//!
//! Reports the great-circle distance and initial bearing between two
//! coordinates.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::{required_coordinate, output_format};
use crate::coordinate::{Coordinate, CoordinateFormat};
use crate::errors::GeoResult;

/// Command measuring the path between two coordinates
pub struct DistanceCommand {
    /// Start of the path
    from: Coordinate,
    /// End of the path
    to: Coordinate,
    /// Notation for printed coordinates
    format: CoordinateFormat,
}

impl DistanceCommand {
    /// Create a new distance command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// A new DistanceCommand instance or an error
    pub fn new(args: &ArgMatches) -> GeoResult<Self> {
        Ok(DistanceCommand {
            from: required_coordinate(args, "from")?,
            to: required_coordinate(args, "to")?,
            format: output_format(args)?,
        })
    }

    pub fn from_coordinates(from: Coordinate, to: Coordinate, format: CoordinateFormat) -> Self {
        DistanceCommand { from, to, format }
    }
}

impl Command for DistanceCommand {
    fn run(&self) -> GeoResult<String> {
        info!("Measuring from {} to {}", self.from, self.to);

        let distance = self.from.distance_to(&self.to);
        let bearing = self.from.bearing_to(&self.to);

        let mut report = String::new();
        report.push_str(&format!("From:     {}\n", self.from.format(self.format)));
        report.push_str(&format!("To:       {}\n", self.to.format(self.format)));
        report.push_str(&format!("Distance: {:.3} km ({:.3} mi)\n", distance.kilometers(), distance.miles()));
        report.push_str(&format!("Bearing:  {:.3}°", bearing));

        Ok(report)
    }
}
