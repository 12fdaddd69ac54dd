//! Shape measurement command
//!
//! This module implements the command that loads a shape definition file
//! and reports bounds, length, area and optional point containment for each
//! shape.

use clap::ArgMatches;
use log::{debug, info, warn};

use crate::commands::command_traits::Command;
use crate::coordinate::Coordinate;
use crate::errors::{GeoError, GeoResult};
use crate::shapes::Shape;
use crate::utils::shape_file::{NamedShape, ShapeFile};

/// Command for measuring the shapes in a definition file
pub struct ShapesCommand {
    /// Loaded shape definitions
    shapes: ShapeFile,
    /// Coordinate to test for containment
    point: Option<Coordinate>,
    /// Whether to include inner bounds
    verbose: bool,
}

impl ShapesCommand {
    /// Create a new shapes command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// A new ShapesCommand instance or an error
    pub fn new(args: &ArgMatches) -> GeoResult<Self> {
        let path = args.get_one::<String>("shapes")
            .ok_or_else(|| GeoError::GenericError("Missing shape file".to_string()))?;

        let point = match args.get_one::<String>("point") {
            Some(p) => Some(p.parse::<Coordinate>()?),
            None => None,
        };

        Ok(ShapesCommand {
            shapes: ShapeFile::from_file(path)?,
            point,
            verbose: args.get_flag("verbose"),
        })
    }

    pub fn from_shape_file(shapes: ShapeFile, point: Option<Coordinate>, verbose: bool) -> Self {
        ShapesCommand { shapes, point, verbose }
    }

    /// Report lines for a single shape
    fn describe(&self, index: usize, named: &NamedShape) -> String {
        let shape = &named.shape;
        let mut report = format!("{} ({})\n", named.label(index), shape.name());

        report.push_str(&format!("  Outer bounds: {}\n", display_result(shape.outer_bounds())));
        if self.verbose {
            report.push_str(&format!("  Inner bounds: {}\n", display_result(shape.inner_bounds())));
        }
        report.push_str(&format!("  Length: {}\n", display_result(shape.length())));
        report.push_str(&format!("  Area: {}\n", display_result(shape.area())));

        if let Some(point) = &self.point {
            let contains = shape.contains(point);
            debug!("{} contains {}: {}", named.label(index), point, contains);
            report.push_str(&format!("  Contains {}: {}\n", point, if contains { "yes" } else { "no" }));
        }

        report
    }
}

/// Value text, or the reason it could not be computed
fn display_result<T: std::fmt::Display>(result: GeoResult<T>) -> String {
    match result {
        Ok(value) => value.to_string(),
        Err(GeoError::NotSupported(what)) => format!("n/a ({} is not supported)", what),
        Err(e) => {
            warn!("Shape measurement failed: {}", e);
            format!("error: {}", e)
        },
    }
}

impl Command for ShapesCommand {
    fn run(&self) -> GeoResult<String> {
        info!("Measuring {} shapes", self.shapes.shapes.len());

        if self.shapes.shapes.is_empty() {
            return Err(GeoError::EmptyInput("the shape file defines no shapes"));
        }

        let report: Vec<String> = self.shapes.shapes.iter()
            .enumerate()
            .map(|(i, named)| self.describe(i, named))
            .collect();

        Ok(report.join("\n").trim_end().to_string())
    }
}
