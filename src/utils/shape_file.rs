//! Shape definition files
//!
//! Shapes are described in TOML as an array of `[[shape]]` tables:
//!
//! ```toml
//! [[shape]]
//! name = "depot"
//! type = "circle"
//! center = [-25.824906, 28.259757]
//! radius_m = 500
//!
//! [[shape]]
//! type = "polygon"
//! vertices = "0,0,10,0,10,10,0,10,0,0"
//! ```
//!
//! `vertices` uses the `lng,lat,lng,lat,...` encoding. Lines take an optional
//! `tolerance_m`; rectangles take `bottom`, `left`, `top` and `right`.

use std::fs;
use std::str::FromStr;

use log::{debug, info};

use crate::coordinate::{Coordinate, CoordinateList};
use crate::errors::{GeoError, GeoResult};
use crate::measurement::Distance;
use crate::shapes::{Circle, Line, Polygon, Rectangle, ShapeKind};

/// A shape read from a definition file, with its optional name
#[derive(Debug, Clone, PartialEq)]
pub struct NamedShape {
    pub name: Option<String>,
    pub shape: ShapeKind,
}

impl NamedShape {
    /// Name from the file, or the shape type and its position
    pub fn label(&self, index: usize) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("{} #{}", self.shape.name(), index),
        }
    }
}

/// Parsed contents of a shape definition file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeFile {
    pub shapes: Vec<NamedShape>,
}

impl FromStr for ShapeFile {
    type Err = GeoError;

    /// Parse shape definitions from a TOML string
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let toml_value: toml::Value = content
            .parse()
            .map_err(|e| GeoError::MalformedInput(format!("Failed to parse TOML: {}", e)))?;

        let entries: &[toml::Value] = match toml_value.get("shape") {
            Some(value) => value
                .as_array()
                .ok_or_else(|| GeoError::MalformedInput("'shape' must be an array of tables".to_string()))?
                .as_slice(),
            None => &[],
        };

        let mut shapes = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let shape = Self::parse_shape(entry)
                .map_err(|e| GeoError::MalformedInput(format!("shape #{}: {}", index, e)))?;
            shapes.push(shape);
        }

        debug!("Parsed {} shape definitions", shapes.len());
        Ok(ShapeFile { shapes })
    }
}

impl ShapeFile {
    /// Load shape definitions from a TOML file
    pub fn from_file(path: &str) -> GeoResult<Self> {
        let contents = fs::read_to_string(path)?;
        let file: ShapeFile = contents.parse()?;
        info!("Loaded {} shapes from {}", file.shapes.len(), path);
        Ok(file)
    }

    fn parse_shape(entry: &toml::Value) -> GeoResult<NamedShape> {
        let table = entry
            .as_table()
            .ok_or_else(|| GeoError::MalformedInput("expected a table".to_string()))?;

        let kind = table
            .get("type")
            .and_then(|v| v.as_str())
            .ok_or_else(|| GeoError::MalformedInput("missing 'type'".to_string()))?;
        let name = table.get("name").and_then(|v| v.as_str()).map(str::to_string);

        let shape = match kind.to_lowercase().as_str() {
            "circle" => {
                let center = Self::get_center(entry)?;
                let radius = Distance::from_meters(Self::get_number(entry, "radius_m")?);
                ShapeKind::Circle(Circle::new(center, radius))
            },
            "line" => {
                let vertices = Self::get_vertices(entry)?;
                let tolerance = match table.get("tolerance_m") {
                    Some(_) => Distance::from_meters(Self::get_number(entry, "tolerance_m")?),
                    None => Distance::zero(),
                };
                ShapeKind::Line(Line::new(vertices, tolerance))
            },
            "polygon" => ShapeKind::Polygon(Polygon::new(Self::get_vertices(entry)?)),
            "rectangle" => ShapeKind::Rectangle(Rectangle::new(
                Self::get_number(entry, "bottom")?,
                Self::get_number(entry, "left")?,
                Self::get_number(entry, "top")?,
                Self::get_number(entry, "right")?,
            )?),
            other => return Err(GeoError::MalformedInput(format!("unknown shape type '{}'", other))),
        };

        Ok(NamedShape { name, shape })
    }

    /// Read a number, accepting TOML integers as well as floats
    fn get_number(entry: &toml::Value, key: &str) -> GeoResult<f64> {
        match entry.get(key) {
            Some(toml::Value::Float(v)) => Ok(*v),
            Some(toml::Value::Integer(v)) => Ok(*v as f64),
            Some(_) => Err(GeoError::MalformedInput(format!("'{}' must be a number", key))),
            None => Err(GeoError::MalformedInput(format!("missing '{}'", key))),
        }
    }

    fn get_center(entry: &toml::Value) -> GeoResult<Coordinate> {
        let values = entry
            .get("center")
            .and_then(|v| v.as_array())
            .ok_or_else(|| GeoError::MalformedInput("'center' must be [latitude, longitude]".to_string()))?;

        let numbers: Vec<f64> = values
            .iter()
            .filter_map(|v| v.as_float().or_else(|| v.as_integer().map(|i| i as f64)))
            .collect();
        match numbers.as_slice() {
            [latitude, longitude] if values.len() == 2 => Coordinate::new(*latitude, *longitude),
            _ => Err(GeoError::MalformedInput("'center' must be [latitude, longitude]".to_string())),
        }
    }

    fn get_vertices(entry: &toml::Value) -> GeoResult<CoordinateList> {
        let vertices = entry
            .get("vertices")
            .and_then(|v| v.as_str())
            .ok_or_else(|| GeoError::MalformedInput("missing 'vertices' string".to_string()))?;
        CoordinateList::from_lng_lat_str(vertices)
    }
}
