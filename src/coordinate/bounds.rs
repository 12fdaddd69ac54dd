//! Latitude/longitude bounding rectangle

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use log::trace;

use super::constants::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
use super::point::{hash_bits, Coordinate};
use crate::errors::{GeoError, GeoResult};

/// An axis-aligned rectangle in latitude/longitude
///
/// `left > right` marks a rectangle that crosses the antimeridian. The
/// default value is the degenerate rectangle at the origin, which is a
/// real point and not an "unset" marker.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bounds {
    /// Northern edge latitude
    top: f64,
    /// Western edge longitude
    left: f64,
    /// Southern edge latitude
    bottom: f64,
    /// Eastern edge longitude
    right: f64,
}

impl Bounds {
    /// Create bounds from its four edges
    ///
    /// # Arguments
    /// * `bottom` - Southern latitude
    /// * `left` - Western longitude
    /// * `top` - Northern latitude, not below `bottom`
    /// * `right` - Eastern longitude, below `left` when crossing the antimeridian
    pub fn new(bottom: f64, left: f64, top: f64, right: f64) -> GeoResult<Self> {
        for latitude in [bottom, top] {
            if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
                return Err(GeoError::LatitudeOutOfRange(latitude));
            }
        }
        for longitude in [left, right] {
            if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
                return Err(GeoError::LongitudeOutOfRange(longitude));
            }
        }
        if top < bottom {
            return Err(GeoError::InvalidBounds { top, bottom });
        }

        Ok(Bounds { top, left, bottom, right })
    }

    /// Smallest bounds holding both corners
    pub fn from_corners(south_west: &Coordinate, north_east: &Coordinate) -> Self {
        Bounds::from_coordinates(&[*south_west, *north_east])
    }

    /// Min/max reduction over a set of coordinates
    ///
    /// Not antimeridian aware: a ring crossing the date line produces bounds
    /// spanning the rest of the globe. An empty slice gives the default bounds.
    pub fn from_coordinates(coordinates: &[Coordinate]) -> Self {
        let Some(first) = coordinates.first() else {
            return Bounds::default();
        };

        let mut bounds = Bounds {
            top: first.latitude(),
            left: first.longitude(),
            bottom: first.latitude(),
            right: first.longitude(),
        };
        for c in &coordinates[1..] {
            bounds.top = bounds.top.max(c.latitude());
            bounds.bottom = bounds.bottom.min(c.latitude());
            bounds.left = bounds.left.min(c.longitude());
            bounds.right = bounds.right.max(c.longitude());
        }
        bounds
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    /// True when the rectangle wraps through the ±180 meridian
    pub fn crosses_antimeridian(&self) -> bool {
        self.left > self.right
    }

    /// Check whether a coordinate lies strictly inside the bounds
    ///
    /// Points on an edge are not contained. Bounds with `left >= right` are
    /// read as crossing the antimeridian, which includes zero-width bounds
    /// (`left == right`): those contain every longitude except `left` itself.
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        let lat = coordinate.latitude();
        let lng = coordinate.longitude();
        let inside_latitude = lat < self.top && lat > self.bottom;

        if self.left < self.right {
            return inside_latitude && lng < self.right && lng > self.left;
        }

        // Crosses the date line
        inside_latitude && (lng < self.right || lng > self.left)
    }

    /// Grow the bounds to include a coordinate
    ///
    /// Does nothing when the coordinate is already inside. Otherwise the new
    /// rectangle is the min/max of the current corners and the coordinate,
    /// which does not grow across the antimeridian.
    ///
    /// Zero-width bounds count as crossing the antimeridian, so a point within
    /// their latitude range is already contained and leaves them unchanged.
    pub fn extend(&mut self, coordinate: &Coordinate) {
        if self.contains(coordinate) {
            return;
        }

        let corners = [self.north_east(), self.south_west(), *coordinate];
        *self = Bounds::from_coordinates(&corners);
        trace!("Extended bounds to {}", self.to_csv_string());
    }

    /// Grow the bounds to include the corners of another bounds
    pub fn extend_bounds(&mut self, other: &Bounds) {
        self.extend(&other.south_west());
        self.extend(&other.north_east());
    }

    /// Copy of these bounds extended by a coordinate
    pub fn extended(&self, coordinate: &Coordinate) -> Bounds {
        let mut bounds = *self;
        bounds.extend(coordinate);
        bounds
    }

    /// Copy of these bounds extended by another bounds
    ///
    /// Lets callers accumulate per thread and combine the partial results.
    pub fn merged(&self, other: &Bounds) -> Bounds {
        let mut bounds = *self;
        bounds.extend_bounds(other);
        bounds
    }

    /// Corner at (top, right)
    pub fn north_east(&self) -> Coordinate {
        Coordinate::from_valid(self.top, self.right)
    }

    /// Corner at (bottom, left)
    pub fn south_west(&self) -> Coordinate {
        Coordinate::from_valid(self.bottom, self.left)
    }

    /// `left,top,right,bottom`
    pub fn to_csv_string(&self) -> String {
        format!("{},{},{},{}", self.left, self.top, self.right, self.bottom)
    }
}

impl PartialEq for Bounds {
    fn eq(&self, other: &Self) -> bool {
        self.top == other.top
            && self.left == other.left
            && self.bottom == other.bottom
            && self.right == other.right
    }
}

// Edges are validated finite values.
impl Eq for Bounds {}

impl Hash for Bounds {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_bits(self.bottom).hash(state);
        hash_bits(self.left).hash(state);
        hash_bits(self.top).hash(state);
        hash_bits(self.right).hash(state);
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_csv_string())
    }
}

impl FromStr for Bounds {
    type Err = GeoError;

    /// Parse `left,top,right,bottom`, the layout written by `to_csv_string`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 4 {
            return Err(GeoError::MalformedInput(
                "Bounds must have 4 comma-separated values".to_string()));
        }

        let mut values = [0.0; 4];
        for (value, part) in values.iter_mut().zip(&parts) {
            *value = part.trim().parse::<f64>()
                .map_err(|_| GeoError::MalformedInput(format!("Invalid bounds value: {}", part)))?;
        }
        let [left, top, right, bottom] = values;

        Bounds::new(bottom, left, top, right)
    }
}
