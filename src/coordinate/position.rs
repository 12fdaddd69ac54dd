//! Coordinate paired with a postal address

use std::fmt;
use std::hash::{Hash, Hasher};

use super::point::Coordinate;

/// A located place: a coordinate and the address it was resolved from
///
/// Two positions are equal when their coordinates are equal. The address is
/// descriptive only, so differently spelled addresses of one point compare equal.
#[derive(Debug, Clone, Default)]
pub struct Position {
    pub coordinate: Coordinate,
    pub address: Option<String>,
}

impl Position {
    pub fn new(coordinate: Coordinate) -> Self {
        Position { coordinate, address: None }
    }

    pub fn with_address(coordinate: Coordinate, address: impl Into<String>) -> Self {
        Position { coordinate, address: Some(address.into()) }
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.coordinate == other.coordinate
    }
}

impl Eq for Position {}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coordinate.hash(state);
    }
}

impl From<Coordinate> for Position {
    fn from(coordinate: Coordinate) -> Self {
        Position::new(coordinate)
    }
}

impl fmt::Display for Position {
    /// `address (lat,lng)`, or just the coordinate without an address
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.address {
            Some(address) => write!(f, "{} ({})", address, self.coordinate),
            None => write!(f, "{}", self.coordinate),
        }
    }
}
