//! Custom error types for geospatial operations

use std::fmt;
use std::io;

use crate::coordinate::Coordinate;

/// Geospatial error types
#[derive(Debug)]
pub enum GeoError {
    /// Latitude outside -90..=90 degrees
    LatitudeOutOfRange(f64),
    /// Longitude outside -180..=180 degrees
    LongitudeOutOfRange(f64),
    /// Top edge below the bottom edge
    InvalidBounds { top: f64, bottom: f64 },
    /// Negative circle radius, in meters
    InvalidRadius(f64),
    /// Operation needs at least one element
    EmptyInput(&'static str),
    /// Odd-length or unparsable coordinate data
    MalformedInput(String),
    /// Feature intentionally left unimplemented
    NotSupported(&'static str),
    /// Coordinate outside the area covered by a grid system
    OutsideGridArea(Coordinate),
    /// I/O error
    IoError(io::Error),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoError::LatitudeOutOfRange(v) => write!(f, "Latitude must be between -90 and 90 degrees, got {}", v),
            GeoError::LongitudeOutOfRange(v) => write!(f, "Longitude must be between -180 and 180 degrees, got {}", v),
            GeoError::InvalidBounds { top, bottom } => write!(f, "Bounds top {} is below bottom {}", top, bottom),
            GeoError::InvalidRadius(r) => write!(f, "Radius cannot be less than 0, got {} m", r),
            GeoError::EmptyInput(what) => write!(f, "Empty input: {}", what),
            GeoError::MalformedInput(msg) => write!(f, "Malformed input: {}", msg),
            GeoError::NotSupported(what) => write!(f, "Not supported: {}", what),
            GeoError::OutsideGridArea(c) => write!(f, "Coordinate {} is outside the grid area", c),
            GeoError::IoError(e) => write!(f, "I/O error: {}", e),
            GeoError::GenericError(msg) => write!(f, "Geospatial error: {}", msg),
        }
    }
}

impl std::error::Error for GeoError {}

impl From<io::Error> for GeoError {
    fn from(error: io::Error) -> Self {
        GeoError::IoError(error)
    }
}

impl From<String> for GeoError {
    fn from(msg: String) -> Self {
        GeoError::GenericError(msg)
    }
}

/// Result type for geospatial operations
pub type GeoResult<T> = Result<T, GeoError>;

impl GeoError {
    /// True for the latitude/longitude domain errors
    pub fn is_range_error(&self) -> bool {
        matches!(self, GeoError::LatitudeOutOfRange(_) | GeoError::LongitudeOutOfRange(_))
    }
}
