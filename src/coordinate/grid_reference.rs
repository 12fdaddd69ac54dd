//! Ordnance Survey national grid references
//!
//! Only the type and the coverage check exist. The datum shift and
//! Transverse Mercator projection to eastings/northings are not
//! implemented, so every conversion reports `NotSupported`.

use log::warn;

use super::bounds::Bounds;
use super::constants::UK_GRID_BOUNDS;
use super::point::Coordinate;
use crate::errors::{GeoError, GeoResult};

/// Easting/northing pair on the British national grid, in meters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OsGridReference {
    pub easting: i64,
    pub northing: i64,
}

impl OsGridReference {
    pub fn new(easting: i64, northing: i64) -> Self {
        OsGridReference { easting, northing }
    }

    /// Area covered by the national grid
    pub fn coverage() -> Bounds {
        let (bottom, left, top, right) = UK_GRID_BOUNDS;
        Bounds::from_corners(
            &Coordinate::from_valid(bottom, left),
            &Coordinate::from_valid(top, right),
        )
    }

    /// Convert a WGS84 coordinate to a grid reference
    ///
    /// # Returns
    /// `OutsideGridArea` for points beyond the UK, otherwise `NotSupported`
    pub fn from_coordinate(coordinate: &Coordinate) -> GeoResult<Self> {
        if !Self::coverage().contains(coordinate) {
            return Err(GeoError::OutsideGridArea(*coordinate));
        }

        warn!("OS grid reference conversion requested for {}", coordinate);
        Err(GeoError::NotSupported("conversion to OS grid reference"))
    }

    /// Convert this grid reference back to a WGS84 coordinate
    pub fn to_coordinate(&self) -> GeoResult<Coordinate> {
        Err(GeoError::NotSupported("conversion from OS grid reference"))
    }
}
