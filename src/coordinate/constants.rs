//! Earth model constants
//!
//! Every computation in this crate uses a spherical earth.

/// Earth radius in kilometers used for great-circle distance and projection
pub const EARTH_RADIUS_KM: f64 = 6371.01;

/// Earth mean radius in meters used for area and perimeter formulas
pub const EARTH_MEAN_RADIUS_METERS: f64 = 6371008.7714;

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// Bounds of the Ordnance Survey national grid (bottom, left, top, right)
pub const UK_GRID_BOUNDS: (f64, f64, f64, f64) = (49.0, -7.0, 61.0, 2.0);
