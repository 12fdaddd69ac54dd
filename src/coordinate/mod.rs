//! Coordinate handling for geospatial data
//!
//! This module provides the validated coordinate type, bounding rectangles,
//! coordinate lists and their spherical-earth computations.

mod bounds;
pub mod constants;
mod coordinate_list;
pub mod formats;
mod grid_reference;
mod point;
mod position;

// Re-export key types
pub use self::bounds::Bounds;
pub use self::coordinate_list::CoordinateList;
pub use self::formats::{CoordinateFormat, DegreesDecimalMinutes, DegreesMinutesSeconds};
pub use self::grid_reference::OsGridReference;
pub use self::point::Coordinate;
pub use self::position::Position;
