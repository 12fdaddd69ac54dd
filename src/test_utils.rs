//! Shared helpers for in-crate tests

use crate::coordinate::{Coordinate, CoordinateList};

/// Coordinate from known-good literals
pub fn coord(latitude: f64, longitude: f64) -> Coordinate {
    Coordinate::new(latitude, longitude).unwrap()
}

/// List from `(latitude, longitude)` pairs
pub fn coord_list(points: &[(f64, f64)]) -> CoordinateList {
    points.iter().map(|&(lat, lng)| coord(lat, lng)).collect()
}

/// The 10x10 degree square ring at the origin, closed, clockwise in lat/lng
pub fn square_ring() -> CoordinateList {
    coord_list(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0), (0.0, 0.0)])
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "{} is not within {} of {}",
        actual,
        tolerance,
        expected
    );
}
