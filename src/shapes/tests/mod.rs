mod circle_tests;
mod polygon_tests;

use crate::coordinate::constants::EARTH_RADIUS_KM;
use crate::measurement::Distance;

/// Great-circle distance spanning the given number of degrees of arc
fn arc_degrees(degrees: f64) -> Distance {
    Distance::from_kilometers(degrees.to_radians() * EARTH_RADIUS_KM)
}
