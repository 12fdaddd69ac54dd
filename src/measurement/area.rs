//! Area measurement

use std::fmt;

use super::unit_converter;

/// An area, stored in square meters
///
/// Spherical polygon areas are signed by ring winding, so negative values
/// are representable. Use [`Area::abs`] where a magnitude is wanted.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Area {
    square_meters: f64,
}

impl Area {
    pub fn zero() -> Self {
        Area { square_meters: 0.0 }
    }

    pub fn from_square_meters(square_meters: f64) -> Self {
        Area { square_meters }
    }

    pub fn from_square_kilometers(square_kilometers: f64) -> Self {
        Area::from_square_meters(unit_converter::square_kilometers_to_square_meters(square_kilometers))
    }

    pub fn from_square_feet(square_feet: f64) -> Self {
        Area::from_square_meters(unit_converter::square_feet_to_square_meters(square_feet))
    }

    pub fn from_square_miles(square_miles: f64) -> Self {
        Area::from_square_meters(unit_converter::square_miles_to_square_meters(square_miles))
    }

    pub fn square_meters(&self) -> f64 {
        self.square_meters
    }

    pub fn square_kilometers(&self) -> f64 {
        unit_converter::square_meters_to_square_kilometers(self.square_meters)
    }

    pub fn square_feet(&self) -> f64 {
        unit_converter::square_meters_to_square_feet(self.square_meters)
    }

    pub fn square_miles(&self) -> f64 {
        unit_converter::square_meters_to_square_miles(self.square_meters)
    }

    /// Magnitude of this area, dropping the winding sign
    pub fn abs(&self) -> Self {
        Area::from_square_meters(self.square_meters.abs())
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} km²", self.square_kilometers())
    }
}
