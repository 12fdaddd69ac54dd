//! Distance measurement

use std::fmt;

use super::unit_converter;

/// A distance, stored in meters
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Distance {
    meters: f64,
}

impl Distance {
    /// Zero distance
    pub fn zero() -> Self {
        Distance { meters: 0.0 }
    }

    pub fn from_meters(meters: f64) -> Self {
        Distance { meters }
    }

    pub fn from_kilometers(kilometers: f64) -> Self {
        Distance::from_meters(unit_converter::kilometers_to_meters(kilometers))
    }

    pub fn from_feet(feet: f64) -> Self {
        Distance::from_meters(unit_converter::feet_to_meters(feet))
    }

    pub fn from_miles(miles: f64) -> Self {
        Distance::from_meters(unit_converter::miles_to_meters(miles))
    }

    pub fn meters(&self) -> f64 {
        self.meters
    }

    pub fn kilometers(&self) -> f64 {
        unit_converter::meters_to_kilometers(self.meters)
    }

    pub fn feet(&self) -> f64 {
        unit_converter::meters_to_feet(self.meters)
    }

    pub fn miles(&self) -> f64 {
        unit_converter::meters_to_miles(self.meters)
    }
}

impl std::ops::Add for Distance {
    type Output = Distance;

    fn add(self, other: Distance) -> Distance {
        Distance::from_meters(self.meters + other.meters)
    }
}

impl std::iter::Sum for Distance {
    fn sum<I: Iterator<Item = Distance>>(iter: I) -> Self {
        iter.fold(Distance::zero(), |acc, d| acc + d)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.meters.abs() >= unit_converter::METERS_PER_KILOMETER {
            write!(f, "{:.3} km", self.kilometers())
        } else {
            write!(f, "{:.1} m", self.meters)
        }
    }
}
