//! Speed measurement

use std::fmt;

use super::unit_converter;

/// A speed, stored in kilometers per hour
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Speed {
    kilometers_per_hour: f64,
}

impl Speed {
    pub fn from_kilometers_per_hour(kilometers_per_hour: f64) -> Self {
        Speed { kilometers_per_hour }
    }

    pub fn from_miles_per_hour(miles_per_hour: f64) -> Self {
        Speed::from_kilometers_per_hour(unit_converter::miles_per_hour_to_kilometers_per_hour(miles_per_hour))
    }

    pub fn kilometers_per_hour(&self) -> f64 {
        self.kilometers_per_hour
    }

    pub fn miles_per_hour(&self) -> f64 {
        unit_converter::kilometers_per_hour_to_miles_per_hour(self.kilometers_per_hour)
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} km/h", self.kilometers_per_hour)
    }
}
