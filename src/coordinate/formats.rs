//! Sexagesimal coordinate notations
//!
//! Presentation of a single latitude or longitude value as degrees minutes
//! seconds (DMS) or degrees decimal minutes (DDM), and parsing of those
//! strings back into signed decimal degrees.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::{GeoError, GeoResult};

lazy_static! {
    static ref DMS_PATTERN: Regex =
        Regex::new(r#"^\s*(\d+)°\s*(\d+)'\s*(\d+(?:\.\d+)?)"\s*([NSEW])\s*$"#)
            .expect("DMS pattern is valid");
    static ref DDM_PATTERN: Regex =
        Regex::new(r"^\s*(\d+)°\s*(\d+(?:\.\d+)?)'\s*([NSEW])\s*$")
            .expect("DDM pattern is valid");
}

/// Notations a coordinate can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoordinateFormat {
    /// `lat,lng` in decimal degrees
    #[default]
    DecimalDegrees,
    /// `25° 49' 29.6616" S`
    DegreesMinutesSeconds,
    /// `25° 49.494360' S`
    DegreesDecimalMinutes,
}

impl FromStr for CoordinateFormat {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "decimal" | "dd" => Ok(CoordinateFormat::DecimalDegrees),
            "dms" => Ok(CoordinateFormat::DegreesMinutesSeconds),
            "ddm" => Ok(CoordinateFormat::DegreesDecimalMinutes),
            other => Err(GeoError::MalformedInput(format!("Unknown coordinate format: {}", other))),
        }
    }
}

fn hemisphere(value: f64, is_longitude: bool) -> char {
    match (is_longitude, value < 0.0) {
        (true, true) => 'W',
        (true, false) => 'E',
        (false, true) => 'S',
        (false, false) => 'N',
    }
}

/// Sign and axis of a hemisphere letter
fn hemisphere_sign(direction: char) -> (f64, bool) {
    match direction {
        'S' => (-1.0, false),
        'W' => (-1.0, true),
        'E' => (1.0, true),
        _ => (1.0, false),
    }
}

/// Ten-thousandths of an arc second per degree, the DMS display resolution
const DMS_UNITS_PER_DEGREE: f64 = 36_000_000.0;
/// Millionths of an arc minute per degree, the DDM display resolution
const DDM_UNITS_PER_DEGREE: f64 = 60_000_000.0;

fn check_range(value: f64, is_longitude: bool) -> GeoResult<()> {
    let limit = if is_longitude { 180.0 } else { 90.0 };
    if value.abs() > limit {
        return Err(if is_longitude {
            GeoError::LongitudeOutOfRange(value)
        } else {
            GeoError::LatitudeOutOfRange(value)
        });
    }
    Ok(())
}

/// A value split into whole degrees, whole minutes and decimal seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegreesMinutesSeconds {
    value: f64,
    degrees: f64,
    minutes: f64,
    seconds: f64,
    direction: char,
}

impl DegreesMinutesSeconds {
    /// Split a signed decimal value
    ///
    /// Seconds are rounded to the displayed four decimals before the split,
    /// so a full 60 seconds carries into the minutes and degrees.
    pub fn new(value: f64, is_longitude: bool) -> Self {
        let units = (value.abs() * DMS_UNITS_PER_DEGREE).round();
        let degrees = (units / DMS_UNITS_PER_DEGREE).floor();
        let remainder = units - degrees * DMS_UNITS_PER_DEGREE;
        let minutes = (remainder / 600_000.0).floor();
        let seconds = (remainder - minutes * 600_000.0) / 10_000.0;

        DegreesMinutesSeconds {
            value,
            degrees,
            minutes,
            seconds,
            direction: hemisphere(value, is_longitude),
        }
    }

    /// Signed decimal degrees
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    pub fn minutes(&self) -> f64 {
        self.minutes
    }

    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    pub fn direction(&self) -> char {
        self.direction
    }
}

impl fmt::Display for DegreesMinutesSeconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.0}° {:.0}' {:.4}\" {}",
            self.degrees, self.minutes, self.seconds, self.direction
        )
    }
}

impl FromStr for DegreesMinutesSeconds {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = DMS_PATTERN
            .captures(s)
            .ok_or_else(|| GeoError::MalformedInput(format!("Not a DMS value: {}", s)))?;

        let degrees: f64 = caps[1].parse().map_err(|_| GeoError::MalformedInput(s.to_string()))?;
        let minutes: f64 = caps[2].parse().map_err(|_| GeoError::MalformedInput(s.to_string()))?;
        let seconds: f64 = caps[3].parse().map_err(|_| GeoError::MalformedInput(s.to_string()))?;
        let direction = caps[4].chars().next().unwrap_or('N');

        if minutes >= 60.0 || seconds >= 60.0 {
            return Err(GeoError::MalformedInput(format!("Minutes and seconds must be below 60: {}", s)));
        }

        let (sign, is_longitude) = hemisphere_sign(direction);
        let value = sign * (degrees + minutes / 60.0 + seconds / 3600.0);
        check_range(value, is_longitude)?;

        Ok(DegreesMinutesSeconds { value, degrees, minutes, seconds, direction })
    }
}

/// A value split into whole degrees and decimal minutes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegreesDecimalMinutes {
    value: f64,
    degrees: f64,
    minutes: f64,
    direction: char,
}

impl DegreesDecimalMinutes {
    /// Split a signed decimal value, minutes rounded to six decimals with carry
    pub fn new(value: f64, is_longitude: bool) -> Self {
        let units = (value.abs() * DDM_UNITS_PER_DEGREE).round();
        let degrees = (units / DDM_UNITS_PER_DEGREE).floor();

        DegreesDecimalMinutes {
            value,
            degrees,
            minutes: (units - degrees * DDM_UNITS_PER_DEGREE) / 1_000_000.0,
            direction: hemisphere(value, is_longitude),
        }
    }

    /// Signed decimal degrees
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    pub fn minutes(&self) -> f64 {
        self.minutes
    }

    pub fn direction(&self) -> char {
        self.direction
    }
}

impl fmt::Display for DegreesDecimalMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}° {:.6}' {}", self.degrees, self.minutes, self.direction)
    }
}

impl FromStr for DegreesDecimalMinutes {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = DDM_PATTERN
            .captures(s)
            .ok_or_else(|| GeoError::MalformedInput(format!("Not a DDM value: {}", s)))?;

        let degrees: f64 = caps[1].parse().map_err(|_| GeoError::MalformedInput(s.to_string()))?;
        let minutes: f64 = caps[2].parse().map_err(|_| GeoError::MalformedInput(s.to_string()))?;
        let direction = caps[3].chars().next().unwrap_or('N');

        if minutes >= 60.0 {
            return Err(GeoError::MalformedInput(format!("Minutes must be below 60: {}", s)));
        }

        let (sign, is_longitude) = hemisphere_sign(direction);
        let value = sign * (degrees + minutes / 60.0);
        check_range(value, is_longitude)?;

        Ok(DegreesDecimalMinutes { value, degrees, minutes, direction })
    }
}
