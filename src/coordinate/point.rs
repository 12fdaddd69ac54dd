//! Geographic coordinate on a spherical earth

use std::f64::consts::PI;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use log::trace;

use super::constants::{EARTH_RADIUS_KM, MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
use super::formats::{CoordinateFormat, DegreesDecimalMinutes, DegreesMinutesSeconds};
use super::grid_reference::OsGridReference;
use crate::errors::{GeoError, GeoResult};
use crate::measurement::Distance;
use crate::utils::parse_utils;

/// A validated latitude/longitude pair, in degrees
///
/// Latitude is always within -90..=90 and longitude within -180..=180.
/// Equality and hashing are exact on both fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Create a new coordinate
    ///
    /// # Arguments
    /// * `latitude` - Latitude in degrees, -90..=90
    /// * `longitude` - Longitude in degrees, -180..=180
    ///
    /// # Returns
    /// The coordinate, or a range error for either value
    pub fn new(latitude: f64, longitude: f64) -> GeoResult<Self> {
        Ok(Coordinate {
            latitude: validate_latitude(latitude)?,
            longitude: validate_longitude(longitude)?,
        })
    }

    /// Build a coordinate from values already known to be in range
    pub(crate) fn from_valid(latitude: f64, longitude: f64) -> Self {
        debug_assert!((MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude));
        debug_assert!((MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude));
        Coordinate { latitude, longitude }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Replace the latitude, keeping the old value on a range error
    pub fn set_latitude(&mut self, latitude: f64) -> GeoResult<()> {
        self.latitude = validate_latitude(latitude)?;
        Ok(())
    }

    /// Replace the longitude, keeping the old value on a range error
    pub fn set_longitude(&mut self, longitude: f64) -> GeoResult<()> {
        self.longitude = validate_longitude(longitude)?;
        Ok(())
    }

    pub fn latitude_radians(&self) -> f64 {
        self.latitude.to_radians()
    }

    pub fn longitude_radians(&self) -> f64 {
        self.longitude.to_radians()
    }

    /// Great-circle distance to another coordinate
    ///
    /// Uses the spherical law of cosines on a 6371.01 km earth. The cosine
    /// is clamped to [-1, 1] so identical and antipodal points stay finite.
    pub fn distance_to(&self, other: &Coordinate) -> Distance {
        if self == other {
            return Distance::zero();
        }

        let lat1 = self.latitude_radians();
        let lat2 = other.latitude_radians();
        let delta_lng = (other.longitude - self.longitude).to_radians();

        let cos_angle = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * delta_lng.cos();
        let angle = cos_angle.clamp(-1.0, 1.0).acos();

        Distance::from_kilometers(angle * EARTH_RADIUS_KM)
    }

    /// Initial bearing to another coordinate, in degrees clockwise from north
    ///
    /// # Returns
    /// A compass bearing in 0..360
    pub fn bearing_to(&self, other: &Coordinate) -> f64 {
        let lat1 = self.latitude_radians();
        let lat2 = other.latitude_radians();
        let delta_lng = (other.longitude - self.longitude).to_radians();

        let y = delta_lng.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lng.cos();

        (y.atan2(x).to_degrees() + 360.0) % 360.0
    }

    /// Coordinate reached by travelling a distance along an initial bearing
    ///
    /// # Arguments
    /// * `distance` - Distance to travel along the great circle
    /// * `bearing` - Initial bearing in degrees clockwise from north
    ///
    /// # Returns
    /// The destination, with longitude normalised into -180..180
    pub fn destination_at(&self, distance: Distance, bearing: f64) -> GeoResult<Coordinate> {
        let bearing_rad = bearing.to_radians();
        let angular = distance.kilometers() / EARTH_RADIUS_KM;
        let lat1 = self.latitude_radians();
        let lng1 = self.longitude_radians();

        let sin_lat2 = lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing_rad.cos();
        let lat2 = sin_lat2.clamp(-1.0, 1.0).asin();

        let y = bearing_rad.sin() * angular.sin() * lat1.cos();
        let x = angular.cos() - lat1.sin() * lat2.sin();
        let lng2 = (lng1 + y.atan2(x) + 3.0 * PI).rem_euclid(2.0 * PI) - PI;

        trace!("Projected {} by {} at {} degrees", self, distance, bearing);

        Coordinate::new(
            lat2.to_degrees().clamp(MIN_LATITUDE, MAX_LATITUDE),
            lng2.to_degrees().clamp(MIN_LONGITUDE, MAX_LONGITUDE),
        )
    }

    /// Degrees minutes seconds, e.g. `25° 49' 29.6616" S, 28° 15' 35.1252" E`
    pub fn to_degrees_minutes_seconds(&self) -> String {
        let lat = DegreesMinutesSeconds::new(self.latitude, false);
        let lng = DegreesMinutesSeconds::new(self.longitude, true);
        format!("{}, {}", lat, lng)
    }

    /// Degrees decimal minutes, e.g. `25° 49.494360' S, 28° 15.585420' E`
    pub fn to_degrees_decimal_minutes(&self) -> String {
        let lat = DegreesDecimalMinutes::new(self.latitude, false);
        let lng = DegreesDecimalMinutes::new(self.longitude, true);
        format!("{}, {}", lat, lng)
    }

    /// Format the coordinate in the requested notation
    pub fn format(&self, format: CoordinateFormat) -> String {
        match format {
            CoordinateFormat::DecimalDegrees => self.to_string(),
            CoordinateFormat::DegreesMinutesSeconds => self.to_degrees_minutes_seconds(),
            CoordinateFormat::DegreesDecimalMinutes => self.to_degrees_decimal_minutes(),
        }
    }

    /// Convert to an Ordnance Survey grid reference
    pub fn to_os_grid_reference(&self) -> GeoResult<OsGridReference> {
        OsGridReference::from_coordinate(self)
    }

    /// `latitude,longitude` with a fixed number of decimal places
    pub fn to_string_with_precision(&self, decimal_places: usize) -> String {
        format!(
            "{:.*},{:.*}",
            decimal_places, self.latitude, decimal_places, self.longitude
        )
    }

    /// `longitude,latitude` with six decimal places
    pub fn to_lng_lat_string(&self) -> String {
        format!("{:.6},{:.6}", self.longitude, self.latitude)
    }
}

fn validate_latitude(latitude: f64) -> GeoResult<f64> {
    if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
        return Err(GeoError::LatitudeOutOfRange(latitude));
    }
    Ok(latitude)
}

fn validate_longitude(longitude: f64) -> GeoResult<f64> {
    if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
        return Err(GeoError::LongitudeOutOfRange(longitude));
    }
    Ok(longitude)
}

/// Bit pattern used for hashing, with -0.0 folded onto 0.0
pub(crate) fn hash_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.latitude == other.latitude && self.longitude == other.longitude
    }
}

// Validation rejects NaN, so equality is total.
impl Eq for Coordinate {}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_bits(self.latitude).hash(state);
        hash_bits(self.longitude).hash(state);
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.latitude, self.longitude)
    }
}

impl FromStr for Coordinate {
    type Err = GeoError;

    /// Parse `latitude,longitude`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (latitude, longitude) = parse_utils::parse_pair(s)?;
        Coordinate::new(latitude, longitude)
    }
}
