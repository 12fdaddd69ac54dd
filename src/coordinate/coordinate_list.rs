//! Ordered list of coordinates
//!
//! Coordinate lists describe paths and polygon rings. Order matters: it sets
//! the path direction and the ring winding.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use log::debug;

use super::bounds::Bounds;
use super::constants::EARTH_MEAN_RADIUS_METERS;
use super::point::Coordinate;
use crate::errors::{GeoError, GeoResult};
use crate::measurement::{Area, Distance};

/// An owned, ordered sequence of coordinates
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CoordinateList {
    coordinates: Vec<Coordinate>,
}

impl CoordinateList {
    pub fn new() -> Self {
        CoordinateList { coordinates: Vec::new() }
    }

    pub fn from_vec(coordinates: Vec<Coordinate>) -> Self {
        CoordinateList { coordinates }
    }

    /// Parse a flat `lng,lat,lng,lat,...` string
    ///
    /// Empty tokens are skipped. Fewer than two tokens yields an empty list.
    ///
    /// # Returns
    /// The parsed list, `MalformedInput` for an odd token count or a bad
    /// number, or a range error for an out-of-range value
    pub fn from_lng_lat_str(lng_lat: &str) -> GeoResult<Self> {
        let tokens: Vec<&str> = lng_lat
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();

        if tokens.len() < 2 {
            debug!("Coordinate string has fewer than two values, returning an empty list");
            return Ok(CoordinateList::new());
        }
        if tokens.len() % 2 != 0 {
            return Err(GeoError::MalformedInput(format!(
                "Expected longitude,latitude pairs but got {} values",
                tokens.len()
            )));
        }

        let mut coordinates = Vec::with_capacity(tokens.len() / 2);
        for pair in tokens.chunks_exact(2) {
            let longitude = parse_value(pair[0])?;
            let latitude = parse_value(pair[1])?;
            coordinates.push(Coordinate::new(latitude, longitude)?);
        }

        Ok(CoordinateList { coordinates })
    }

    pub fn push(&mut self, coordinate: Coordinate) {
        self.coordinates.push(coordinate);
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.coordinates.iter()
    }

    pub fn as_slice(&self) -> &[Coordinate] {
        &self.coordinates
    }

    pub fn first(&self) -> Option<&Coordinate> {
        self.coordinates.first()
    }

    pub fn last(&self) -> Option<&Coordinate> {
        self.coordinates.last()
    }

    /// True when there are more than two points and the first equals the last
    pub fn is_closed(&self) -> bool {
        self.coordinates.len() > 2 && self.coordinates.first() == self.coordinates.last()
    }

    /// `lng,lat,lng,lat,...`
    pub fn to_lng_lat_string(&self) -> String {
        self.to_lng_lat_array()
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Flat `[lng, lat, lng, lat, ...]` array
    pub fn to_lng_lat_array(&self) -> Vec<f64> {
        self.coordinates
            .iter()
            .flat_map(|c| [c.longitude(), c.latitude()])
            .collect()
    }

    /// Geographic midpoint of the list
    ///
    /// Averages the unit-sphere Cartesian vectors of every point and projects
    /// the mean back to latitude/longitude, which behaves across the
    /// antimeridian and near the poles.
    pub fn center(&self) -> GeoResult<Coordinate> {
        if self.coordinates.is_empty() {
            return Err(GeoError::EmptyInput("cannot take the center of an empty coordinate list"));
        }

        let (mut x, mut y, mut z) = (0.0, 0.0, 0.0);
        for c in &self.coordinates {
            let lat = c.latitude_radians();
            let lng = c.longitude_radians();
            x += lat.cos() * lng.cos();
            y += lat.cos() * lng.sin();
            z += lat.sin();
        }

        let total = self.coordinates.len() as f64;
        x /= total;
        y /= total;
        z /= total;

        let lng = y.atan2(x);
        let hyp = (x * x + y * y).sqrt();
        let lat = z.atan2(hyp);

        Coordinate::new(lat.to_degrees(), lng.to_degrees())
    }

    /// Bounding rectangle of all points
    pub fn outer_bounds(&self) -> Bounds {
        Bounds::from_coordinates(&self.coordinates)
    }

    /// Largest rectangle inside the ring
    ///
    /// Inscribed rectangles of arbitrary rings are not computed.
    pub fn inner_bounds(&self) -> GeoResult<Bounds> {
        Err(GeoError::NotSupported("inner bounds of a coordinate list"))
    }

    /// Signed spherical area of a closed ring
    ///
    /// Sums `Δλ·(2 + sin φ1 + sin φ2)` over every edge, scaled by `R²/2`.
    /// The sign follows the ring winding; use [`Area::abs`] for a magnitude.
    /// Open rings or rings with fewer than four points have zero area.
    pub fn area(&self) -> Area {
        if self.coordinates.len() <= 3 || !self.is_closed() {
            return Area::zero();
        }

        let sum: f64 = self
            .coordinates
            .windows(2)
            .map(|edge| {
                let (p1, p2) = (&edge[0], &edge[1]);
                (p2.longitude() - p1.longitude()).to_radians()
                    * (2.0 + p1.latitude_radians().sin() + p2.latitude_radians().sin())
            })
            .sum();

        Area::from_square_meters(sum * EARTH_MEAN_RADIUS_METERS * EARTH_MEAN_RADIUS_METERS / 2.0)
    }

    /// Path length along consecutive points
    pub fn length(&self) -> Distance {
        self.coordinates
            .windows(2)
            .map(|pair| pair[0].distance_to(&pair[1]))
            .sum()
    }
}

fn parse_value(token: &str) -> GeoResult<f64> {
    token
        .parse::<f64>()
        .map_err(|_| GeoError::MalformedInput(format!("Invalid coordinate value: {}", token)))
}

impl From<Vec<Coordinate>> for CoordinateList {
    fn from(coordinates: Vec<Coordinate>) -> Self {
        CoordinateList::from_vec(coordinates)
    }
}

impl FromIterator<Coordinate> for CoordinateList {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        CoordinateList { coordinates: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a CoordinateList {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.coordinates.iter()
    }
}

impl Index<usize> for CoordinateList {
    type Output = Coordinate;

    fn index(&self, index: usize) -> &Coordinate {
        &self.coordinates[index]
    }
}

impl fmt::Display for CoordinateList {
    /// `lat,lng,lat,lng,...`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.coordinates.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}

impl FromStr for CoordinateList {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CoordinateList::from_lng_lat_str(s)
    }
}
