//! Latitude/longitude rectangle

use super::shape::Shape;
use crate::coordinate::constants::EARTH_MEAN_RADIUS_METERS;
use crate::coordinate::{Bounds, Coordinate};
use crate::errors::GeoResult;
use crate::measurement::{Area, Distance};

/// A region between two parallels and two meridians
///
/// `left > right` describes a rectangle crossing the antimeridian, and the
/// length and area formulas account for the wrap.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rectangle {
    bounds: Bounds,
}

impl Rectangle {
    pub fn new(bottom: f64, left: f64, top: f64, right: f64) -> GeoResult<Self> {
        Ok(Rectangle { bounds: Bounds::new(bottom, left, top, right)? })
    }

    pub fn from_bounds(bounds: Bounds) -> Self {
        Rectangle { bounds }
    }

    pub fn bottom(&self) -> f64 {
        self.bounds.bottom()
    }

    pub fn left(&self) -> f64 {
        self.bounds.left()
    }

    pub fn top(&self) -> f64 {
        self.bounds.top()
    }

    pub fn right(&self) -> f64 {
        self.bounds.right()
    }

    /// Longitude span in radians, wrapping through ±180
    fn longitude_span(&self) -> f64 {
        let mut span = self.right() - self.left();
        if self.bounds.crosses_antimeridian() {
            span += 360.0;
        }
        span.to_radians()
    }
}

impl Shape for Rectangle {
    fn outer_bounds(&self) -> GeoResult<Bounds> {
        Ok(self.bounds)
    }

    /// Same as the outer bounds
    fn inner_bounds(&self) -> GeoResult<Bounds> {
        self.outer_bounds()
    }

    fn contains(&self, coordinate: &Coordinate) -> bool {
        self.bounds.contains(coordinate)
    }

    /// Perimeter: two parallel arcs plus two meridian arcs
    fn length(&self) -> GeoResult<Distance> {
        let top = self.top().to_radians();
        let bottom = self.bottom().to_radians();
        let span = self.longitude_span();

        let parallels = (top.cos() + bottom.cos()) * span;
        let meridians = 2.0 * (top - bottom);

        Ok(Distance::from_meters(EARTH_MEAN_RADIUS_METERS * (parallels + meridians)))
    }

    /// Share of the spherical zone between the two parallels
    fn area(&self) -> GeoResult<Area> {
        let top = self.top().to_radians();
        let bottom = self.bottom().to_radians();
        let zone = top.sin() - bottom.sin();

        Ok(Area::from_square_meters(
            EARTH_MEAN_RADIUS_METERS * EARTH_MEAN_RADIUS_METERS * self.longitude_span() * zone,
        ))
    }
}
