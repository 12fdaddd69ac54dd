//! Polygon ring

use log::trace;

use super::shape::Shape;
use crate::coordinate::{Bounds, Coordinate, CoordinateList};
use crate::errors::GeoResult;
use crate::measurement::{Area, Distance};

/// A region enclosed by a ring of vertices
///
/// The ring may be given open or closed (first vertex repeated at the end).
/// Containment treats latitude/longitude as planar and does not handle rings
/// crossing the antimeridian.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub points: CoordinateList,
}

impl Polygon {
    pub fn new(points: CoordinateList) -> Self {
        Polygon { points }
    }

    /// Even-odd ray casting against every edge of the ring
    ///
    /// See http://en.wikipedia.org/wiki/Point_in_polygon. A horizontal ray
    /// at the point's latitude toggles the parity each time it crosses an
    /// edge west of the point.
    fn ray_cast(&self, coordinate: &Coordinate) -> bool {
        let points = self.points.as_slice();
        let Some(mut j) = points.len().checked_sub(1) else {
            return false;
        };

        let x = coordinate.longitude();
        let y = coordinate.latitude();
        let mut inside = false;

        for (i, pi) in points.iter().enumerate() {
            let pj = &points[j];
            let (xi, yi) = (pi.longitude(), pi.latitude());
            let (xj, yj) = (pj.longitude(), pj.latitude());

            if (yi < y && yj >= y) || (yj < y && yi >= y) {
                let crossing = xi + (y - yi) / (yj - yi) * (xj - xi);
                if crossing < x {
                    inside = !inside;
                }
            }
            j = i;
        }

        inside
    }
}

impl Shape for Polygon {
    fn outer_bounds(&self) -> GeoResult<Bounds> {
        Ok(self.points.outer_bounds())
    }

    fn inner_bounds(&self) -> GeoResult<Bounds> {
        self.points.inner_bounds()
    }

    fn contains(&self, coordinate: &Coordinate) -> bool {
        // Inside the inscribed rectangle needs no further work
        if let Ok(inner) = self.inner_bounds() {
            if inner.contains(coordinate) {
                return true;
            }
        }

        if !self.points.outer_bounds().contains(coordinate) {
            return false;
        }

        let inside = self.ray_cast(coordinate);
        trace!("Ray cast of {} against polygon: {}", coordinate, inside);
        inside
    }

    /// Perimeter, including the closing edge of an open ring
    fn length(&self) -> GeoResult<Distance> {
        let mut length = self.points.length();

        if self.points.len() > 2 && !self.points.is_closed() {
            if let (Some(first), Some(last)) = (self.points.first(), self.points.last()) {
                length = length + last.distance_to(first);
            }
        }

        Ok(length)
    }

    /// Magnitude of the spherical ring area
    ///
    /// The ring must be closed and have at least four points, otherwise the
    /// area is zero.
    fn area(&self) -> GeoResult<Area> {
        Ok(self.points.area().abs())
    }
}
