//! Circle on the sphere

use std::f64::consts::{FRAC_PI_2, PI};

use log::debug;

use super::shape::Shape;
use crate::coordinate::constants::{EARTH_MEAN_RADIUS_METERS, EARTH_RADIUS_KM};
use crate::coordinate::{Bounds, Coordinate};
use crate::errors::{GeoError, GeoResult};
use crate::measurement::{Area, Distance};

/// All points within a great-circle distance of a center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Coordinate,
    pub radius: Distance,
}

impl Circle {
    pub fn new(center: Coordinate, radius: Distance) -> Self {
        Circle { center, radius }
    }

    /// Height of the spherical cap cut off by this circle, in meters
    fn cap_height(&self) -> f64 {
        EARTH_MEAN_RADIUS_METERS * (1.0 - (self.radius.meters() / EARTH_MEAN_RADIUS_METERS).cos())
    }
}

impl Shape for Circle {
    /// Bounding coordinates of every point within the radius
    ///
    /// See http://JanMatuschek.de/LatitudeLongitudeBoundingCoordinates. When
    /// the circle spills over the antimeridian the result has `left > right`;
    /// when it covers a pole the longitude spans the whole globe.
    fn outer_bounds(&self) -> GeoResult<Bounds> {
        if self.radius.meters() < 0.0 {
            return Err(GeoError::InvalidRadius(self.radius.meters()));
        }

        let lat = self.center.latitude_radians();
        let lng = self.center.longitude_radians();
        let angular = self.radius.kilometers() / EARTH_RADIUS_KM;

        let mut min_lat = lat - angular;
        let mut max_lat = lat + angular;
        let (min_lng, max_lng);

        if min_lat > -FRAC_PI_2 && max_lat < FRAC_PI_2 {
            let delta_lng = (angular.sin() / lat.cos()).clamp(-1.0, 1.0).asin();

            let mut west = lng - delta_lng;
            if west < -PI {
                west += 2.0 * PI;
            }
            let mut east = lng + delta_lng;
            if east > PI {
                east -= 2.0 * PI;
            }
            min_lng = west;
            max_lng = east;
        } else {
            debug!("Circle around {} with radius {} covers a pole", self.center, self.radius);
            min_lat = min_lat.max(-FRAC_PI_2);
            max_lat = max_lat.min(FRAC_PI_2);
            min_lng = -PI;
            max_lng = PI;
        }

        Bounds::new(
            min_lat.to_degrees().max(-90.0),
            min_lng.to_degrees().clamp(-180.0, 180.0),
            max_lat.to_degrees().min(90.0),
            max_lng.to_degrees().clamp(-180.0, 180.0),
        )
    }

    fn inner_bounds(&self) -> GeoResult<Bounds> {
        Err(GeoError::NotSupported("inner bounds of a circle"))
    }

    /// True when the great-circle distance to the center is within the radius
    fn contains(&self, coordinate: &Coordinate) -> bool {
        self.center.distance_to(coordinate) <= self.radius
    }

    /// Circumference of the cap boundary
    fn length(&self) -> GeoResult<Distance> {
        let h = self.cap_height();
        let boundary_radius = (h * (2.0 * EARTH_MEAN_RADIUS_METERS - h)).max(0.0).sqrt();
        Ok(Distance::from_meters(2.0 * PI * boundary_radius))
    }

    /// Spherical cap area, zero for a non-positive radius or one reaching past the antipode
    fn area(&self) -> GeoResult<Area> {
        let radius = self.radius.meters();
        if radius <= 0.0 || radius > PI * EARTH_MEAN_RADIUS_METERS {
            return Ok(Area::zero());
        }

        Ok(Area::from_square_meters(2.0 * PI * EARTH_MEAN_RADIUS_METERS * self.cap_height()))
    }
}
