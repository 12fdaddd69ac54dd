//! Buffered path

use log::trace;

use super::circle::Circle;
use super::shape::Shape;
use crate::coordinate::{Bounds, Coordinate, CoordinateList};
use crate::errors::{GeoError, GeoResult};
use crate::measurement::{Area, Distance};

/// A path through a list of vertices, optionally buffered by a tolerance
///
/// With a positive tolerance the shape is approximated as the union of a
/// disc around every vertex. Corridors between widely spaced vertices are
/// not covered.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub vertices: CoordinateList,
    pub tolerance: Distance,
}

impl Line {
    pub fn new(vertices: CoordinateList, tolerance: Distance) -> Self {
        Line { vertices, tolerance }
    }

    fn is_buffered(&self) -> bool {
        self.tolerance.meters() > 0.0
    }

    fn vertex_circles(&self) -> impl Iterator<Item = Circle> + '_ {
        self.vertices.iter().map(move |v| Circle::new(*v, self.tolerance))
    }
}

impl Shape for Line {
    fn outer_bounds(&self) -> GeoResult<Bounds> {
        if !self.is_buffered() {
            return Ok(self.vertices.outer_bounds());
        }

        let mut circles = self.vertex_circles();
        let first = circles
            .next()
            .ok_or(GeoError::EmptyInput("a buffered line needs at least one vertex"))?;

        let mut bounds = first.outer_bounds()?;
        for circle in circles {
            bounds.extend_bounds(&circle.outer_bounds()?);
        }
        trace!("Buffered line bounds: {}", bounds);

        Ok(bounds)
    }

    fn inner_bounds(&self) -> GeoResult<Bounds> {
        Err(GeoError::NotSupported("inner bounds of a line"))
    }

    /// Only a buffered line can contain anything
    fn contains(&self, coordinate: &Coordinate) -> bool {
        if !self.is_buffered() {
            return false;
        }

        match self.outer_bounds() {
            Ok(bounds) if bounds.contains(coordinate) => {}
            _ => return false,
        }

        self.vertex_circles().any(|c| c.contains(coordinate))
    }

    fn length(&self) -> GeoResult<Distance> {
        Ok(self.vertices.length())
    }

    fn area(&self) -> GeoResult<Area> {
        if !self.is_buffered() {
            return Ok(Area::zero());
        }

        Err(GeoError::NotSupported("area of a buffered line"))
    }
}
