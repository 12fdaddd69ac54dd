//! Common shape interface
//!
//! Every shape answers the same five questions. `ShapeKind` wraps the
//! concrete shapes so heterogeneous collections can be held by value.

use crate::coordinate::{Bounds, Coordinate};
use crate::errors::GeoResult;
use crate::measurement::{Area, Distance};

use super::{Circle, Line, Polygon, Rectangle};

/// A region on the earth's surface
pub trait Shape {
    /// Rectangle enclosing the whole shape
    fn outer_bounds(&self) -> GeoResult<Bounds>;

    /// Rectangle enclosed by the shape
    ///
    /// Shapes without an inscribed-rectangle algorithm return `NotSupported`.
    fn inner_bounds(&self) -> GeoResult<Bounds>;

    /// Whether a coordinate lies within the shape
    fn contains(&self, coordinate: &Coordinate) -> bool;

    /// Perimeter, or path length for lines
    fn length(&self) -> GeoResult<Distance>;

    /// Surface area on the spherical earth
    fn area(&self) -> GeoResult<Area>;
}

/// One of the supported shapes
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    Circle(Circle),
    Line(Line),
    Polygon(Polygon),
    Rectangle(Rectangle),
}

impl ShapeKind {
    /// Lowercase name of the variant
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Circle(_) => "circle",
            ShapeKind::Line(_) => "line",
            ShapeKind::Polygon(_) => "polygon",
            ShapeKind::Rectangle(_) => "rectangle",
        }
    }

    fn as_shape(&self) -> &dyn Shape {
        match self {
            ShapeKind::Circle(s) => s,
            ShapeKind::Line(s) => s,
            ShapeKind::Polygon(s) => s,
            ShapeKind::Rectangle(s) => s,
        }
    }
}

impl Shape for ShapeKind {
    fn outer_bounds(&self) -> GeoResult<Bounds> {
        self.as_shape().outer_bounds()
    }

    fn inner_bounds(&self) -> GeoResult<Bounds> {
        self.as_shape().inner_bounds()
    }

    fn contains(&self, coordinate: &Coordinate) -> bool {
        self.as_shape().contains(coordinate)
    }

    fn length(&self) -> GeoResult<Distance> {
        self.as_shape().length()
    }

    fn area(&self) -> GeoResult<Area> {
        self.as_shape().area()
    }
}

impl From<Circle> for ShapeKind {
    fn from(shape: Circle) -> Self {
        ShapeKind::Circle(shape)
    }
}

impl From<Line> for ShapeKind {
    fn from(shape: Line) -> Self {
        ShapeKind::Line(shape)
    }
}

impl From<Polygon> for ShapeKind {
    fn from(shape: Polygon) -> Self {
        ShapeKind::Polygon(shape)
    }
}

impl From<Rectangle> for ShapeKind {
    fn from(shape: Rectangle) -> Self {
        ShapeKind::Rectangle(shape)
    }
}
