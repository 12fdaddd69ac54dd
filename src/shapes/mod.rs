//! Geometric shapes on the spherical earth
//!
//! Circles, buffered lines, polygons and rectangles all implement the
//! [`Shape`] trait for bounds, containment, length and area.

mod circle;
mod line;
mod polygon;
mod rectangle;
mod shape;
#[cfg(test)]
mod tests;

pub use self::circle::Circle;
pub use self::line::Line;
pub use self::polygon::Polygon;
pub use self::rectangle::Rectangle;
pub use self::shape::{Shape, ShapeKind};
