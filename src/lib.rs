pub mod errors;
pub mod measurement;
pub mod coordinate;
pub mod shapes;
pub mod utils;
pub mod commands;
#[cfg(test)]
pub(crate) mod test_utils;

pub use errors::{GeoError, GeoResult};
pub use measurement::{Area, Distance, Speed};
pub use coordinate::{Bounds, Coordinate, CoordinateFormat, CoordinateList, OsGridReference, Position};
pub use shapes::{Circle, Line, Polygon, Rectangle, Shape, ShapeKind};
