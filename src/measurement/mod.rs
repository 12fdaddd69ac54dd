//! Measurement value types
//!
//! Distances, areas and speeds each keep a single canonical value
//! (meters, square meters, km/h) and convert on access.

mod area;
mod distance;
mod speed;
pub mod unit_converter;

pub use self::area::Area;
pub use self::distance::Distance;
pub use self::speed::Speed;
