//! Utility modules for common functionality
//!
//! Logging, text parsing helpers and the shape definition file loader.

pub mod logger;
pub mod parse_utils;
pub mod shape_file;
#[cfg(test)]
mod tests;
