//! Parsing helpers for command-line and text input

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::{GeoError, GeoResult};

lazy_static! {
    // Two decimal numbers separated by a comma, surrounding whitespace allowed
    static ref PAIR_PATTERN: Regex =
        Regex::new(r"^\s*([-+]?\d+(?:\.\d*)?|[-+]?\.\d+)\s*,\s*([-+]?\d+(?:\.\d*)?|[-+]?\.\d+)\s*$")
            .expect("pair pattern is valid");
}

/// Parse `"a,b"` into two numbers
pub fn parse_pair(input: &str) -> GeoResult<(f64, f64)> {
    let caps = PAIR_PATTERN.captures(input).ok_or_else(|| {
        GeoError::MalformedInput(format!("Expected two comma-separated numbers, got '{}'", input))
    })?;

    let first = parse_number(&caps[1])?;
    let second = parse_number(&caps[2])?;
    Ok((first, second))
}

/// Parse a single decimal number
pub fn parse_number(input: &str) -> GeoResult<f64> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| GeoError::MalformedInput(format!("Invalid number: '{}'", input)))
}
