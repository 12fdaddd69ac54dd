//! Tests for circles

use std::f64::consts::PI;

use super::arc_degrees;
use crate::coordinate::constants::EARTH_MEAN_RADIUS_METERS;
use crate::errors::GeoError;
use crate::measurement::Distance;
use crate::shapes::{Circle, Shape};
use crate::test_utils::{assert_close, coord};

#[test]
fn test_outer_bounds_at_equator() {
    let circle = Circle::new(coord(0.0, 0.0), arc_degrees(1.0));
    let bounds = circle.outer_bounds().unwrap();

    assert_close(bounds.top(), 1.0, 1e-9);
    assert_close(bounds.bottom(), -1.0, 1e-9);
    assert_close(bounds.left(), -1.0, 1e-9);
    assert_close(bounds.right(), 1.0, 1e-9);
}

#[test]
fn test_outer_bounds_widen_with_latitude() {
    let circle = Circle::new(coord(60.0, 10.0), arc_degrees(1.0));
    let bounds = circle.outer_bounds().unwrap();

    assert_close(bounds.top(), 61.0, 1e-9);
    assert_close(bounds.bottom(), 59.0, 1e-9);
    // About one degree divided by cos(60)
    assert!(bounds.right() - 10.0 > 1.9 && bounds.right() - 10.0 < 2.1);
    assert_close(10.0 - bounds.left(), bounds.right() - 10.0, 1e-9);
}

#[test]
fn test_outer_bounds_across_antimeridian() {
    let circle = Circle::new(coord(0.0, 179.5), arc_degrees(1.0));
    let bounds = circle.outer_bounds().unwrap();

    assert!(bounds.crosses_antimeridian());
    assert_close(bounds.left(), 178.5, 1e-9);
    assert_close(bounds.right(), -179.5, 1e-9);

    let across = coord(0.0, -179.8);
    assert!(bounds.contains(&across));
    assert!(circle.contains(&across));
}

#[test]
fn test_outer_bounds_covering_pole() {
    let circle = Circle::new(coord(89.5, 0.0), arc_degrees(1.0));
    let bounds = circle.outer_bounds().unwrap();

    assert_close(bounds.bottom(), 88.5, 1e-9);
    assert_eq!(bounds.top(), 90.0);
    assert_eq!(bounds.left(), -180.0);
    assert_eq!(bounds.right(), 180.0);
}

#[test]
fn test_negative_radius_is_rejected() {
    let circle = Circle::new(coord(0.0, 0.0), Distance::from_meters(-5.0));
    assert!(matches!(circle.outer_bounds(), Err(GeoError::InvalidRadius(r)) if r == -5.0));
}

#[test]
fn test_inner_bounds_not_supported() {
    let circle = Circle::new(coord(0.0, 0.0), Distance::from_meters(100.0));
    assert!(matches!(circle.inner_bounds(), Err(GeoError::NotSupported(_))));
}

#[test]
fn test_contains() {
    let center = coord(-25.824906, 28.259757);
    let circle = Circle::new(center, Distance::from_kilometers(5.0));

    assert!(circle.contains(&center));
    assert!(circle.contains(&coord(-25.864751, 28.257087)));
    assert!(!circle.contains(&coord(-26.0, 28.259757)));

    let point = Circle::new(center, Distance::zero());
    assert!(point.contains(&center));
    assert!(!point.contains(&coord(-25.82, 28.259757)));
}

#[test]
fn test_small_circle_approaches_planar() {
    let circle = Circle::new(coord(45.0, 7.0), Distance::from_meters(1000.0));

    assert_close(circle.length().unwrap().meters(), 2.0 * PI * 1000.0, 1e-3);
    assert_close(circle.area().unwrap().square_meters(), PI * 1000.0 * 1000.0, 1.0);
}

#[test]
fn test_hemisphere() {
    let quarter_circumference = PI * EARTH_MEAN_RADIUS_METERS / 2.0;
    let circle = Circle::new(coord(90.0, 0.0), Distance::from_meters(quarter_circumference));

    let r = EARTH_MEAN_RADIUS_METERS;
    assert_close(circle.length().unwrap().meters(), 2.0 * PI * r, 1e-3);
    assert_close(circle.area().unwrap().square_meters(), 2.0 * PI * r * r, 1e3);
}

#[test]
fn test_degenerate_area() {
    let center = coord(0.0, 0.0);
    assert_eq!(Circle::new(center, Distance::zero()).area().unwrap().square_meters(), 0.0);
    assert_eq!(Circle::new(center, Distance::from_meters(-1.0)).area().unwrap().square_meters(), 0.0);

    let beyond = Distance::from_meters(PI * EARTH_MEAN_RADIUS_METERS + 1.0);
    assert_eq!(Circle::new(center, beyond).area().unwrap().square_meters(), 0.0);
}
