//! Tests for polygons

use crate::coordinate::CoordinateList;
use crate::errors::GeoError;
use crate::shapes::{Polygon, Rectangle, Shape};
use crate::test_utils::{assert_close, coord, coord_list, square_ring};

/// L-shaped ring with the north-east quarter cut away
fn l_shape() -> Polygon {
    Polygon::new(coord_list(&[
        (0.0, 0.0),
        (10.0, 0.0),
        (10.0, 5.0),
        (5.0, 5.0),
        (5.0, 10.0),
        (0.0, 10.0),
    ]))
}

#[test]
fn test_square_contains() {
    let polygon = Polygon::new(square_ring());

    assert!(polygon.contains(&coord(5.0, 5.0)));
    assert!(polygon.contains(&coord(0.5, 9.5)));
    assert!(!polygon.contains(&coord(20.0, 20.0)));
    assert!(!polygon.contains(&coord(-1.0, 5.0)));
    // Boundary points fall outside the strict outer bounds
    assert!(!polygon.contains(&coord(0.0, 5.0)));
}

#[test]
fn test_open_ring_contains() {
    let open = Polygon::new(coord_list(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]));
    assert!(open.contains(&coord(5.0, 5.0)));
    assert!(!open.contains(&coord(15.0, 5.0)));
}

#[test]
fn test_concave_contains() {
    let polygon = l_shape();

    assert!(polygon.contains(&coord(2.0, 8.0)));
    assert!(polygon.contains(&coord(8.0, 2.0)));
    // Inside the outer bounds but in the cut-away corner
    assert!(!polygon.contains(&coord(8.0, 8.0)));
}

#[test]
fn test_empty_polygon() {
    let polygon = Polygon::new(CoordinateList::new());
    assert!(!polygon.contains(&coord(0.0, 0.0)));
    assert_eq!(polygon.length().unwrap().meters(), 0.0);
    assert_eq!(polygon.area().unwrap().square_meters(), 0.0);
}

#[test]
fn test_bounds() {
    let polygon = l_shape();
    let bounds = polygon.outer_bounds().unwrap();
    assert_eq!((bounds.bottom(), bounds.left(), bounds.top(), bounds.right()), (0.0, 0.0, 10.0, 10.0));
    assert!(matches!(polygon.inner_bounds(), Err(GeoError::NotSupported(_))));
}

#[test]
fn test_length_closes_open_ring() {
    let closed = Polygon::new(square_ring());
    let open = Polygon::new(coord_list(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]));

    let closed_length = closed.length().unwrap().meters();
    assert_close(open.length().unwrap().meters(), closed_length, 1e-6);
    assert_close(closed_length, square_ring().length().meters(), 1e-9);
}

#[test]
fn test_area_matches_rectangle() {
    let polygon = Polygon::new(square_ring());
    let rectangle = Rectangle::new(0.0, 0.0, 10.0, 10.0).unwrap();

    let polygon_area = polygon.area().unwrap().square_meters();
    assert!(polygon_area > 0.0);
    assert_close(polygon_area, rectangle.area().unwrap().square_meters(), 1e3);
    assert_close(polygon_area, 1.230166804525e12, 1e3);
}

#[test]
fn test_degenerate_area_is_zero() {
    let open = Polygon::new(coord_list(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]));
    assert_eq!(open.area().unwrap().square_meters(), 0.0);

    let triangle_of_three = Polygon::new(coord_list(&[(0.0, 0.0), (0.0, 10.0), (0.0, 0.0)]));
    assert_eq!(triangle_of_three.area().unwrap().square_meters(), 0.0);
}
