//! Tests for the point type

use crate::geometry::Point;

#[test]
fn test_component_wise_extremes() {
    let a = Point::new(3, 10);
    let b = Point::new(7, -2);

    assert_eq!(a.max(b), Point::new(7, 10));
    assert_eq!(a.min(b), Point::new(3, -2));
}

#[test]
fn test_point_conversions() {
    let point: Point = (4, 5).into();
    assert_eq!(point, Point::new(4, 5));
    assert_eq!(point.to_array(), [4, 5]);
}
