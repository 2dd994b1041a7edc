//! Distance-based collision test used by the arena packer.

use crate::Point;

/// True if `candidate` lies strictly closer than `radius` to any placed point.
///
/// Pure and order-independent; the scan stops at the first hit.
pub fn touches(placed: &[Point], candidate: Point, radius: f64) -> bool {
    placed
        .iter()
        .any(|p| nalgebra::distance(p, &candidate) < radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_never_touches() {
        assert!(!touches(&[], Point::new(1.0, 1.0), 100.0));
    }

    #[test]
    fn distance_equal_to_radius_does_not_touch() {
        let placed = [Point::new(0.0, 0.0)];
        assert!(!touches(&placed, Point::new(3.0, 4.0), 5.0));
        assert!(touches(&placed, Point::new(3.0, 4.0), 5.0 + 1e-9));
    }

    #[test]
    fn any_close_point_touches() {
        let placed = [
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(50.0, 50.0),
        ];
        assert!(touches(&placed, Point::new(52.0, 49.0), 5.0));
        assert!(!touches(&placed, Point::new(25.0, 25.0), 5.0));
    }

    #[test]
    fn symmetric_for_single_points() {
        let pairs = [
            (Point::new(0.0, 0.0), Point::new(1.0, 1.0)),
            (Point::new(-3.5, 2.0), Point::new(4.0, -1.0)),
            (Point::new(10.0, 10.0), Point::new(10.0, 10.0)),
        ];
        for (p, q) in pairs {
            for r in [0.5, 1.5, 10.0] {
                assert_eq!(touches(&[p], q, r), touches(&[q], p, r));
            }
        }
    }
}
