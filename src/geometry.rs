//! Points in the plane and the Euclidean tour-length model.
//!
//! A route is an ordered `[Point]` that is implicitly closed: the last
//! point connects back to the first. Routes of length 0 or 1 have cost 0.

use std::fmt;

/// An immutable 2D point.
///
/// Points carry no identity beyond their coordinates; the same point may
/// appear several times in a route.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        distance(*self, *other)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Euclidean distance `sqrt((a.x - b.x)^2 + (a.y - b.y)^2)`.
///
/// Symmetric, non-negative, and zero iff `a == b`.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Length of the closed tour through `route`.
///
/// Sums consecutive edges and the closing edge from the last point back
/// to the first.
///
/// # Complexity
/// O(n)
pub fn tour_cost(route: &[Point]) -> f64 {
    let n = route.len();
    if n < 2 {
        return 0.0;
    }

    let open: f64 = route.windows(2).map(|w| distance(w[0], w[1])).sum();
    open + distance(route[n - 1], route[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn colinear() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(6.0, 8.0),
        ]
    }

    #[test]
    fn test_distance_3_4_5() {
        let pts = colinear();
        assert_eq!(distance(pts[0], pts[1]), 5.0);
        assert_eq!(pts[0].distance(&pts[2]), 10.0);
    }

    #[test]
    fn test_tour_cost_out_and_back() {
        // 5 + 5 + 10 along y = 4/3 x
        assert!((tour_cost(&colinear()) - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_tour_cost_degenerate() {
        assert_eq!(tour_cost(&[]), 0.0);
        assert_eq!(tour_cost(&[Point::new(5.0, 5.0)]), 0.0);
    }

    #[test]
    fn test_tour_cost_two_points_counts_both_directions() {
        let route = [Point::new(0.0, 0.0), Point::new(0.0, 2.5)];
        assert!((tour_cost(&route) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_tour_cost_unit_square() {
        let square = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        assert!((tour_cost(&square) - 4.0).abs() < 1e-12);

        let crossed = [square[0], square[2], square[1], square[3]];
        assert!(tour_cost(&crossed) > tour_cost(&square));
    }

    #[test]
    fn test_point_display_and_tuple_conversion() {
        let p = Point::from((1.5, -2.0));
        assert_eq!(p.to_string(), "(1.5, -2)");
        assert_eq!(<(f64, f64)>::from(p), (1.5, -2.0));
    }

    fn coord() -> impl Strategy<Value = f64> {
        -1.0e6..1.0e6f64
    }

    fn point() -> impl Strategy<Value = Point> {
        (coord(), coord()).prop_map(Point::from)
    }

    proptest! {
        #[test]
        fn prop_distance_symmetric(a in point(), b in point()) {
            prop_assert_eq!(distance(a, b), distance(b, a));
        }

        #[test]
        fn prop_distance_identity(a in point()) {
            prop_assert_eq!(distance(a, a), 0.0);
        }

        #[test]
        fn prop_tour_cost_non_negative(route in prop::collection::vec(point(), 0..32)) {
            prop_assert!(tour_cost(&route) >= 0.0);
        }

        #[test]
        fn prop_tour_cost_zero_for_coincident_points(p in point(), n in 0usize..16) {
            prop_assert_eq!(tour_cost(&vec![p; n]), 0.0);
        }

        #[test]
        fn prop_tour_cost_rotation_invariant(
            route in prop::collection::vec(point(), 2..16),
            k in 0usize..16,
        ) {
            let mut rotated = route.clone();
            rotated.rotate_left(k % route.len());
            let a = tour_cost(&route);
            let b = tour_cost(&rotated);
            prop_assert!((a - b).abs() <= 1e-9 * a.max(1.0));
        }
    }
}
