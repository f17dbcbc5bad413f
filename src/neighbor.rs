//! Neighbor generation for route search.
//!
//! The move is a two-position exchange: pick two distinct positions
//! uniformly at random and swap the points there. The input route is
//! never touched; callers get an independent copy.

use crate::error::{Result, TspError};
use crate::geometry::Point;
use rand::Rng;

/// Returns a copy of `route` with the points at two distinct random
/// positions exchanged.
///
/// The result has the same length and the same multiset of points.
///
/// # Errors
/// [`TspError::InvalidInput`] if `route` has fewer than two points, since
/// no pair of distinct positions exists.
///
/// # Complexity
/// O(n) for the copy, O(1) for the move
pub fn perturb<R: Rng>(route: &[Point], rng: &mut R) -> Result<Vec<Point>> {
    if route.len() < 2 {
        return Err(TspError::invalid_input(format!(
            "perturb needs at least 2 points, got {}",
            route.len()
        )));
    }
    Ok(swap_distinct(route, rng))
}

/// Infallible core of [`perturb`]. Requires `route.len() >= 2`.
pub(crate) fn swap_distinct<R: Rng>(route: &[Point], rng: &mut R) -> Vec<Point> {
    let mut next = route.to_vec();
    let (i, j) = distinct_pair(route.len(), rng);
    next.swap(i, j);
    next
}

/// Draws an unordered pair of distinct indices in `0..n`, uniformly.
///
/// The second index is drawn from the `n - 1` remaining slots and shifted
/// past the first, which is sampling without replacement.
fn distinct_pair<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    debug_assert!(n >= 2);
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    (i, j)
}
