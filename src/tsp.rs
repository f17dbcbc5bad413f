//! Euclidean TSP on top of the generic annealing runner.
//!
//! [`RouteProblem`] plugs routes over a fixed point set into
//! [`SaProblem`]; [`solve`] and friends add the parameter check and the
//! degenerate 0/1-point short circuit in front of the search loop.

use crate::error::Result;
use crate::geometry::{tour_cost, Point};
use crate::neighbor::swap_distinct;
use crate::random::{create_rng, resolve_seed};
use crate::sa::{SaConfig, SaProblem, SaResult, SaRunner};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// A closed tour and its length.
///
/// `cost` is always exactly `tour_cost(&route)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    pub route: Vec<Point>,
    pub cost: f64,
}

impl Tour {
    /// The trivial tour for zero or one point.
    fn trivial(points: &[Point]) -> Self {
        Self {
            route: points.to_vec(),
            cost: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.route.len()
    }

    pub fn is_empty(&self) -> bool {
        self.route.is_empty()
    }
}

impl From<SaResult<Vec<Point>>> for Tour {
    fn from(result: SaResult<Vec<Point>>) -> Self {
        Self {
            route: result.best,
            cost: result.best_cost,
        }
    }
}

/// Routes over a fixed set of points, scored by closed Euclidean length.
#[derive(Debug, Clone)]
pub struct RouteProblem {
    points: Vec<Point>,
}

impl RouteProblem {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl SaProblem for RouteProblem {
    type Solution = Vec<Point>;

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Vec<Point> {
        let mut route = self.points.clone();
        route.shuffle(rng);
        route
    }

    fn cost(&self, route: &Vec<Point>) -> f64 {
        tour_cost(route)
    }

    fn neighbor<R: Rng>(&self, route: &Vec<Point>, rng: &mut R) -> Vec<Point> {
        // no pair to exchange
        if route.len() < 2 {
            return route.clone();
        }
        swap_distinct(route, rng)
    }
}

/// Approximates the shortest closed tour through `points`.
///
/// Validates `config` first, then returns the trivial tour for zero or one
/// point without drawing any randomness. Otherwise starts from a random
/// permutation and anneals with two-position swaps.
///
/// # Errors
/// [`TspError::InvalidScheduleParameters`](crate::TspError::InvalidScheduleParameters)
/// if the schedule is invalid.
///
/// # Examples
///
/// ```
/// use tsp_anneal::{random::create_rng, solve, Point, SaConfig};
///
/// let points = vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(6.0, 8.0)];
/// let tour = solve(&points, &SaConfig::default(), &mut create_rng(7)).unwrap();
/// assert_eq!(tour.len(), 3);
/// assert!((tour.cost - 20.0).abs() < 1e-9);
/// ```
pub fn solve<R: Rng>(points: &[Point], config: &SaConfig, rng: &mut R) -> Result<Tour> {
    config.validate()?;
    if points.len() < 2 {
        return Ok(Tour::trivial(points));
    }
    let result = SaRunner::run(&RouteProblem::new(points.to_vec()), config, rng)?;
    Ok(result.into())
}

/// Like [`solve`], but seeds a fresh generator from `config.seed`.
///
/// Without a seed one is drawn at random and logged at debug level so the
/// run can be replayed.
pub fn solve_seeded(points: &[Point], config: &SaConfig) -> Result<Tour> {
    let seed = resolve_seed(config.seed);
    debug!("solving {} points with seed {seed}", points.len());
    solve(points, config, &mut create_rng(seed))
}

/// Like [`solve`], but returns the full run statistics and polls `cancel`
/// between iterations.
///
/// For zero or one point the result reports zero iterations and a final
/// temperature equal to the initial one.
pub fn solve_with_cancel<R: Rng>(
    points: &[Point],
    config: &SaConfig,
    rng: &mut R,
    cancel: Option<Arc<AtomicBool>>,
) -> Result<SaResult<Vec<Point>>> {
    config.validate()?;
    if points.len() < 2 {
        return Ok(SaResult {
            best: points.to_vec(),
            best_cost: 0.0,
            iterations: 0,
            final_temperature: config.initial_temperature,
            accepted_moves: 0,
            improving_moves: 0,
            cancelled: false,
            cost_history: vec![0.0],
        });
    }
    SaRunner::run_with_cancel(&RouteProblem::new(points.to_vec()), config, rng, cancel)
}
