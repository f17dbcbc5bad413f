//! SA execution loop.

use super::config::{cool, SaConfig};
use super::types::SaProblem;
use crate::error::Result;
use log::{debug, trace};
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Best cost is sampled into the history every this many iterations.
const HISTORY_INTERVAL: usize = 100;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Cost of the best solution, as returned by `SaProblem::cost(&best)`.
    pub best_cost: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best cost sampled at regular intervals. Non-increasing.
    pub cost_history: Vec<f64>,
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA to completion with the given random source.
    ///
    /// # Errors
    /// [`TspError::InvalidScheduleParameters`](crate::TspError::InvalidScheduleParameters)
    /// if `config` fails validation. Nothing is drawn from `rng` in that case.
    pub fn run<P: SaProblem, R: Rng>(
        problem: &P,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult<P::Solution>> {
        Self::run_with_cancel(problem, config, rng, None)
    }

    /// Runs SA with an optional cancellation token.
    ///
    /// The flag is polled once per iteration, after cooling. A cancelled run
    /// still returns the best solution found so far.
    pub fn run_with_cancel<P: SaProblem, R: Rng>(
        problem: &P,
        config: &SaConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult<P::Solution>> {
        config.validate()?;

        debug!(
            "annealing: T0={}, rate={}, Tmin={}, {} iterations scheduled",
            config.initial_temperature,
            config.cooling_rate,
            config.min_temperature,
            config.schedule_length()
        );

        let mut current = problem.initial_solution(rng);
        let mut current_cost = problem.cost(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cancelled = false;

        let mut cost_history = vec![best_cost];

        while temperature > config.min_temperature {
            let candidate = problem.neighbor(&current, rng);
            let candidate_cost = problem.cost(&candidate);

            // Metropolis acceptance criterion
            let accept = if candidate_cost < current_cost {
                improving_moves += 1;
                true
            } else {
                let probability = ((current_cost - candidate_cost) / temperature).exp();
                rng.random_range(0.0..1.0) < probability
            };

            if accept {
                current = candidate;
                current_cost = candidate_cost;
                accepted_moves += 1;

                if current_cost < best_cost {
                    best = current.clone();
                    best_cost = current_cost;
                    trace!("iteration {iterations}: new best {best_cost} at T={temperature}");
                }
            }

            iterations += 1;
            if iterations.is_multiple_of(HISTORY_INTERVAL) {
                cost_history.push(best_cost);
            }

            temperature = cool(temperature, config);

            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
        }

        if cost_history.last().is_none_or(|&last| last != best_cost) {
            cost_history.push(best_cost);
        }

        debug!(
            "annealing finished: best={best_cost}, iterations={iterations}, \
             accepted={accepted_moves}, improving={improving_moves}, cancelled={cancelled}"
        );

        Ok(SaResult {
            best,
            best_cost,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cancelled,
            cost_history,
        })
    }
}
