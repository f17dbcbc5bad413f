//! Approximate shortest closed tours over 2D points via simulated annealing.
//!
//! The optimisation core consumes a slice of [`Point`]s and returns a
//! [`Tour`]: a permutation of the input together with its exact closed
//! Euclidean length. It knows nothing about files or output formatting.
//!
//! - [`geometry`]: points, Euclidean distance, closed-tour length.
//! - [`neighbor`]: the two-position swap move.
//! - [`sa`]: a generic annealing runner with geometric cooling and the
//!   Metropolis acceptance test.
//! - [`tsp`]: the route problem plugged into the runner, plus [`solve`].
//! - [`points`]: reading `x,y` text files, used by the command-line front end.
//!
//! All randomness flows through an explicit generator, so a fixed seed
//! reproduces a run exactly.
//!
//! ```
//! use tsp_anneal::{random::create_rng, solve, Point, SaConfig};
//!
//! let square = [
//!     Point::new(0.0, 0.0),
//!     Point::new(0.0, 1.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(1.0, 1.0),
//! ];
//! let tour = solve(&square, &SaConfig::default(), &mut create_rng(1)).unwrap();
//! assert!((tour.cost - 4.0).abs() < 1e-9);
//! ```

pub mod error;
pub mod geometry;
pub mod neighbor;
pub mod points;
pub mod random;
pub mod sa;
pub mod tsp;

pub use error::{Result, TspError};
pub use geometry::{distance, tour_cost, Point};
pub use neighbor::perturb;
pub use sa::SaConfig;
pub use tsp::{solve, solve_seeded, solve_with_cancel, Tour};
