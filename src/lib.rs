//! Genetic-algorithm engine for the Euclidean Traveling Salesman
//! Problem.
//!
//! Given a set of 2D points and evolutionary parameters, computes a
//! near-optimal closed tour: an ordering of the points plus its total
//! length after a fixed number of generations.
//!
//! The engine is a pure in-process computation: one call to
//! [`SimulationRunner::run`] consumes a coordinate string and a
//! [`SimulationConfig`] and produces a single [`SimulationResult`].
//! There is no persisted state and nothing is shared across runs; the
//! only external dependency is the random source, which is seedable for
//! deterministic testing.
//!
//! # Components
//!
//! - [`CityTable`]: parses coordinate input, exposes pairwise Euclidean
//!   distance
//! - [`Population`]: owns one generation of candidate [`Tour`]s,
//!   randomly initialized and ranked by fitness
//! - [`operators`]: order crossover (OX) and swap mutation on raw
//!   permutations
//! - [`selection`]: elitist survivor selection and uniform parent draw
//! - [`SimulationRunner`]: the generation loop
//!
//! # Example
//!
//! ```
//! use tsp_evolve::{SimulationConfig, SimulationRunner};
//!
//! let config = SimulationConfig::default()
//!     .with_iterations(200)
//!     .with_population_size(50)
//!     .with_survival_rate(0.5)
//!     .with_seed(42);
//!
//! let result = SimulationRunner::run("0,0;0,10;10,10;10,0", &config).unwrap();
//! assert!((result.fitness - 40.0).abs() < 1e-9);
//! ```
//!
//! The algorithm is heuristic and stochastic: it does not guarantee a
//! globally optimal tour, and a run always executes its full iteration
//! count — there is no convergence detection and no mid-run
//! cancellation.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

mod cities;
mod config;
mod error;
mod fitness;
pub mod operators;
mod population;
mod runner;
pub mod selection;
mod types;

pub use cities::{City, CityTable};
pub use config::SimulationConfig;
pub use error::{Error, ParseError, ValidationError};
pub use fitness::tour_length;
pub use population::Population;
pub use runner::{SimulationResult, SimulationRunner};
pub use types::Tour;
