//! Genetic engine for the trinca covering search.
//!
//! Individuals are fixed-size sequences of lottery games; fitness rewards
//! trinca coverage and penalizes redundant overlap. Evolution uses
//! tournament selection, single-point crossover at the game level,
//! per-game replacement mutation, and elitism.
//!
//! # Key Types
//!
//! - [`GaConfig`]: hyperparameters, lottery format, termination settings
//! - [`Game`] / [`Individual`]: solution representation with cached
//!   coverage and fitness
//! - [`FitnessEvaluator`]: coverage-ratio scoring with redundancy penalty
//! - [`Engine`]: runs the generational loop
//! - [`RunResult`]: best individual found plus coverage statistics
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

mod config;
mod fitness;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use fitness::FitnessEvaluator;
pub use runner::{Engine, RunResult};
pub use selection::tournament;
pub use types::{Game, Individual};
