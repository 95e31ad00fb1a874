//! Heuristic solver for the trinca covering-design problem.
//!
//! Searches for a small set of lottery games (6 distinct numbers from
//! 1–60 by default) that together cover as many 3-number sub-combinations
//! ("trincas") of the number universe as possible. Exact covering designs
//! are NP-hard in general; this crate runs a genetic algorithm over
//! fixed-size game sets instead of computing an optimum.
//!
//! # Architecture
//!
//! - [`trincas`]: the trinca universe — canonical combination ranking and
//!   the coverage bitsets fitness evaluation works on
//! - [`ga`]: the genetic engine — representation, fitness, selection,
//!   operators, and the generational loop
//! - [`error`]: configuration and degenerate-state errors, all raised
//!   before the first generation runs
//!
//! The lottery format (universe size, game size, sub-combination size) is
//! configurable per run; only the "choose g of N, cover t-subsets" shape
//! is fixed.
//!
//! # Example
//!
//! ```
//! use trinca_cover::ga::{Engine, GaConfig};
//!
//! let config = GaConfig::default()
//!     .with_format(15, 5, 3)
//!     .with_population_size(10)
//!     .with_max_generations(5)
//!     .with_seed(42);
//!
//! let result = Engine::new(config).unwrap().run();
//! println!(
//!     "covered {}/{} trincas with {} games",
//!     result.covered_trincas,
//!     result.total_trincas,
//!     result.games.len()
//! );
//! ```

pub mod error;
pub mod ga;
pub mod trincas;

pub use error::{ConfigError, EngineError};
pub use ga::{Engine, GaConfig, RunResult};
pub use trincas::{CoverageBitset, TrincaSpace};
