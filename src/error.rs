//! Error taxonomy for engine construction.
//!
//! All errors here are raised before the first generation runs. Stochastic
//! outcomes of the search itself (low coverage, slow convergence) are never
//! errors; they are reported as data in [`RunResult`](crate::ga::RunResult).

use thiserror::Error;

/// An invalid hyperparameter in [`GaConfig`](crate::ga::GaConfig).
///
/// Raised by [`GaConfig::validate`](crate::ga::GaConfig::validate) and by
/// [`Engine::new`](crate::ga::Engine::new). Values are rejected, never
/// silently clamped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    #[error("max_generations must be at least 1")]
    ZeroGenerations,

    #[error("{name} must be within [0.0, 1.0], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },

    #[error("elite_size ({elite_size}) must be smaller than population_size ({population_size})")]
    EliteTooLarge {
        elite_size: usize,
        population_size: usize,
    },

    #[error("universe_size ({universe_size}) must be at least game_size ({game_size})")]
    UniverseTooSmall {
        universe_size: u16,
        game_size: usize,
    },

    #[error("game_size ({game_size}) must be larger than subcombination_size ({subcombination_size})")]
    GameTooSmall {
        game_size: usize,
        subcombination_size: usize,
    },

    #[error("subcombination_size must be at least 1")]
    ZeroSubcombination,

    #[error("tournament_size must be at least 1")]
    ZeroTournament,

    #[error("games_multiplier must be positive and finite, got {0}")]
    InvalidMultiplier(f64),

    #[error("derived game_count is zero (games_multiplier {games_multiplier} too small for a minimum of {theoretical_minimum} games)")]
    ZeroGameCount {
        games_multiplier: f64,
        theoretical_minimum: usize,
    },

    #[error("redundancy_weight must be non-negative and finite, got {0}")]
    InvalidRedundancyWeight(f64),

    #[error("time_limit_ms must be positive or None")]
    ZeroTimeLimit,
}

/// Failure modes of [`Engine::new`](crate::ga::Engine::new).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// An invalid hyperparameter value.
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigError),

    /// A parameter combination that would make the search degenerate,
    /// e.g. a tournament larger than the population it samples from.
    #[error("degenerate state: {0}")]
    DegenerateState(String),
}
