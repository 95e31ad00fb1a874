//! GA configuration.
//!
//! [`GaConfig`] holds every hyperparameter of the covering search.

use crate::error::ConfigError;

/// Configuration for the genetic covering search.
///
/// Controls the lottery format (universe size, game size, sub-combination
/// size), the GA hyperparameters, termination conditions, and parallelism.
///
/// # Defaults
///
/// ```
/// use trinca_cover::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 20);
/// assert_eq!(config.max_generations, 30);
/// assert_eq!(config.universe_size, 60);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use trinca_cover::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// ```
///
/// Setters do not validate; [`validate`](Self::validate) rejects invalid
/// values with a descriptive [`ConfigError`] instead of clamping them.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population.
    pub population_size: usize,

    /// Maximum number of generations before termination.
    pub max_generations: usize,

    /// Per-game probability of replacement during mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Probability of recombining a parent pair (0.0–1.0).
    ///
    /// When crossover is not applied, children are plain copies of their
    /// respective parents.
    pub crossover_rate: f64,

    /// Number of best individuals copied unchanged to the next generation.
    pub elite_size: usize,

    /// Tournament size for parent selection.
    pub tournament_size: usize,

    /// Scales the theoretical minimum covering size into the per-individual
    /// game count: `game_count = floor(minimum × games_multiplier)`.
    pub games_multiplier: f64,

    /// Size of the number universe `N` (numbers are drawn from `1..=N`).
    pub universe_size: u16,

    /// Numbers per game.
    pub game_size: usize,

    /// Numbers per covered sub-combination (trinca).
    pub subcombination_size: usize,

    /// Weight of the redundancy penalty in the fitness score.
    ///
    /// Penalizes covering slots spent on already-covered trincas, biasing
    /// the search toward diverse, non-overlapping games. Any non-negative
    /// weight preserves the fitness ordering contract.
    pub redundancy_weight: f64,

    /// Number of generations with no strict best improvement before
    /// stopping. 0 disables stagnation-based termination (the default).
    pub stagnation_limit: usize,

    /// Optional wall-clock time limit in milliseconds, checked at the start
    /// of each generation. `None` disables time-based termination.
    pub time_limit_ms: Option<u64>,

    /// Whether to evaluate individuals in parallel using rayon.
    ///
    /// Evaluation is pure per individual, so parallel and sequential runs
    /// of the same seed produce identical results.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            max_generations: 30,
            mutation_rate: 0.1,
            crossover_rate: 0.8,
            elite_size: 2,
            tournament_size: 5,
            games_multiplier: 1.5,
            universe_size: 60,
            game_size: 6,
            subcombination_size: 3,
            redundancy_weight: 0.05,
            stagnation_limit: 0,
            time_limit_ms: None,
            parallel: true,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the per-game mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the elite size.
    pub fn with_elite_size(mut self, n: usize) -> Self {
        self.elite_size = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the games multiplier.
    pub fn with_games_multiplier(mut self, multiplier: f64) -> Self {
        self.games_multiplier = multiplier;
        self
    }

    /// Sets the lottery format: universe size, game size, and
    /// sub-combination size.
    pub fn with_format(
        mut self,
        universe_size: u16,
        game_size: usize,
        subcombination_size: usize,
    ) -> Self {
        self.universe_size = universe_size;
        self.game_size = game_size;
        self.subcombination_size = subcombination_size;
        self
    }

    /// Sets the redundancy penalty weight.
    pub fn with_redundancy_weight(mut self, weight: f64) -> Self {
        self.redundancy_weight = weight;
        self
    }

    /// Sets the stagnation limit (0 to disable).
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns the first invalid parameter found. Values are never clamped;
    /// out-of-range rates and oversized elite/tournament settings are hard
    /// errors caught before any generation runs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.max_generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        check_rate("mutation_rate", self.mutation_rate)?;
        check_rate("crossover_rate", self.crossover_rate)?;
        if self.elite_size >= self.population_size {
            return Err(ConfigError::EliteTooLarge {
                elite_size: self.elite_size,
                population_size: self.population_size,
            });
        }
        if self.subcombination_size == 0 {
            return Err(ConfigError::ZeroSubcombination);
        }
        if self.game_size <= self.subcombination_size {
            return Err(ConfigError::GameTooSmall {
                game_size: self.game_size,
                subcombination_size: self.subcombination_size,
            });
        }
        if (self.universe_size as usize) < self.game_size {
            return Err(ConfigError::UniverseTooSmall {
                universe_size: self.universe_size,
                game_size: self.game_size,
            });
        }
        if self.tournament_size == 0 {
            return Err(ConfigError::ZeroTournament);
        }
        if !self.games_multiplier.is_finite() || self.games_multiplier <= 0.0 {
            return Err(ConfigError::InvalidMultiplier(self.games_multiplier));
        }
        if !self.redundancy_weight.is_finite() || self.redundancy_weight < 0.0 {
            return Err(ConfigError::InvalidRedundancyWeight(self.redundancy_weight));
        }
        if self.time_limit_ms == Some(0) {
            return Err(ConfigError::ZeroTimeLimit);
        }
        Ok(())
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::RateOutOfRange { name, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 20);
        assert_eq!(config.max_generations, 30);
        assert!((config.mutation_rate - 0.1).abs() < 1e-10);
        assert!((config.crossover_rate - 0.8).abs() < 1e-10);
        assert_eq!(config.elite_size, 2);
        assert_eq!(config.tournament_size, 5);
        assert!((config.games_multiplier - 1.5).abs() < 1e-10);
        assert_eq!(config.universe_size, 60);
        assert_eq!(config.game_size, 6);
        assert_eq!(config.subcombination_size, 3);
        assert_eq!(config.stagnation_limit, 0);
        assert!(config.parallel);
        assert!(config.seed.is_none());
        assert!(config.time_limit_ms.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(50)
            .with_max_generations(100)
            .with_mutation_rate(0.05)
            .with_crossover_rate(0.9)
            .with_elite_size(4)
            .with_tournament_size(3)
            .with_games_multiplier(2.0)
            .with_format(25, 5, 3)
            .with_stagnation_limit(10)
            .with_parallel(false)
            .with_seed(7);

        assert_eq!(config.population_size, 50);
        assert_eq!(config.max_generations, 100);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert!((config.crossover_rate - 0.9).abs() < 1e-10);
        assert_eq!(config.elite_size, 4);
        assert_eq!(config.tournament_size, 3);
        assert_eq!(config.universe_size, 25);
        assert_eq!(config.game_size, 5);
        assert_eq!(config.subcombination_size, 3);
        assert_eq!(config.stagnation_limit, 10);
        assert!(!config.parallel);
        assert_eq!(config.seed, Some(7));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = GaConfig::default().with_population_size(1);
        assert_eq!(config.validate(), Err(ConfigError::PopulationTooSmall(1)));
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = GaConfig::default().with_max_generations(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroGenerations));
    }

    #[test]
    fn test_validate_rejects_out_of_range_rates() {
        let config = GaConfig::default().with_mutation_rate(1.5);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RateOutOfRange {
                name: "mutation_rate",
                ..
            })
        ));

        let config = GaConfig::default().with_crossover_rate(-0.1);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RateOutOfRange {
                name: "crossover_rate",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rates_are_not_clamped() {
        // Setters keep the raw value; only validate() rejects it.
        let config = GaConfig::default().with_mutation_rate(2.0);
        assert!((config.mutation_rate - 2.0).abs() < 1e-10);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_elite_too_large() {
        let config = GaConfig::default()
            .with_population_size(10)
            .with_elite_size(10);
        assert_eq!(
            config.validate(),
            Err(ConfigError::EliteTooLarge {
                elite_size: 10,
                population_size: 10
            })
        );
    }

    #[test]
    fn test_validate_universe_too_small() {
        let config = GaConfig::default().with_format(5, 6, 3);
        assert_eq!(
            config.validate(),
            Err(ConfigError::UniverseTooSmall {
                universe_size: 5,
                game_size: 6
            })
        );
    }

    #[test]
    fn test_validate_game_not_larger_than_subcombination() {
        let config = GaConfig::default().with_format(60, 3, 3);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GameTooSmall { .. })
        ));
    }

    #[test]
    fn test_validate_zero_subcombination() {
        let config = GaConfig::default().with_format(60, 6, 0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroSubcombination));
    }

    #[test]
    fn test_validate_invalid_multiplier() {
        let config = GaConfig::default().with_games_multiplier(0.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMultiplier(_))
        ));
    }

    #[test]
    fn test_validate_zero_time_limit() {
        let config = GaConfig::default().with_time_limit_ms(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroTimeLimit));
    }

    #[test]
    fn test_validate_negative_redundancy_weight() {
        let config = GaConfig::default().with_redundancy_weight(-0.01);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRedundancyWeight(_))
        ));
    }
}
