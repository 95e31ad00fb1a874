//! Generational loop execution.
//!
//! [`Engine`] orchestrates the complete search:
//! initialization → evaluation → selection → crossover → mutation →
//! replacement with elitism, repeated until a stopping criterion.

use super::config::GaConfig;
use super::fitness::FitnessEvaluator;
use super::operators::{crossover, mutate};
use super::selection::tournament;
use super::types::{Game, Individual};
use crate::error::{ConfigError, EngineError};
use crate::trincas::TrincaSpace;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::time::Instant;

/// Result of a covering search run.
///
/// Carries the best individual found across the entire run together with
/// its coverage statistics — the report handed to external consumers.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunResult {
    /// Games of the best individual ever observed.
    pub games: Vec<Game>,

    /// Fitness of the best individual (higher is better).
    pub fitness: f64,

    /// Fraction of all trincas covered by the best individual, in `[0, 1]`.
    pub coverage_ratio: f64,

    /// Distinct trincas covered by the best individual.
    pub covered_trincas: usize,

    /// Size of the trinca universe, `C(N, t)`.
    pub total_trincas: usize,

    /// Generation at which the best individual was first observed
    /// (0 = initial population).
    pub generation_found: usize,

    /// Number of generations actually executed.
    pub generations: usize,

    /// Whether the run stopped early because every trinca was covered.
    pub fully_covered: bool,

    /// Whether the run stopped early due to the stagnation limit.
    pub stagnated: bool,

    /// Best-ever fitness after the initial evaluation and after each
    /// generation.
    pub fitness_history: Vec<f64>,
}

/// Drives the genetic covering search.
///
/// Construction validates the configuration and precomputes the shared
/// [`TrincaSpace`]; both error classes of the taxonomy are raised here,
/// before any generation runs.
///
/// # Usage
///
/// ```
/// use trinca_cover::ga::{Engine, GaConfig};
///
/// let config = GaConfig::default()
///     .with_format(15, 5, 3)
///     .with_max_generations(5)
///     .with_seed(42)
///     .with_parallel(false);
/// let engine = Engine::new(config).unwrap();
/// let result = engine.run();
/// assert!(result.coverage_ratio <= 1.0);
/// ```
#[derive(Debug)]
pub struct Engine {
    config: GaConfig,
    space: TrincaSpace,
    game_count: usize,
}

impl Engine {
    /// Builds an engine for `config`.
    ///
    /// Fails fast on any invalid hyperparameter; values are never clamped.
    pub fn new(config: GaConfig) -> Result<Self, EngineError> {
        config.validate()?;
        if config.tournament_size > config.population_size {
            return Err(EngineError::DegenerateState(format!(
                "tournament_size ({}) exceeds population_size ({})",
                config.tournament_size, config.population_size
            )));
        }

        let space = TrincaSpace::new(
            config.universe_size,
            config.game_size,
            config.subcombination_size,
        );

        // Theoretical minimum covering size (each game covers at most
        // trincas_per_game new trincas), scaled by the multiplier.
        let theoretical_minimum = space.total_trincas().div_ceil(space.trincas_per_game());
        let game_count = (theoretical_minimum as f64 * config.games_multiplier) as usize;
        if game_count == 0 {
            return Err(ConfigError::ZeroGameCount {
                games_multiplier: config.games_multiplier,
                theoretical_minimum,
            }
            .into());
        }

        Ok(Self {
            config,
            space,
            game_count,
        })
    }

    /// The configuration this engine runs with.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// The shared trinca universe.
    pub fn space(&self) -> &TrincaSpace {
        &self.space
    }

    /// Games per individual, derived from the theoretical minimum covering
    /// size and `games_multiplier`.
    pub fn game_count(&self) -> usize {
        self.game_count
    }

    /// Runs the search and returns the best individual found.
    ///
    /// Deterministic for a fixed seed: the single random generator is only
    /// consumed on the sequential path, and parallel evaluation is pure per
    /// individual.
    pub fn run(&self) -> RunResult {
        let config = &self.config;
        let evaluator = FitnessEvaluator::new(&self.space, config.redundancy_weight);
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        let start = Instant::now();
        let total = self.space.total_trincas();

        // Initialize + evaluate generation zero.
        let mut population: Vec<Individual> = (0..config.population_size)
            .map(|_| Individual::random(&mut rng, &self.space, self.game_count))
            .collect();
        self.evaluate(&evaluator, &mut population);

        // Best-ever lives outside the population so replacement can never
        // lose it; ties go to the lowest original index.
        let mut best = population[best_index(&population)].clone();
        let mut best_generation = 0;
        let mut best_covered = best.covered_count(&self.space);
        let mut fitness_history = vec![best.fitness()];

        let mut generations = 0;
        let mut stagnation_counter = 0usize;
        let mut stagnated = false;

        for generation in 1..=config.max_generations {
            // Further generations cannot improve coverage once it is full,
            // only redundancy.
            if best_covered == total {
                info!("full trinca coverage reached, stopping after generation {generations}");
                break;
            }
            if let Some(limit) = config.time_limit_ms {
                if start.elapsed().as_millis() as u64 >= limit {
                    info!("time limit of {limit} ms reached after generation {generations}");
                    break;
                }
            }

            // Rank for elitism; stable sort keeps original order on ties.
            population.sort_by(|a, b| {
                b.fitness()
                    .partial_cmp(&a.fitness())
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            let mut next_gen: Vec<Individual> = population[..config.elite_size].to_vec();

            // Breed offspring; elites may still win tournaments as parents.
            while next_gen.len() < config.population_size {
                let p1 = tournament(&population, config.tournament_size, &mut rng);
                let p2 = tournament(&population, config.tournament_size, &mut rng);
                let (mut child_a, mut child_b) = crossover(
                    &population[p1],
                    &population[p2],
                    config.crossover_rate,
                    &mut rng,
                );
                mutate(&mut child_a, config.mutation_rate, &self.space, &mut rng);
                mutate(&mut child_b, config.mutation_rate, &self.space, &mut rng);

                next_gen.push(child_a);
                if next_gen.len() < config.population_size {
                    next_gen.push(child_b);
                }
            }

            // Elites keep their cached scores; only offspring are evaluated.
            self.evaluate(&evaluator, &mut next_gen[config.elite_size..]);
            population = next_gen;
            generations = generation;

            // Strict improvement only, to avoid churn on ties.
            let gen_best = best_index(&population);
            if population[gen_best].fitness() > best.fitness() {
                best = population[gen_best].clone();
                best_generation = generation;
                best_covered = best.covered_count(&self.space);
                stagnation_counter = 0;
            } else {
                stagnation_counter += 1;
            }
            fitness_history.push(best.fitness());

            debug!(
                "generation {generation}: best fitness {:.6}, coverage {best_covered}/{total}",
                best.fitness()
            );

            if config.stagnation_limit > 0 && stagnation_counter >= config.stagnation_limit {
                info!("no improvement in {stagnation_counter} generations, stopping");
                stagnated = true;
                break;
            }
        }

        let coverage_ratio = best_covered as f64 / total as f64;
        info!(
            "search finished: {generations} generations, {} games, coverage {:.4} ({best_covered}/{total})",
            self.game_count, coverage_ratio
        );

        RunResult {
            games: best.games().to_vec(),
            fitness: best.fitness(),
            coverage_ratio,
            covered_trincas: best_covered,
            total_trincas: total,
            generation_found: best_generation,
            generations,
            fully_covered: best_covered == total,
            stagnated,
            fitness_history,
        }
    }

    /// Evaluates fitness for every individual in `individuals`.
    ///
    /// Evaluation is embarrassingly parallel: the space is read-only and
    /// each coverage bitset is computed with no shared scratch.
    fn evaluate(&self, evaluator: &FitnessEvaluator<'_>, individuals: &mut [Individual]) {
        if self.config.parallel {
            individuals.par_iter_mut().for_each(|ind| {
                evaluator.score(ind);
            });
        } else {
            for ind in individuals.iter_mut() {
                evaluator.score(ind);
            }
        }
    }
}

/// Index of the fittest individual; ties go to the lowest index.
fn best_index(population: &[Individual]) -> usize {
    let mut best = 0;
    for (i, ind) in population.iter().enumerate().skip(1) {
        if ind.fitness() > population[best].fitness() {
            best = i;
        }
    }
    best
}
