//! Tournament selection.
//!
//! Parent choice draws `k` individuals uniformly at random with replacement
//! and keeps the fittest. Higher `k` means stronger selection pressure;
//! the original system runs with `k = 5`.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::Individual;
use rand::Rng;

/// Selects a parent index by tournament.
///
/// Comparison is strict, so on fitness ties the first-encountered entrant
/// wins; given a fixed random source the outcome is fully deterministic.
/// Neither the population nor its cached scores are modified.
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament<R: Rng + ?Sized>(
    population: &[Individual],
    tournament_size: usize,
    rng: &mut R,
) -> usize {
    assert!(!population.is_empty(), "cannot select from empty population");

    let k = tournament_size.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if population[idx].fitness() > population[best_idx].fitness() {
            best_idx = idx;
        }
    }
    best_idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::types::Game;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_population(fitnesses: &[f64]) -> Vec<Individual> {
        fitnesses
            .iter()
            .map(|&f| {
                let mut ind =
                    Individual::from_games(vec![Game::from_numbers(vec![1, 2, 3, 4, 5, 6])]);
                ind.set_fitness(f);
                ind
            })
            .collect()
    }

    #[test]
    fn test_tournament_favors_best() {
        let pop = make_population(&[0.1, 0.5, 0.9, 0.2]);
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        let n = 10_000;
        for _ in 0..n {
            counts[tournament(&pop, 4, &mut rng)] += 1;
        }
        // Index 2 (fitness 0.9) should dominate.
        assert!(
            counts[2] > 6000,
            "expected best selected >60% of the time, got {}/{n}",
            counts[2]
        );
    }

    #[test]
    fn test_tournament_size_1_is_uniform() {
        let pop = make_population(&[0.1, 0.5, 0.9, 0.2]);
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        for _ in 0..10_000 {
            counts[tournament(&pop, 1, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 1500, "expected roughly uniform, got {counts:?}");
        }
    }

    #[test]
    fn test_equal_fitness_is_roughly_uniform() {
        let pop = make_population(&[0.5, 0.5, 0.5, 0.5]);
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        for _ in 0..10_000 {
            counts[tournament(&pop, 2, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(
                c > 1500,
                "expected roughly uniform with equal fitness, got {counts:?}"
            );
        }
    }

    #[test]
    fn test_deterministic_given_seed() {
        let pop = make_population(&[0.3, 0.7, 0.1, 0.6, 0.4]);
        let picks_a: Vec<usize> = {
            let mut rng = StdRng::seed_from_u64(9);
            (0..100).map(|_| tournament(&pop, 3, &mut rng)).collect()
        };
        let picks_b: Vec<usize> = {
            let mut rng = StdRng::seed_from_u64(9);
            (0..100).map(|_| tournament(&pop, 3, &mut rng)).collect()
        };
        assert_eq!(picks_a, picks_b);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<Individual> = vec![];
        let mut rng = StdRng::seed_from_u64(42);
        tournament(&pop, 3, &mut rng);
    }
}
