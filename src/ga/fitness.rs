//! Coverage-based fitness evaluation.
//!
//! Fitness combines two terms:
//!
//! - **coverage ratio**: distinct trincas covered / total trincas, in `[0, 1]`
//! - **redundancy penalty**: covering slots spent on already-covered trincas
//!   (`game_count × trincas_per_game − covered`), normalized by total slot
//!   capacity and scaled by a tunable weight
//!
//! With a fixed game count the score is strictly increasing in the number of
//! distinct trincas covered, so the two hard ordering contracts hold for any
//! non-negative weight: identical coverage and redundancy rank identically,
//! and strictly better coverage at equal-or-lower redundancy ranks strictly
//! higher. Higher is better.

use super::types::Individual;
use crate::trincas::TrincaSpace;

/// Scores individuals against a shared, read-only [`TrincaSpace`].
#[derive(Debug, Clone, Copy)]
pub struct FitnessEvaluator<'a> {
    space: &'a TrincaSpace,
    redundancy_weight: f64,
}

impl<'a> FitnessEvaluator<'a> {
    /// Creates an evaluator with the given redundancy penalty weight.
    pub fn new(space: &'a TrincaSpace, redundancy_weight: f64) -> Self {
        Self {
            space,
            redundancy_weight,
        }
    }

    /// Computes the individual's fitness and caches it on the individual.
    ///
    /// Pure in everything except the individual's own caches, so
    /// populations can be evaluated in parallel with no shared scratch
    /// space.
    pub fn score(&self, individual: &mut Individual) -> f64 {
        let covered = individual.covered_count(self.space);
        let total = self.space.total_trincas();
        let capacity = individual.game_count() * self.space.trincas_per_game();

        let ratio = covered as f64 / total as f64;
        // Distinct coverage never exceeds slot capacity.
        let overlap = capacity - covered;
        let penalty = self.redundancy_weight * overlap as f64 / capacity as f64;

        let fitness = ratio - penalty;
        individual.set_fitness(fitness);
        fitness
    }

    /// Fraction of all trincas covered by the individual, in `[0, 1]`.
    pub fn coverage_ratio(&self, individual: &mut Individual) -> f64 {
        individual.covered_count(self.space) as f64 / self.space.total_trincas() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::types::Game;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn space() -> TrincaSpace {
        TrincaSpace::new(10, 4, 3)
    }

    #[test]
    fn test_score_is_deterministic_for_equal_games() {
        let space = space();
        let evaluator = FitnessEvaluator::new(&space, 0.05);
        let games = vec![
            Game::from_numbers(vec![1, 2, 3, 4]),
            Game::from_numbers(vec![5, 6, 7, 8]),
        ];
        let mut a = Individual::from_games(games.clone());
        let mut b = Individual::from_games(games);
        assert_eq!(evaluator.score(&mut a), evaluator.score(&mut b));
    }

    #[test]
    fn test_duplicate_games_score_below_disjoint_games() {
        let space = space();
        let evaluator = FitnessEvaluator::new(&space, 0.05);

        let mut duplicated = Individual::from_games(vec![
            Game::from_numbers(vec![1, 2, 3, 4]),
            Game::from_numbers(vec![1, 2, 3, 4]),
        ]);
        let mut disjoint = Individual::from_games(vec![
            Game::from_numbers(vec![1, 2, 3, 4]),
            Game::from_numbers(vec![5, 6, 7, 8]),
        ]);

        assert!(evaluator.score(&mut disjoint) > evaluator.score(&mut duplicated));
    }

    #[test]
    fn test_score_increases_with_coverage() {
        // With a fixed game count, more distinct trincas must always score
        // strictly higher, for any weight.
        let space = space();
        for weight in [0.0, 0.05, 0.5] {
            let evaluator = FitnessEvaluator::new(&space, weight);
            let mut rng = StdRng::seed_from_u64(42);
            let mut scored: Vec<(usize, f64)> = (0..50)
                .map(|_| {
                    let mut ind = Individual::random(&mut rng, &space, 3);
                    let fitness = evaluator.score(&mut ind);
                    (ind.covered_count(&space), fitness)
                })
                .collect();
            scored.sort_by(|a, b| a.0.cmp(&b.0));
            for pair in scored.windows(2) {
                if pair[1].0 > pair[0].0 {
                    assert!(
                        pair[1].1 > pair[0].1,
                        "coverage {} scored {} but coverage {} scored {}",
                        pair[0].0,
                        pair[0].1,
                        pair[1].0,
                        pair[1].1
                    );
                }
            }
        }
    }

    #[test]
    fn test_score_is_cached_on_individual() {
        let space = space();
        let evaluator = FitnessEvaluator::new(&space, 0.05);
        let mut ind = Individual::from_games(vec![Game::from_numbers(vec![1, 2, 3, 4])]);
        let fitness = evaluator.score(&mut ind);
        assert_eq!(ind.fitness(), fitness);
    }

    #[test]
    fn test_coverage_ratio_bounds() {
        let space = space();
        let evaluator = FitnessEvaluator::new(&space, 0.05);
        let mut rng = StdRng::seed_from_u64(42);
        let mut ind = Individual::random(&mut rng, &space, 4);
        let ratio = evaluator.coverage_ratio(&mut ind);
        assert!((0.0..=1.0).contains(&ratio));
    }

    #[test]
    fn test_zero_weight_equals_pure_coverage_ratio() {
        let space = space();
        let evaluator = FitnessEvaluator::new(&space, 0.0);
        let mut rng = StdRng::seed_from_u64(42);
        let mut ind = Individual::random(&mut rng, &space, 3);
        let fitness = evaluator.score(&mut ind);
        let ratio = evaluator.coverage_ratio(&mut ind);
        assert!((fitness - ratio).abs() < 1e-12);
    }
}
