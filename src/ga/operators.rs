//! Genetic operators: single-point crossover and per-game mutation.
//!
//! Both operators work at the gene (game) level. Offspring always own
//! deep copies of their games, so mutating a child can never alias into a
//! parent or sibling.

use super::types::{Game, Individual};
use crate::trincas::TrincaSpace;
use rand::Rng;

/// Single-point crossover over two parents' game sequences.
///
/// With probability `rate`, a cut index is drawn uniformly from
/// `[1, game_count - 1]`; the first child takes parent A's games before the
/// cut and parent B's from the cut onward, the second child is the
/// complement. With probability `1 - rate` (or when `game_count < 2`, where
/// no cut exists) both children are exact copies of their respective
/// parents.
///
/// Parents are never modified; both children are new individuals.
///
/// # Panics
/// Panics if the parents have different game counts.
pub fn crossover<R: Rng + ?Sized>(
    parent_a: &Individual,
    parent_b: &Individual,
    rate: f64,
    rng: &mut R,
) -> (Individual, Individual) {
    let game_count = parent_a.game_count();
    assert_eq!(
        game_count,
        parent_b.game_count(),
        "parents must have equal game counts"
    );

    if game_count < 2 || rng.random_range(0.0..1.0) >= rate {
        return (parent_a.clone(), parent_b.clone());
    }

    let cut = rng.random_range(1..game_count);

    let mut games_a = Vec::with_capacity(game_count);
    games_a.extend_from_slice(&parent_a.games()[..cut]);
    games_a.extend_from_slice(&parent_b.games()[cut..]);

    let mut games_b = Vec::with_capacity(game_count);
    games_b.extend_from_slice(&parent_b.games()[..cut]);
    games_b.extend_from_slice(&parent_a.games()[cut..]);

    (Individual::from_games(games_a), Individual::from_games(games_b))
}

/// Per-game replacement mutation.
///
/// For every game, with independent probability `rate`, replaces it with a
/// freshly drawn uniform random game (same distribution as initialization).
/// The coin is flipped for every gene, so a fixed seed yields the same
/// random stream for any individual of equal game count. Replacements
/// invalidate the individual's cached coverage and fitness.
pub fn mutate<R: Rng + ?Sized>(
    individual: &mut Individual,
    rate: f64,
    space: &TrincaSpace,
    rng: &mut R,
) {
    for index in 0..individual.game_count() {
        if rng.random_range(0.0..1.0) < rate {
            let game = Game::random(rng, space.universe_size(), space.game_size());
            individual.replace_game(index, game);
        }
    }
}
