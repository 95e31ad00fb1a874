//! Solution representation: games and individuals.
//!
//! A [`Game`] is one lottery ticket (6 distinct numbers by default); an
//! [`Individual`] is a candidate covering — a fixed-size sequence of games
//! with lazily cached coverage and fitness.

use crate::trincas::{CoverageBitset, TrincaSpace};
use rand::Rng;

/// One lottery game: a fixed number of distinct numbers from `1..=N`,
/// stored sorted so equal number sets compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Game {
    numbers: Vec<u16>,
}

impl Game {
    /// Builds a game from explicit numbers, normalizing order.
    ///
    /// # Panics
    /// Panics if `numbers` contains duplicates.
    pub fn from_numbers(mut numbers: Vec<u16>) -> Self {
        numbers.sort_unstable();
        assert!(
            numbers.windows(2).all(|w| w[0] != w[1]),
            "game numbers must be distinct"
        );
        Self { numbers }
    }

    /// Draws a uniformly random `game_size`-of-`universe_size` game,
    /// sampling without replacement within the game.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, universe_size: u16, game_size: usize) -> Self {
        let mut numbers: Vec<u16> =
            rand::seq::index::sample(rng, universe_size as usize, game_size)
                .iter()
                .map(|i| i as u16 + 1)
                .collect();
        numbers.sort_unstable();
        Self { numbers }
    }

    /// The game's numbers in ascending order.
    pub fn numbers(&self) -> &[u16] {
        &self.numbers
    }

    /// Numbers in this game.
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// `true` if the game holds no numbers (never produced by this crate).
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

/// A candidate solution: an ordered sequence of exactly `game_count` games.
///
/// Games are owned exclusively; crossover deep-copies them so mutating one
/// individual can never alias into another. Coverage and fitness are cached
/// and invalidated whenever any game changes.
#[derive(Debug, Clone)]
pub struct Individual {
    games: Vec<Game>,
    coverage: Option<CoverageBitset>,
    fitness: Option<f64>,
}

impl Individual {
    /// Creates an individual of `game_count` independent uniformly random
    /// games.
    ///
    /// Duplicate games across the individual are permitted — a known
    /// inefficiency the redundancy penalty discourages rather than the
    /// representation forbidding it.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, space: &TrincaSpace, game_count: usize) -> Self {
        let games = (0..game_count)
            .map(|_| Game::random(rng, space.universe_size(), space.game_size()))
            .collect();
        Self {
            games,
            coverage: None,
            fitness: None,
        }
    }

    /// Builds an individual from explicit games.
    pub fn from_games(games: Vec<Game>) -> Self {
        Self {
            games,
            coverage: None,
            fitness: None,
        }
    }

    /// The individual's games, in gene order.
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    /// Number of games (constant over the individual's lifetime).
    pub fn game_count(&self) -> usize {
        self.games.len()
    }

    /// Replaces the game at `index`, invalidating cached coverage and
    /// fitness.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn replace_game(&mut self, index: usize, game: Game) {
        self.games[index] = game;
        self.invalidate();
    }

    /// Drops cached coverage and fitness.
    ///
    /// Called by every operation that changes a game; an evaluated
    /// individual is never mutated without going through here.
    pub fn invalidate(&mut self) {
        self.coverage = None;
        self.fitness = None;
    }

    /// The union of trincas covered by all games, computed lazily and
    /// cached until the next [`invalidate`](Self::invalidate).
    pub fn coverage(&mut self, space: &TrincaSpace) -> &CoverageBitset {
        if self.coverage.is_none() {
            let mut bits = CoverageBitset::new(space.total_trincas());
            for game in &self.games {
                space.accumulate(game, &mut bits);
            }
            self.coverage = Some(bits);
        }
        self.coverage.as_ref().expect("coverage computed above")
    }

    /// Number of distinct trincas covered.
    pub fn covered_count(&mut self, space: &TrincaSpace) -> usize {
        self.coverage(space).count_ones()
    }

    /// Cached fitness, or the worst possible value when not yet evaluated.
    ///
    /// Higher is better.
    pub fn fitness(&self) -> f64 {
        self.fitness.unwrap_or(f64::NEG_INFINITY)
    }

    /// Stores the fitness computed by the evaluator.
    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = Some(fitness);
    }
}
