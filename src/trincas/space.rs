//! Trinca universe enumeration and canonical ranking.
//!
//! [`TrincaSpace`] maps every t-number sub-combination ("trinca", t = 3 by
//! default) of the number universe `1..=N` to a unique index in `[0, C(N,t))`.
//! Precomputing this ranking lets fitness evaluation work on bitset
//! union/popcount instead of re-generating combinations, which matters because
//! coverage is recomputed for every individual in every generation.
//!
//! The ranking is the colexicographic combination rank: for a sorted
//! 0-based trinca `x_0 < x_1 < … < x_{t-1}`,
//! `index = Σ C(x_i, i + 1)`, a bijection onto `[0, C(N,t))`.

use super::bitset::CoverageBitset;
use crate::ga::Game;

/// Read-only description of the trinca universe for one run.
///
/// Built once at engine start and shared by every fitness evaluation.
/// All methods are deterministic and side-effect-free: identical games
/// always produce identical coverage indices.
#[derive(Debug, Clone)]
pub struct TrincaSpace {
    universe_size: u16,
    game_size: usize,
    subcombination_size: usize,
    /// Pascal table: `binomial[n][k] = C(n, k)` for `k <= subcombination_size`.
    binomial: Vec<Vec<u64>>,
    total: usize,
    per_game: usize,
}

impl TrincaSpace {
    /// Builds the space for a `game_size`-of-`universe_size` draw with
    /// sub-combinations of `subcombination_size` numbers.
    ///
    /// Callers are expected to have validated the parameters
    /// (see [`GaConfig::validate`](crate::ga::GaConfig::validate)).
    pub fn new(universe_size: u16, game_size: usize, subcombination_size: usize) -> Self {
        debug_assert!(subcombination_size >= 1);
        debug_assert!(game_size > subcombination_size);
        debug_assert!(universe_size as usize >= game_size);

        let n = universe_size as usize;
        let t = subcombination_size;

        // Pascal recurrence, columns limited to k <= t.
        let mut binomial = vec![vec![0u64; t + 1]; n + 1];
        for row in 0..=n {
            binomial[row][0] = 1;
            for k in 1..=t.min(row) {
                binomial[row][k] = binomial[row - 1][k - 1] + binomial[row - 1][k];
            }
        }

        let total = binomial[n][t] as usize;
        let per_game = binomial[game_size][t] as usize;

        Self {
            universe_size,
            game_size,
            subcombination_size,
            binomial,
            total,
            per_game,
        }
    }

    /// Size of the number universe `N`.
    pub fn universe_size(&self) -> u16 {
        self.universe_size
    }

    /// Numbers drawn per game.
    pub fn game_size(&self) -> usize {
        self.game_size
    }

    /// Numbers per trinca (`t`).
    pub fn subcombination_size(&self) -> usize {
        self.subcombination_size
    }

    /// Total number of trincas in the universe, `C(N, t)`.
    pub fn total_trincas(&self) -> usize {
        self.total
    }

    /// Trincas covered by one game, `C(game_size, t)` (20 for 6-choose-3).
    pub fn trincas_per_game(&self) -> usize {
        self.per_game
    }

    /// Canonical index of a trinca in `[0, total_trincas())`.
    ///
    /// Accepts the trinca's numbers in any order; identity is the sorted
    /// combination, so permutations of the same numbers rank identically.
    ///
    /// # Panics
    /// Panics if `numbers` does not hold exactly `subcombination_size`
    /// distinct numbers within `[1, universe_size]`.
    pub fn trinca_index(&self, numbers: &[u16]) -> usize {
        assert_eq!(
            numbers.len(),
            self.subcombination_size,
            "trinca must have exactly {} numbers",
            self.subcombination_size
        );
        let mut sorted = numbers.to_vec();
        sorted.sort_unstable();
        self.rank_sorted(&sorted)
    }

    /// Colex rank of an already-sorted trinca.
    fn rank_sorted(&self, sorted: &[u16]) -> usize {
        let mut rank = 0u64;
        let mut prev = 0u16;
        for (i, &number) in sorted.iter().enumerate() {
            assert!(
                number >= 1 && number <= self.universe_size,
                "number {number} outside universe 1..={}",
                self.universe_size
            );
            if i > 0 {
                assert!(number > prev, "trinca numbers must be distinct");
            }
            prev = number;
            // 0-based member value
            rank += self.binomial[(number - 1) as usize][i + 1];
        }
        rank as usize
    }

    /// All trinca indices covered by `game`: exactly
    /// [`trincas_per_game`](Self::trincas_per_game) distinct entries.
    pub fn game_coverage(&self, game: &Game) -> Vec<u32> {
        let mut indices = Vec::with_capacity(self.per_game);
        self.for_each_trinca(game, |sorted| {
            indices.push(self.rank_sorted(sorted) as u32);
        });
        indices
    }

    /// Sets the bit of every trinca covered by `game`.
    ///
    /// Allocation-free variant of [`game_coverage`](Self::game_coverage) for
    /// the evaluation hot path.
    pub fn accumulate(&self, game: &Game, bits: &mut CoverageBitset) {
        self.for_each_trinca(game, |sorted| {
            bits.set(self.rank_sorted(sorted));
        });
    }

    /// Invokes `f` with each sorted t-subset of the game's numbers.
    fn for_each_trinca(&self, game: &Game, mut f: impl FnMut(&[u16])) {
        let numbers = game.numbers();
        let g = numbers.len();
        let t = self.subcombination_size;
        debug_assert_eq!(g, self.game_size);

        // Standard lexicographic combination walk over positions 0..g.
        let mut positions: Vec<usize> = (0..t).collect();
        let mut scratch = vec![0u16; t];
        loop {
            for (slot, &pos) in scratch.iter_mut().zip(positions.iter()) {
                *slot = numbers[pos];
            }
            // Game numbers are stored sorted, so the subset is sorted too.
            f(&scratch);

            let mut i = t - 1;
            loop {
                if positions[i] != i + g - t {
                    break;
                }
                if i == 0 {
                    return;
                }
                i -= 1;
            }
            positions[i] += 1;
            for j in i + 1..t {
                positions[j] = positions[j - 1] + 1;
            }
        }
    }
}
