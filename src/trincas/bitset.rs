//! Fixed-length bitset over trinca indices.
//!
//! Fitness evaluation reduces to bitset union + popcount, so this type is on
//! the hot path: `populationSize × generations` coverage computations per run,
//! each touching `gameCount × C(gameSize, t)` bits.

/// A fixed-length bitset backed by `u64` words.
///
/// Bit `i` set means trinca index `i` is covered by at least one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageBitset {
    words: Vec<u64>,
    len: usize,
}

impl CoverageBitset {
    /// Creates an all-zero bitset holding `len` bits.
    pub fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(64)],
            len,
        }
    }

    /// Number of bits this set holds.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if the set holds zero bits.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sets bit `index`.
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    pub fn set(&mut self, index: usize) {
        assert!(index < self.len, "bit index {index} out of range {}", self.len);
        self.words[index / 64] |= 1u64 << (index % 64);
    }

    /// Returns whether bit `index` is set.
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    pub fn contains(&self, index: usize) -> bool {
        assert!(index < self.len, "bit index {index} out of range {}", self.len);
        self.words[index / 64] & (1u64 << (index % 64)) != 0
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// `true` if every bit is set.
    pub fn is_full(&self) -> bool {
        self.count_ones() == self.len
    }

    /// Clears all bits.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }
}
