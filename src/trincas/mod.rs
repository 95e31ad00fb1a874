//! Trinca universe: enumeration, canonical ranking, and coverage bitsets.
//!
//! A "trinca" is an unordered 3-number sub-combination of the lottery number
//! universe (the sub-combination size is configurable per run). This module
//! provides:
//!
//! - [`TrincaSpace`]: the read-only ranking of all trincas, built once per
//!   run and shared by every fitness evaluation
//! - [`CoverageBitset`]: the bitset of covered trinca indices that fitness
//!   evaluation unions and popcounts

mod bitset;
mod space;

pub use bitset::CoverageBitset;
pub use space::TrincaSpace;
