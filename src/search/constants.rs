//! Target range of the puzzle.

/// Smallest three-digit target.
pub const MIN_TARGET: u64 = 100;

/// Largest three-digit target.
pub const MAX_TARGET: u64 = 999;

/// Number of distinct targets in `[MIN_TARGET, MAX_TARGET]`.
pub const TARGET_COUNT: usize = (MAX_TARGET - MIN_TARGET + 1) as usize;
