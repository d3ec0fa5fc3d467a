//! The expression-space search engines.
//!
//! Both engines reduce a multiset of numbers level by level: every step
//! picks an unordered pair, combines it with one of the four operations,
//! and carries the smaller multiset forward. States are deduplicated by
//! their descending-sorted value vector, which is what keeps whole-space
//! exploration tractable. The [`reachability`] engine records only which
//! values appear; the [`solver`] engine additionally carries the derivation
//! of every value so it can report a concrete expression.

mod bitmap;
pub mod constants;
mod reachability;
mod solver;
mod state;

pub use bitmap::TargetBitmap;
pub use constants::{MAX_TARGET, MIN_TARGET, TARGET_COUNT};
pub use reachability::reachable_targets;
pub use solver::{solve, Solution};

#[cfg(test)]
mod tests;
