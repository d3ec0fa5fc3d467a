//! Countdown - exhaustive exploration of the numbers game puzzle
//!
//! The puzzle draws six cards from a fixed pool (two copies each of 1-10,
//! one copy each of 25, 50, 75, 100) and asks for a three-digit target to
//! be reached by combining cards pairwise with +, -, * and exact /, every
//! intermediate value staying a positive integer.
//!
//! Two engines share one frontier-reduction skeleton:
//!
//! * [`search::reachable_targets`] computes the full set of reachable
//!   targets for a hand in one pass, used at scale by the [`sweep`] module
//!   to rank targets and large-card choices by solvability.
//! * [`search::solve`] finds a concrete expression for one target, or a
//!   witness that none exists.

pub mod cli;
pub mod deck;
pub mod expression;
pub mod search;
pub mod sweep;

// Re-export the main public API
pub use deck::{enumerate_hands, DeckError, Hand};
pub use expression::{Expression, ExpressionError, Op};
pub use search::{reachable_targets, solve, Solution, TargetBitmap};

/// Find an expression over the six cards that evaluates exactly to `target`.
///
/// This is a convenience wrapper over [`search::solve`]; the returned
/// [`Solution`] displays either as `"<expr> == <target>"` or as a message
/// naming the hand and the unreachable target.
///
/// # Examples
///
/// ```
/// use countdown::solve_puzzle;
///
/// let solution = solve_puzzle(&[2, 3, 7, 8, 9, 75], 657);
/// assert!(solution.is_solved());
/// assert!(solution.to_string().ends_with("== 657"));
/// ```
pub fn solve_puzzle(cards: &Hand, target: u64) -> Solution {
    search::solve(cards, target)
}
