//! Frontier-step rules shared by both engines.

use crate::expression::Op;

/// Exploration order for the four operations.
pub(crate) const OPS: [Op; 4] = [Op::Mul, Op::Div, Op::Add, Op::Sub];

/// Whether combining with `n` under `op` is a useless no-op.
///
/// Multiplying or dividing by 1 reproduces a value already in the state and
/// only inflates the search space; subtracting 1 stays legal and useful.
/// `n` is the smaller of the pair, so only it can be 1 for division.
pub(crate) fn is_noop(op: Op, n: u64) -> bool {
    matches!(op, Op::Mul | Op::Div) && n == 1
}

/// All values legally producible by combining `m` and `n`, where `m >= n`.
///
/// Only `m - n` is tried for subtraction since the reverse can never stay
/// positive; the pair itself is unordered for the commutative operations.
pub(crate) fn candidate_values(m: u64, n: u64) -> impl Iterator<Item = u64> {
    OPS.into_iter()
        .filter(move |&op| !is_noop(op, n))
        .filter_map(move |op| op.apply(m, n))
}
