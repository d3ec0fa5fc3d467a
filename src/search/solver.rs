//! Solver engine: a concrete expression reaching one target.

use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use itertools::Itertools;
use log::debug;

use crate::deck::Hand;
use crate::expression::{Expression, Op};
use crate::search::state::{is_noop, OPS};

/// A value paired with the expression that derived it.
#[derive(Debug, Clone)]
struct CalcNode {
    value: u64,
    expr: Rc<Expression>,
}

impl CalcNode {
    fn card(value: u64) -> Self {
        Self {
            value,
            expr: Rc::new(Expression::Card(value)),
        }
    }

    /// Combines two nodes under `op`, or `None` when the operation is
    /// disallowed for their values.
    fn combine(op: Op, m: &CalcNode, n: &CalcNode) -> Option<CalcNode> {
        let value = op.apply(m.value, n.value)?;
        Some(CalcNode {
            value,
            expr: Rc::new(Expression::combine(op, m.expr.clone(), n.expr.clone())),
        })
    }
}

/// Outcome of a solve: a witness expression, or proof of exhaustion.
#[derive(Debug, Clone)]
pub enum Solution {
    /// An expression over the cards whose value equals the target.
    Solved { expr: Expression, target: u64 },
    /// The search exhausted every combination without reaching the target.
    Unsolvable { hand: Hand, target: u64 },
}

impl Solution {
    pub fn is_solved(&self) -> bool {
        matches!(self, Solution::Solved { .. })
    }

    /// The witness expression, when one was found.
    pub fn expression(&self) -> Option<&Expression> {
        match self {
            Solution::Solved { expr, .. } => Some(expr),
            Solution::Unsolvable { .. } => None,
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solution::Solved { expr, target } => write!(f, "{} == {}", expr, target),
            Solution::Unsolvable { hand, target } => write!(
                f,
                "no combination of ({}) yields {}",
                hand.iter().join(", "),
                target
            ),
        }
    }
}

/// Searches for an expression over `cards` that evaluates exactly to
/// `target`.
///
/// Same frontier walk as the reachability engine, with each value carrying
/// its derivation. The first candidate equal to the target wins and the
/// search stops there, so the result is some valid expression rather than a
/// minimal one. Any intermediate sub-expression counts: the remaining cards
/// are simply left unused.
pub fn solve(cards: &Hand, target: u64) -> Solution {
    let mut state: Vec<CalcNode> = cards.iter().map(|&c| CalcNode::card(c)).collect();
    state.sort_by(|a, b| b.value.cmp(&a.value));

    let mut witness: Hand = *cards;
    witness.sort_unstable_by(|a, b| b.cmp(a));

    let mut frontier = vec![state];
    let mut cardinality = cards.len();

    while cardinality > 1 {
        let mut next: Vec<Vec<CalcNode>> = Vec::new();
        let mut seen: HashSet<Vec<u64>> = HashSet::new();
        for state in &frontier {
            for i in 0..state.len() {
                for j in (i + 1)..state.len() {
                    let (m, n) = (&state[i], &state[j]);
                    for op in OPS {
                        if is_noop(op, n.value) {
                            continue;
                        }
                        let Some(candidate) = CalcNode::combine(op, m, n) else {
                            continue;
                        };
                        if candidate.value == target {
                            debug!(
                                "found {} with {} numbers left unused",
                                candidate.expr,
                                cardinality - 2
                            );
                            return Solution::Solved {
                                expr: (*candidate.expr).clone(),
                                target,
                            };
                        }
                        if cardinality > 2 && !state.iter().any(|node| node.value == candidate.value)
                        {
                            let reduced = reduced_nodes(state, i, j, candidate);
                            let key: Vec<u64> = reduced.iter().map(|node| node.value).collect();
                            // Keyed by value multiset: alternative derivations
                            // of the same values reach the same targets.
                            if seen.insert(key) {
                                next.push(reduced);
                            }
                        }
                    }
                }
            }
        }
        frontier = next;
        cardinality -= 1;
    }

    Solution::Unsolvable {
        hand: witness,
        target,
    }
}

/// The state left after combining positions `i` and `j` into `candidate`,
/// re-sorted descending by value.
fn reduced_nodes(state: &[CalcNode], i: usize, j: usize, candidate: CalcNode) -> Vec<CalcNode> {
    let mut out = Vec::with_capacity(state.len() - 1);
    out.push(candidate);
    out.extend(
        state
            .iter()
            .enumerate()
            .filter(|&(k, _)| k != i && k != j)
            .map(|(_, node)| node.clone()),
    );
    out.sort_by(|a, b| b.value.cmp(&a.value));
    out
}
