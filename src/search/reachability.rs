//! Reachability engine: every target a hand can produce, in one pass.

use std::collections::HashSet;

use log::debug;

use crate::deck::Hand;
use crate::search::bitmap::TargetBitmap;
use crate::search::state::candidate_values;

/// Computes the full set of reachable targets for `cards`.
///
/// Every value produced anywhere in the search is marked, not only the last
/// remaining one: a sub-expression that hits a target simply leaves the
/// other cards unused, which the game allows. Values above the target range
/// are kept in frontier states (a later division can bring them back into
/// range) but never recorded.
///
/// The input is a multiset; card order does not affect the result.
pub fn reachable_targets(cards: &Hand) -> TargetBitmap {
    let mut start = cards.to_vec();
    start.sort_unstable_by(|a, b| b.cmp(a));

    let mut bitmap = TargetBitmap::new();
    let mut frontier: HashSet<Vec<u64>> = HashSet::from([start]);
    let mut cardinality = cards.len();

    while cardinality > 1 {
        let mut next: HashSet<Vec<u64>> = HashSet::new();
        for state in &frontier {
            for i in 0..state.len() {
                for j in (i + 1)..state.len() {
                    let (m, n) = (state[i], state[j]);
                    for value in candidate_values(m, n) {
                        bitmap.mark(value);
                        // A combination that reproduces a value already in
                        // the state adds nothing and is pruned.
                        if cardinality > 2 && !state.contains(&value) {
                            next.insert(reduced(state, i, j, value));
                        }
                    }
                }
            }
        }
        cardinality -= 1;
        debug!(
            "frontier holds {} states of cardinality {}",
            next.len(),
            cardinality
        );
        frontier = next;
    }

    bitmap
}

/// The state left after combining positions `i` and `j` into `value`,
/// re-sorted descending so equal multisets collapse to one key.
fn reduced(state: &[u64], i: usize, j: usize, value: u64) -> Vec<u64> {
    let mut out = Vec::with_capacity(state.len() - 1);
    out.push(value);
    out.extend(
        state
            .iter()
            .enumerate()
            .filter(|&(k, _)| k != i && k != j)
            .map(|(_, &v)| v),
    );
    out.sort_unstable_by(|a, b| b.cmp(a));
    out
}
