//! Full-deck sweep: solvability statistics over every possible hand.
//!
//! Drives the reachability engine once per distinct hand, weights each
//! bitmap by the hand's draw multiplicity, and accumulates per-target,
//! per-large-count counts. Hands are independent, so the per-hand searches
//! run in parallel.

use std::sync::atomic::{AtomicUsize, Ordering};

use log::info;
use rayon::prelude::*;

use crate::deck::{enumerate_hands, DeckError, Hand, LARGE_COUNT_CHOICES};
use crate::search::{reachable_targets, MIN_TARGET, TARGET_COUNT};

#[cfg(test)]
mod tests;

/// Hands between progress log lines.
const PROGRESS_INTERVAL: usize = 1000;

/// Accumulated solvability counts for the whole configuration space.
#[derive(Debug, Clone)]
pub struct SweepStats {
    /// `counts[t][n]` = number of draws with `n` large cards that solve
    /// target `MIN_TARGET + t`.
    counts: Vec<[u64; LARGE_COUNT_CHOICES]>,
    /// Total draws for each large-card count.
    denominators: [u64; LARGE_COUNT_CHOICES],
}

impl SweepStats {
    /// Probability that a random puzzle with `n` large cards is solvable,
    /// over a uniformly random target, indexed by `n`.
    pub fn probability_by_large_count(&self) -> [f64; LARGE_COUNT_CHOICES] {
        let targets = self.counts.len() as f64;
        let mut probs = [0.0; LARGE_COUNT_CHOICES];
        for (n, prob) in probs.iter_mut().enumerate() {
            let solved: u64 = self.counts.iter().map(|row| row[n]).sum();
            *prob = solved as f64 / (targets * self.denominators[n] as f64);
        }
        probs
    }

    /// Per-target solvability probability with the large-card count drawn
    /// uniformly at random, indexed by `target - MIN_TARGET`.
    pub fn probability_by_target(&self) -> Vec<f64> {
        self.counts
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&self.denominators)
                    .map(|(&count, &denom)| count as f64 / denom as f64)
                    .sum::<f64>()
                    / LARGE_COUNT_CHOICES as f64
            })
            .collect()
    }

    /// Per-target solvability probability for a fixed large-card count.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InvalidLargeCount`] when `n_large` is out of
    /// range.
    pub fn probability_by_target_with(&self, n_large: usize) -> Result<Vec<f64>, DeckError> {
        if n_large >= LARGE_COUNT_CHOICES {
            return Err(DeckError::InvalidLargeCount(n_large));
        }
        Ok(self
            .counts
            .iter()
            .map(|row| row[n_large] as f64 / self.denominators[n_large] as f64)
            .collect())
    }
}

/// Runs the reachability engine over every enumerable hand and accumulates
/// solvability counts per target and per large-card count.
///
/// # Errors
///
/// Enumeration itself cannot fail for the counts iterated here; the error
/// type is carried through from [`enumerate_hands`].
pub fn run_sweep() -> Result<SweepStats, DeckError> {
    let mut counts = vec![[0u64; LARGE_COUNT_CHOICES]; TARGET_COUNT];
    let mut denominators = [0u64; LARGE_COUNT_CHOICES];
    let processed = AtomicUsize::new(0);

    for n_large in 0..LARGE_COUNT_CHOICES {
        let hands: Vec<(Hand, u64)> = enumerate_hands(n_large)?.into_iter().collect();
        denominators[n_large] = hands.iter().map(|&(_, multiplicity)| multiplicity).sum();
        info!(
            "sweeping {} distinct hands ({} draws) with {} large cards",
            hands.len(),
            denominators[n_large],
            n_large
        );

        let column = solve_column(&hands, &processed);
        for (row, solved) in counts.iter_mut().zip(column) {
            row[n_large] += solved;
        }
    }

    Ok(SweepStats {
        counts,
        denominators,
    })
}

/// Multiplicity-weighted solvability counts per target for one batch of
/// hands, computed in parallel across hands.
fn solve_column(hands: &[(Hand, u64)], processed: &AtomicUsize) -> Vec<u64> {
    hands
        .par_iter()
        .fold(
            || vec![0u64; TARGET_COUNT],
            |mut acc, &(hand, multiplicity)| {
                let bitmap = reachable_targets(&hand);
                for (slot, &reachable) in acc.iter_mut().zip(bitmap.as_slice()) {
                    if reachable {
                        *slot += multiplicity;
                    }
                }
                let done = processed.fetch_add(1, Ordering::Relaxed) + 1;
                if done % PROGRESS_INTERVAL == 0 {
                    info!(
                        "processed {} hands, latest {:?} with multiplicity {}",
                        done, hand, multiplicity
                    );
                }
                acc
            },
        )
        .reduce(
            || vec![0u64; TARGET_COUNT],
            |mut a, b| {
                for (x, y) in a.iter_mut().zip(b) {
                    *x += y;
                }
                a
            },
        )
}

/// Prints the three probability rankings to standard output.
pub fn print_report(stats: &SweepStats) {
    let by_choice = stats.probability_by_large_count();
    let choice_order = descending_order(&by_choice);

    println!("\nSolvability probabilities by choice of n_large:");
    for &n_large in &choice_order {
        println!(
            "A puzzle with n_large = {} is solvable with probability {:.6}%",
            n_large,
            100.0 * by_choice[n_large]
        );
    }

    let by_target = stats.probability_by_target();
    println!("\nSolvability probabilities by extracted target with random choice of n_large:");
    for t in descending_order(&by_target) {
        println!(
            "A puzzle with target = {} is solvable with probability {:.2}%",
            MIN_TARGET + t as u64,
            100.0 * by_target[t]
        );
    }

    let best = choice_order[0];
    let by_target_best = stats
        .probability_by_target_with(best)
        .expect("ranked large-card counts stay within the valid range");
    println!(
        "\nSolvability probabilities by extracted target with optimal choice of n_large = {}:",
        best
    );
    for t in descending_order(&by_target_best) {
        println!(
            "A puzzle with target = {} is solvable with probability {:.2}%",
            MIN_TARGET + t as u64,
            100.0 * by_target_best[t]
        );
    }
}

/// Indices of `values` sorted by descending value.
fn descending_order(values: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| {
        values[b]
            .partial_cmp(&values[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    order
}
