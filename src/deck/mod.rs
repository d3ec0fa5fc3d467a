//! Card pools and weighted hand enumeration.

mod errors;

pub use errors::DeckError;


use std::collections::BTreeMap;
use std::iter;

use itertools::Itertools;
use log::debug;

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 6;

/// Values of the small cards; the physical pool holds [`SMALL_CARD_COPIES`]
/// copies of each.
pub const SMALL_CARD_VALUES: [u64; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

/// Physical copies of each small card in the pool.
pub const SMALL_CARD_COPIES: usize = 2;

/// The large cards, one physical copy of each.
pub const LARGE_CARDS: [u64; 4] = [25, 50, 75, 100];

/// The possible choices for the number of large cards, 0 through 4.
pub const LARGE_COUNT_CHOICES: usize = LARGE_CARDS.len() + 1;

/// A canonical hand: six card values sorted ascending.
pub type Hand = [u64; HAND_SIZE];

/// Enumerates every distinct hand containing exactly `n_large` large cards,
/// mapped to its draw multiplicity.
///
/// The multiplicity counts physical draws: the small pool holds two copies
/// of each value, so draws that pick different physical copies of the same
/// values collapse to one canonical hand with a higher count. For example
/// with `n_large = 2`, `(1, 1, 2, 2, 25, 50)` can be drawn exactly one way
/// while `(1, 2, 3, 4, 25, 50)` can be drawn 16 ways. These weights are what
/// make the sweep's probabilities exact rather than per-distinct-hand.
///
/// # Errors
///
/// Returns [`DeckError::InvalidLargeCount`] when `n_large` exceeds the size
/// of the large-card pool.
pub fn enumerate_hands(n_large: usize) -> Result<BTreeMap<Hand, u64>, DeckError> {
    if n_large > LARGE_CARDS.len() {
        return Err(DeckError::InvalidLargeCount(n_large));
    }
    let n_small = HAND_SIZE - n_large;

    // The physical small pool, duplicates included: combinations over it are
    // by position, which double-counts equal-valued picks on purpose.
    let small_pool: Vec<u64> = SMALL_CARD_VALUES
        .iter()
        .flat_map(|&value| iter::repeat(value).take(SMALL_CARD_COPIES))
        .collect();

    let mut hands: BTreeMap<Hand, u64> = BTreeMap::new();
    for large_pick in LARGE_CARDS.iter().copied().combinations(n_large) {
        for small_pick in small_pool.iter().copied().combinations(n_small) {
            let mut hand: Hand = [0; HAND_SIZE];
            hand[..n_large].copy_from_slice(&large_pick);
            hand[n_large..].copy_from_slice(&small_pick);
            hand.sort_unstable();
            *hands.entry(hand).or_insert(0) += 1;
        }
    }

    debug!(
        "enumerated {} distinct hands with {} large cards",
        hands.len(),
        n_large
    );
    Ok(hands)
}
