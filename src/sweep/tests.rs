use std::sync::atomic::AtomicUsize;

use crate::deck::{Hand, LARGE_COUNT_CHOICES};
use crate::search::{reachable_targets, MIN_TARGET, TARGET_COUNT};
use crate::sweep::{descending_order, solve_column, SweepStats};

#[test]
fn test_solve_column_weights_by_multiplicity() {
    let first: Hand = [2, 3, 7, 8, 9, 75];
    let second: Hand = [1, 2, 3, 4, 5, 6];
    let hands = vec![(first, 3u64), (second, 16u64)];

    let processed = AtomicUsize::new(0);
    let column = solve_column(&hands, &processed);
    assert_eq!(column.len(), TARGET_COUNT);

    let first_bitmap = reachable_targets(&first);
    let second_bitmap = reachable_targets(&second);
    for (t, &count) in column.iter().enumerate() {
        let target = MIN_TARGET + t as u64;
        let mut expected = 0;
        if first_bitmap.contains(target) {
            expected += 3;
        }
        if second_bitmap.contains(target) {
            expected += 16;
        }
        assert_eq!(count, expected, "mismatch at target {}", target);
    }
}

#[test]
fn test_probability_by_large_count_normalizes_by_draws() {
    // Two targets, all five columns solved for the first target only, with
    // denominators 10 per column: probability = 10 / (2 * 10) = 0.5.
    let stats = SweepStats {
        counts: vec![[10; LARGE_COUNT_CHOICES], [0; LARGE_COUNT_CHOICES]],
        denominators: [10; LARGE_COUNT_CHOICES],
    };
    for prob in stats.probability_by_large_count() {
        assert!((prob - 0.5).abs() < 1e-12);
    }
}

#[test]
fn test_probability_by_large_count_over_full_target_range() {
    // A full-width counts matrix, as run_sweep builds it: every target
    // solved by every draw of choice 2, none elsewhere.
    let mut counts = vec![[0u64; LARGE_COUNT_CHOICES]; TARGET_COUNT];
    for row in &mut counts {
        row[2] = 7;
    }
    let stats = SweepStats {
        counts,
        denominators: [7; LARGE_COUNT_CHOICES],
    };
    let probs = stats.probability_by_large_count();
    assert!((probs[2] - 1.0).abs() < 1e-12);
    assert_eq!(probs[0], 0.0);
}

#[test]
fn test_top_ranked_choice_indexes_a_valid_column() {
    let mut counts = vec![[0u64; LARGE_COUNT_CHOICES]; 3];
    counts[0] = [1, 5, 9, 3, 2];
    let stats = SweepStats {
        counts,
        denominators: [10; LARGE_COUNT_CHOICES],
    };
    let best = descending_order(&stats.probability_by_large_count())[0];
    assert_eq!(best, 2);
    assert!(stats.probability_by_target_with(best).is_ok());
}

#[test]
fn test_probability_by_target_averages_choices() {
    let mut counts = vec![[0u64; LARGE_COUNT_CHOICES]; 2];
    // First target solvable by every draw of one choice only.
    counts[0][2] = 20;
    let stats = SweepStats {
        counts,
        denominators: [20; LARGE_COUNT_CHOICES],
    };

    let probs = stats.probability_by_target();
    assert!((probs[0] - 1.0 / LARGE_COUNT_CHOICES as f64).abs() < 1e-12);
    assert_eq!(probs[1], 0.0);

    let fixed = stats.probability_by_target_with(2).unwrap();
    assert_eq!(fixed[0], 1.0);
    assert_eq!(fixed[1], 0.0);

    assert!(stats.probability_by_target_with(5).is_err());
}

#[test]
fn test_descending_order_ranks_probabilities() {
    let order = descending_order(&[0.25, 0.9, 0.5]);
    assert_eq!(order, vec![1, 2, 0]);
}
