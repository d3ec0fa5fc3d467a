use crate::deck::Hand;
use crate::search::state::candidate_values;
use crate::search::{reachable_targets, solve, MAX_TARGET, MIN_TARGET, Solution, TARGET_COUNT};

#[test]
fn test_solves_known_puzzle() {
    let hand: Hand = [2, 3, 7, 8, 9, 75];
    let solution = solve(&hand, 657);
    assert!(solution.is_solved());

    let expr = solution.expression().unwrap();
    assert_eq!(expr.evaluate(), Ok(657));
    assert!(solution.to_string().ends_with("== 657"));
}

#[test]
fn test_unsolvable_puzzle_names_hand_and_target() {
    let hand: Hand = [2, 6, 25, 50, 75, 100];
    let solution = solve(&hand, 818);
    assert!(!solution.is_solved());
    assert_eq!(
        solution.to_string(),
        "no combination of (100, 75, 50, 25, 6, 2) yields 818"
    );
}

#[test]
fn test_solution_uses_only_cards_from_the_hand() {
    let hand: Hand = [1, 3, 4, 10, 25, 50];
    let solution = solve(&hand, 999);
    if let Solution::Solved { expr, .. } = solution {
        // Every literal in the rendered expression must come from the hand.
        let rendered = expr.to_string();
        for token in rendered.split(|c: char| !c.is_ascii_digit()) {
            if token.is_empty() {
                continue;
            }
            let value: u64 = token.parse().unwrap();
            assert!(hand.contains(&value), "literal {} not in hand", value);
        }
    }
}

#[test]
fn test_reachability_ignores_card_order() {
    let a = reachable_targets(&[2, 3, 7, 8, 9, 75]);
    let b = reachable_targets(&[75, 9, 8, 7, 3, 2]);
    let c = reachable_targets(&[8, 75, 2, 9, 3, 7]);
    assert_eq!(a, b);
    assert_eq!(a, c);
}

#[test]
fn test_reachability_is_deterministic() {
    let hand: Hand = [1, 2, 3, 4, 5, 6];
    assert_eq!(reachable_targets(&hand), reachable_targets(&hand));
}

#[test]
fn test_known_reachable_values_for_small_hand() {
    // 6*5*4*3*2 = 720, and the leftover 1 gives 719 and 721.
    let bitmap = reachable_targets(&[1, 2, 3, 4, 5, 6]);
    assert!(bitmap.contains(720));
    assert!(bitmap.contains(719));
    assert!(bitmap.contains(721));
}

#[test]
fn test_engines_agree_on_every_target() {
    let hand: Hand = [1, 2, 3, 4, 5, 6];
    let bitmap = reachable_targets(&hand);
    for target in MIN_TARGET..=MAX_TARGET {
        let solved = solve(&hand, target).is_solved();
        assert_eq!(
            bitmap.contains(target),
            solved,
            "engines disagree on target {}",
            target
        );
    }
}

#[test]
fn test_candidate_values_are_strictly_positive() {
    for m in 1..=20u64 {
        for n in 1..=m {
            for value in candidate_values(m, n) {
                assert!(value > 0, "combining {} and {} produced {}", m, n, value);
            }
        }
    }
}

#[test]
fn test_candidate_values_skip_noop_unit_factors() {
    // With n = 1 only addition and subtraction remain.
    let values: Vec<u64> = candidate_values(7, 1).collect();
    assert_eq!(values, vec![8, 6]);
}

#[test]
fn test_candidate_values_keep_exact_division_only() {
    let values: Vec<u64> = candidate_values(10, 4).collect();
    // 40, 14, 6: the inexact 10/4 is absent.
    assert_eq!(values, vec![40, 14, 6]);
}

#[test]
fn test_bitmap_bounds() {
    let bitmap = reachable_targets(&[25, 50, 75, 100, 9, 10]);
    assert!(!bitmap.contains(99));
    assert!(!bitmap.contains(1000));
    assert!(bitmap.count() <= TARGET_COUNT);
    assert!(bitmap.iter().all(|t| (MIN_TARGET..=MAX_TARGET).contains(&t)));
}

#[test]
fn test_solved_expressions_respect_game_rules() {
    // Re-evaluation checks positivity and exactness of every intermediate.
    let hand: Hand = [4, 5, 6, 8, 25, 75];
    let bitmap = reachable_targets(&hand);
    for target in [MIN_TARGET, 347, 652, MAX_TARGET] {
        let solution = solve(&hand, target);
        assert_eq!(bitmap.contains(target), solution.is_solved());
        if let Some(expr) = solution.expression() {
            assert_eq!(expr.evaluate(), Ok(target));
        }
    }
}
