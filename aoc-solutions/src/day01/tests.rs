use super::*;
use proptest::prelude::*;

const TEST_INPUT: &str = "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82";

#[test]
fn part1() {
    assert_eq!(Day01::part1(TEST_INPUT).unwrap(), Answer::Number(3));
}

#[test]
fn part2() {
    assert_eq!(Day01::part2(TEST_INPUT).unwrap(), Answer::Number(6));
}

#[test]
fn test_rejects_unknown_direction() {
    let result = Day01::part1("L10\nX5");
    assert!(matches!(result, Err(SolveError::SolveFailed(_))));
}

#[test]
fn test_full_turn_passes_zero_once() {
    assert_eq!(
        count_zeros(&[100]),
        ZeroCounts {
            landed_on_zero: 0,
            passed_zero: 1
        }
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// Landing on zero always counts as passing it as well
    #[test]
    fn prop_landed_never_exceeds_passed(
        rotations in prop::collection::vec(
            (1i32..500, any::<bool>()).prop_map(|(v, left)| if left { -v } else { v }),
            0..50,
        )
    ) {
        let counts = count_zeros(&rotations);
        prop_assert!(counts.landed_on_zero <= counts.passed_zero);
    }
}
