use calcul::{calculate_number, dispatch, round_half_up, CalcError, Operation};
use proptest::prelude::*;

/// 一般有限值、整數與 k + 0.5 的邊界值
fn operand() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1.0e12f64..1.0e12f64,
        (-1_000_000i64..1_000_000i64).prop_map(|k| k as f64 + 0.5),
        (-1_000i64..1_000i64).prop_map(|k| k as f64),
    ]
}

proptest! {
    #[test]
    fn sum_matches_rounded_operands(a in operand(), b in operand()) {
        let expected = round_half_up(a) + round_half_up(b);
        prop_assert_eq!(dispatch(Operation::Sum, a, b).unwrap(), expected);
    }

    #[test]
    fn subtract_matches_rounded_operands(a in operand(), b in operand()) {
        let expected = round_half_up(a) - round_half_up(b);
        prop_assert_eq!(dispatch(Operation::Subtract, a, b).unwrap(), expected);
    }

    #[test]
    fn divide_fails_only_on_rounded_zero_divisor(a in operand(), b in operand()) {
        let divisor = round_half_up(b);
        let result = dispatch(Operation::Divide, a, b);

        if divisor == 0.0 {
            prop_assert!(matches!(result, Err(CalcError::DivisionByZero)));
        } else {
            prop_assert_eq!(result.unwrap(), round_half_up(a) / divisor);
        }
    }

    #[test]
    fn divide_by_small_divisors(a in operand(), b in -0.99f64..0.99f64) {
        let result = dispatch(Operation::Divide, a, b);
        prop_assert_eq!(result.is_err(), (-0.5..0.5).contains(&b));
    }

    #[test]
    fn rounding_stays_within_half(x in operand()) {
        let rounded = round_half_up(x);
        let delta = rounded - x;

        prop_assert!(delta > -0.5 && delta <= 0.5, "{} -> {}", x, rounded);
        prop_assert_eq!(rounded, rounded.floor());
        prop_assert!(rounded != 0.0 || rounded.is_sign_positive());
    }

    #[test]
    fn halves_round_up(k in -1_000_000i64..1_000_000i64) {
        prop_assert_eq!(round_half_up(k as f64 + 0.5), (k + 1) as f64);
    }

    #[test]
    fn lowercase_tags_are_rejected(a in operand(), b in operand()) {
        for op in Operation::ALL {
            let tag = op.as_tag().to_lowercase();
            let is_invalid_operation =
                matches!(calculate_number(&tag, a, b), Err(CalcError::InvalidOperation { .. }));
            prop_assert!(is_invalid_operation);
        }
    }
}
