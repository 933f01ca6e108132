//! the three strategies must agree with each other and with validation

use proptest::prelude::*;
use serde_json::json;
use sum_to_n::Strategy as SumStrategy;
use sum_to_n::{parse, sum_to_n, sum_with, Error};

#[test]
fn test_reference_values() {
    assert_eq!(sum_to_n(&json!(0)), Ok(0));
    assert_eq!(sum_to_n(&json!(1)), Ok(1));
    assert_eq!(sum_to_n(&json!(10)), Ok(55));
}

#[test]
fn test_every_strategy_validates() {
    for strategy in SumStrategy::ALL {
        assert_eq!(sum_with(&json!(-1), strategy), Err(Error::Negative));
        assert_eq!(sum_with(&json!(1.5), strategy), Err(Error::NotAnInteger));
        assert_eq!(sum_with(&json!("3"), strategy), Err(Error::NotANumber));
    }
}

#[test]
fn test_error_messages() {
    assert_eq!(Error::NotANumber.to_string(), "n must be a number");
    assert_eq!(Error::NotAnInteger.to_string(), "n must be an integer");
    assert_eq!(Error::Negative.to_string(), "n must be non-negative");
}

proptest! {
    #[test]
    fn strategies_agree(n in 0u64..20_000) {
        let expected = SumStrategy::ClosedForm.sum(n);
        prop_assert_eq!(SumStrategy::Iterative.sum(n), expected);
        prop_assert_eq!(SumStrategy::Fold.sum(n), expected);
    }

    #[test]
    fn parsed_text_matches_direct_sum(n in 0u64..20_000) {
        let parsed = parse(&n.to_string()).unwrap();
        prop_assert_eq!(parsed, n);
        prop_assert_eq!(sum_with(&json!(n), SumStrategy::Fold), Ok(SumStrategy::Iterative.sum(n)));
    }

    #[test]
    fn negative_integers_are_refused(n in i64::MIN..0) {
        prop_assert_eq!(sum_to_n(&json!(n)), Err(Error::Negative));
    }
}
