use super::*;
use proptest::prelude::*;

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

// Property: the same input always yields the same result
proptest! {
    #[test]
    fn prop_add_is_idempotent(s in "\\PC*") {
        prop_assert_eq!(add(&s), add(&s));
    }
}

// Property: small non-negative values sum arithmetically
proptest! {
    #[test]
    fn prop_sum_of_small_values(values in prop::collection::vec(0i64..=1000, 1..20)) {
        let expected: i64 = values.iter().sum();
        prop_assert_eq!(add(&join(&values)), Ok(expected));
    }
}

// Property: values above 1000 never change the sum
proptest! {
    #[test]
    fn prop_large_values_ignored(
        values in prop::collection::vec(0i64..=1000, 1..10),
        large in prop::collection::vec(1001i64..1_000_000, 0..10),
    ) {
        let mut mixed = values.clone();
        mixed.extend(&large);
        prop_assert_eq!(add(&join(&mixed)), add(&join(&values)));
    }
}

// Property: every negative is reported, in input order
proptest! {
    #[test]
    fn prop_negatives_reported_in_order(values in prop::collection::vec(-1000i64..=1000, 1..20)) {
        let negatives: Vec<i64> = values.iter().copied().filter(|v| *v < 0).collect();
        let result = add(&join(&values));
        if negatives.is_empty() {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result, Err(CalcError::NegativeNumbers(negatives)));
        }
    }
}

// Property: a bracketed custom delimiter splits like a comma
proptest! {
    #[test]
    fn prop_custom_delimiter_matches_comma(
        values in prop::collection::vec(0i64..=1000, 1..10),
        delimiter in "[a-z;*%$]{1,4}",
    ) {
        let body = values
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(&delimiter);
        let input = format!("//[{}]\n{}", delimiter, body);
        prop_assert_eq!(add(&input), add(&join(&values)));
    }
}
