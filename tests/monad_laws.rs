//! Property-based tests for the Monad laws.
//!
//! - **Left Identity**: `pure(a).flat_map(f) == f(a)`
//! - **Right Identity**: `m.flat_map(pure) == m`
//! - **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`

use kindling::control::Either;
use kindling::typeclass::{Applicative, Identity, Monad};
use proptest::prelude::*;

fn half_if_even(n: i32) -> Option<i32> {
    if n % 2 == 0 { Some(n / 2) } else { None }
}

fn positive_or_error(n: i32) -> Result<i32, String> {
    if n > 0 {
        Ok(n)
    } else {
        Err("not positive".to_string())
    }
}

fn either_strategy() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        any::<String>().prop_map(Either::Left),
        any::<i32>().prop_map(Either::Right),
    ]
}

proptest! {
    #[test]
    fn prop_option_left_identity(value in any::<i32>()) {
        prop_assert_eq!(
            <Option<()>>::pure(value).flat_map(half_if_even),
            half_if_even(value)
        );
    }

    #[test]
    fn prop_option_right_identity(value in any::<Option<i32>>()) {
        prop_assert_eq!(value.flat_map(<Option<()>>::pure), value);
    }

    #[test]
    fn prop_option_associativity(value in any::<Option<i32>>()) {
        let double_if_small = |n: i32| if n.abs() < 1_000 { Some(n * 2) } else { None };

        prop_assert_eq!(
            value.flat_map(half_if_even).flat_map(double_if_small),
            value.flat_map(move |x| half_if_even(x).flat_map(double_if_small))
        );
    }

    #[test]
    fn prop_result_left_identity(value in any::<i32>()) {
        prop_assert_eq!(
            <Result<(), String>>::pure(value).flat_map(positive_or_error),
            positive_or_error(value)
        );
    }

    #[test]
    fn prop_result_right_identity(value in prop::result::maybe_ok(any::<i32>(), any::<String>())) {
        prop_assert_eq!(value.clone().flat_map(<Result<(), String>>::pure), value);
    }

    #[test]
    fn prop_result_associativity(value in prop::result::maybe_ok(any::<i32>(), any::<String>())) {
        let halve = |n: i32| -> Result<i32, String> { Ok(n / 2) };

        prop_assert_eq!(
            value.clone().flat_map(positive_or_error).flat_map(halve),
            value.flat_map(move |x| positive_or_error(x).flat_map(halve))
        );
    }

    #[test]
    fn prop_either_left_identity(value in any::<i32>()) {
        let classify = |n: i32| -> Either<String, i32> {
            if n % 2 == 0 {
                Either::Right(n)
            } else {
                Either::Left("odd".to_string())
            }
        };

        prop_assert_eq!(
            <Either<String, ()>>::pure(value).flat_map(classify),
            classify(value)
        );
    }

    #[test]
    fn prop_either_right_identity(value in either_strategy()) {
        prop_assert_eq!(value.clone().flat_map(<Either<String, ()>>::pure), value);
    }

    #[test]
    fn prop_identity_associativity(value in any::<i32>()) {
        let add = |n: i32| Identity(n.wrapping_add(1));
        let double = |n: i32| Identity(n.wrapping_mul(2));

        prop_assert_eq!(
            Identity(value).flat_map(add).flat_map(double),
            Identity(value).flat_map(move |x| add(x).flat_map(double))
        );
    }

    #[test]
    fn prop_flatten_agrees_with_flat_map(value in any::<Option<i32>>()) {
        prop_assert_eq!(Some(value).flatten(), value);
    }

    #[test]
    fn prop_then_discards_the_first_value(first in any::<i32>(), second in any::<i32>()) {
        prop_assert_eq!(Some(first).then(Some(second)), Some(second));
    }
}
