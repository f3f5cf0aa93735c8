//! Property-based tests for the Applicative laws.
//!
//! - **Identity**: `fa.apply(pure(|x| x)) == fa`
//! - **Homomorphism**: `pure(a).apply(pure(f)) == pure(f(a))`
//! - **Map consistency**: `fa.map2(pure(()), |a, ()| f(a)) == fa.fmap(f)`

use kindling::control::Either;
use kindling::typeclass::{Applicative, Functor, Identity};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_option_identity_law(value in any::<Option<i32>>()) {
        let identity: fn(i32) -> i32 = |x| x;
        prop_assert_eq!(value.apply(<Option<()>>::pure(identity)), value);
    }

    #[test]
    fn prop_option_homomorphism_law(value in any::<i32>()) {
        let double: fn(i32) -> i32 = |x| x.wrapping_mul(2);
        prop_assert_eq!(
            <Option<()>>::pure(value).apply(<Option<()>>::pure(double)),
            <Option<()>>::pure(double(value))
        );
    }

    #[test]
    fn prop_option_map2_is_fmap_against_unit(value in any::<Option<i32>>()) {
        let double = |n: i32| n.wrapping_mul(2);
        prop_assert_eq!(
            value.map2(<Option<()>>::pure(()), move |a, ()| double(a)),
            value.fmap(double)
        );
    }

    #[test]
    fn prop_option_map2_short_circuits_on_none(value in any::<i32>()) {
        prop_assert_eq!(Some(value).map2(None::<i32>, |a, b| a.wrapping_add(b)), None);
        prop_assert_eq!(None::<i32>.map2(Some(value), |a, b| a.wrapping_add(b)), None);
    }

    #[test]
    fn prop_result_identity_law(value in prop::result::maybe_ok(any::<i32>(), any::<String>())) {
        let identity: fn(i32) -> i32 = |x| x;
        prop_assert_eq!(
            value.clone().apply(<Result<(), String>>::pure(identity)),
            value
        );
    }

    #[test]
    fn prop_result_homomorphism_law(value in any::<i32>()) {
        let negate: fn(i32) -> i32 = |x| x.wrapping_neg();
        prop_assert_eq!(
            <Result<(), String>>::pure(value).apply(<Result<(), String>>::pure(negate)),
            <Result<(), String>>::pure(negate(value))
        );
    }

    #[test]
    fn prop_result_map2_keeps_the_first_error(
        first in any::<String>(),
        second in any::<String>(),
    ) {
        let left: Result<i32, String> = Err(first.clone());
        let right: Result<i32, String> = Err(second);
        prop_assert_eq!(left.map2(right, |a, b| a + b), Err(first));
    }

    #[test]
    fn prop_either_homomorphism_law(value in any::<i32>()) {
        let double: fn(i32) -> i32 = |x| x.wrapping_mul(2);
        prop_assert_eq!(
            <Either<String, ()>>::pure(value).apply(<Either<String, ()>>::pure(double)),
            <Either<String, ()>>::pure(double(value))
        );
    }

    #[test]
    fn prop_identity_map3_combines_in_order(
        first in any::<i8>(),
        second in any::<i8>(),
        third in any::<i8>(),
    ) {
        let combined = Identity(first).map3(Identity(second), Identity(third), |a, b, c| {
            (i32::from(a), i32::from(b), i32::from(c))
        });
        prop_assert_eq!(combined, Identity((i32::from(first), i32::from(second), i32::from(third))));
    }

    #[test]
    fn prop_option_product_pairs_both(first in any::<i32>(), second in any::<i32>()) {
        prop_assert_eq!(Some(first).product(Some(second)), Some((first, second)));
        prop_assert_eq!(Some(first).product(None::<i32>), None);
    }
}
