//! Semigroup type class - associative binary combination.
//!
//! A [`Semigroup`] is a type with an associative `combine` operation.
//! Strings combine by concatenation, vectors by appending, options by
//! combining their contents when both are present.
//!
//! # Laws
//!
//! ## Associativity Law
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindling::typeclass::Semigroup;
//!
//! let greeting = String::from("Hello, ").combine(String::from("World!"));
//! assert_eq!(greeting, "Hello, World!");
//!
//! assert_eq!(vec![1, 2].combine(vec![3, 4]), vec![1, 2, 3, 4]);
//! ```

use std::ops::{Add, Mul};

use super::identity::Identity;
use super::wrappers::{All, Any, Max, Min, Product, Sum};

/// A type with an associative binary operation.
///
/// # Laws
///
/// - **Associativity**: `a.combine(b).combine(c) == a.combine(b.combine(c))`
///
/// # Examples
///
/// ```rust
/// use kindling::typeclass::{Semigroup, Sum};
///
/// assert_eq!(Sum(3).combine(Sum(5)), Sum(8));
/// ```
pub trait Semigroup {
    /// Combines two values associatively.
    #[must_use]
    fn combine(self, other: Self) -> Self;
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// `None` is absorbed; two `Some`s combine their contents.
impl<T: Semigroup> Semigroup for Option<T> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(left), None) => Some(left),
            (None, right) => right,
        }
    }
}

/// The first `Err` wins; two `Ok`s combine their contents.
impl<T: Semigroup, E> Semigroup for Result<T, E> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Ok(left), Ok(right)) => Ok(left.combine(right)),
            (Err(error), _) | (Ok(_), Err(error)) => Err(error),
        }
    }
}

impl Semigroup for () {
    #[inline]
    fn combine(self, (): Self) -> Self {}
}

impl<T: Semigroup> Semigroup for Identity<T> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        Identity(self.0.combine(other.0))
    }
}

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        Sum(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        Product(self.0 * other.0)
    }
}

impl<A: Ord> Semigroup for Max<A> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        Max(self.0.max(other.0))
    }
}

impl<A: Ord> Semigroup for Min<A> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        Min(self.0.min(other.0))
    }
}

impl Semigroup for Any {
    #[inline]
    fn combine(self, other: Self) -> Self {
        Any(self.0 || other.0)
    }
}

impl Semigroup for All {
    #[inline]
    fn combine(self, other: Self) -> Self {
        All(self.0 && other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "", "")]
    #[case("Hello, ", "World!", "Hello, World!")]
    #[case("a", "", "a")]
    fn string_combine_concatenates(#[case] left: &str, #[case] right: &str, #[case] expected: &str) {
        assert_eq!(left.to_string().combine(right.to_string()), expected);
    }

    #[rstest]
    fn vec_combine_appends() {
        assert_eq!(vec![1, 2].combine(vec![3, 4]), vec![1, 2, 3, 4]);
        assert_eq!(Vec::<i32>::new().combine(vec![1]), vec![1]);
    }

    #[rstest]
    fn option_combine_absorbs_none() {
        let some = Some(Sum(1));
        assert_eq!(some.combine(Some(Sum(2))), Some(Sum(3)));
        assert_eq!(Some(Sum(1)).combine(None), Some(Sum(1)));
        assert_eq!(None.combine(Some(Sum(2))), Some(Sum(2)));
        assert_eq!(None::<Sum<i32>>.combine(None), None);
    }

    #[rstest]
    fn result_combine_keeps_first_error() {
        let ok: Result<Sum<i32>, &str> = Ok(Sum(1));
        let err: Result<Sum<i32>, &str> = Err("boom");
        assert_eq!(ok.combine(Ok(Sum(2))), Ok(Sum(3)));
        assert_eq!(err.combine(Ok(Sum(2))), Err("boom"));
        assert_eq!(Ok(Sum(1)).combine(Err("late")), Err::<Sum<i32>, _>("late"));
    }

    #[rstest]
    fn numeric_wrappers_combine() {
        assert_eq!(Sum(3).combine(Sum(5)), Sum(8));
        assert_eq!(Product(3).combine(Product(5)), Product(15));
        assert_eq!(Max(3).combine(Max(5)), Max(5));
        assert_eq!(Min(3).combine(Min(5)), Min(3));
    }

    #[rstest]
    fn bool_wrappers_combine() {
        assert_eq!(Any(false).combine(Any(true)), Any(true));
        assert_eq!(All(true).combine(All(false)), All(false));
        assert_eq!(All(true).combine(All(true)), All(true));
    }

    #[rstest]
    fn associativity_law_holds_for_strings() {
        let (a, b, c) = ("x".to_string(), "y".to_string(), "z".to_string());
        assert_eq!(
            a.clone().combine(b.clone()).combine(c.clone()),
            a.combine(b.combine(c))
        );
    }

    #[rstest]
    fn associativity_law_holds_for_sum() {
        let (a, b, c) = (Sum(1), Sum(2), Sum(3));
        assert_eq!(a.combine(b).combine(c), a.combine(b.combine(c)));
    }
}
