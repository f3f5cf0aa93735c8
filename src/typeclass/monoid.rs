//! Monoid type class - a semigroup with an identity element.
//!
//! A [`Monoid`] adds `empty`, the value that combines with anything without
//! changing it. That identity is what makes folding an arbitrary (possibly
//! empty) collection well-defined: [`Monoid::combine_all`] needs somewhere
//! to start.
//!
//! # Laws
//!
//! In addition to `Semigroup` associativity:
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::empty().combine(a) == a
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! a.combine(Self::empty()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindling::typeclass::{Monoid, Semigroup, Sum};
//!
//! assert_eq!(String::empty().combine("hello".to_string()), "hello");
//!
//! let total = Sum::combine_all(vec![Sum(1), Sum(2), Sum(3)]);
//! assert_eq!(total, Sum(6));
//! ```

use std::ops::{Add, Mul};

use super::identity::Identity;
use super::semigroup::Semigroup;
use super::wrappers::{All, Any, Bounded, Max, Min, Product, Sum};

/// A semigroup with an identity element.
///
/// # Laws
///
/// - **Left Identity**: `Self::empty().combine(a) == a`
/// - **Right Identity**: `a.combine(Self::empty()) == a`
pub trait Monoid: Semigroup {
    /// The identity element of `combine`.
    #[must_use]
    fn empty() -> Self;

    /// Folds an iterator of values into one, starting from the identity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::Monoid;
    ///
    /// let joined = String::combine_all(vec!["a".into(), "b".into(), "c".into()]);
    /// assert_eq!(joined, "abc");
    ///
    /// let none: Vec<String> = vec![];
    /// assert_eq!(String::combine_all(none), String::empty());
    /// ```
    #[must_use]
    fn combine_all<I>(iterator: I) -> Self
    where
        Self: Sized,
        I: IntoIterator<Item = Self>,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), Semigroup::combine)
    }
}

impl Monoid for String {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    #[inline]
    fn empty() -> Self {
        None
    }
}

impl Monoid for () {
    #[inline]
    fn empty() -> Self {}
}

impl<T: Monoid> Monoid for Identity<T> {
    #[inline]
    fn empty() -> Self {
        Identity(T::empty())
    }
}

impl<A: Add<Output = A> + From<u8>> Monoid for Sum<A> {
    #[inline]
    fn empty() -> Self {
        Self(A::from(0))
    }
}

impl<A: Mul<Output = A> + From<u8>> Monoid for Product<A> {
    #[inline]
    fn empty() -> Self {
        Self(A::from(1))
    }
}

impl<A: Ord + Bounded> Monoid for Max<A> {
    #[inline]
    fn empty() -> Self {
        Self(A::MIN_VALUE)
    }
}

impl<A: Ord + Bounded> Monoid for Min<A> {
    #[inline]
    fn empty() -> Self {
        Self(A::MAX_VALUE)
    }
}

impl Monoid for Any {
    #[inline]
    fn empty() -> Self {
        Self(false)
    }
}

impl Monoid for All {
    #[inline]
    fn empty() -> Self {
        Self(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn string_identity_laws() {
        let value = "hello".to_string();
        assert_eq!(String::empty().combine(value.clone()), value);
        assert_eq!(value.clone().combine(String::empty()), value);
    }

    #[rstest]
    fn vec_identity_laws() {
        let value = vec![1, 2, 3];
        assert_eq!(Vec::empty().combine(value.clone()), value);
        assert_eq!(value.clone().combine(Vec::empty()), value);
    }

    #[rstest]
    fn option_empty_is_none() {
        assert_eq!(Option::<Sum<i32>>::empty(), None);
        assert_eq!(Option::<Sum<i32>>::empty().combine(Some(Sum(3))), Some(Sum(3)));
    }

    #[rstest]
    fn sum_and_product_identities() {
        assert_eq!(Sum::<i32>::empty(), Sum(0));
        assert_eq!(Product::<i32>::empty(), Product(1));
        assert_eq!(Sum::<i32>::empty().combine(Sum(7)), Sum(7));
        assert_eq!(Product(7).combine(Product::<i32>::empty()), Product(7));
    }

    #[rstest]
    fn max_and_min_identities() {
        assert_eq!(Max::<i32>::empty().combine(Max(-5)), Max(-5));
        assert_eq!(Min::<i32>::empty().combine(Min(5)), Min(5));
    }

    #[rstest]
    fn bool_wrapper_identities() {
        assert_eq!(Any::empty().combine(Any(true)), Any(true));
        assert_eq!(Any::empty().combine(Any(false)), Any(false));
        assert_eq!(All::empty().combine(All(false)), All(false));
    }

    #[rstest]
    fn combine_all_folds_from_identity() {
        assert_eq!(Sum::combine_all(vec![Sum(1), Sum(2), Sum(3)]), Sum(6));
        assert_eq!(Sum::<i32>::combine_all(Vec::new()), Sum(0));
        assert_eq!(
            String::combine_all(vec!["a".to_string(), "b".to_string()]),
            "ab"
        );
        assert_eq!(Any::combine_all(vec![Any(false), Any(true)]), Any(true));
    }
}
